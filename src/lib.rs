//! # vlsm - Variable-Length Subnet Mask allocation planner
//!
//! Given one parent IPv4 network and a set of named host-count requirements,
//! this library partitions the parent into contiguous, non-overlapping
//! subnets, each sized to the smallest power-of-two block that fits its
//! requirement. The largest requirements are placed first, which keeps every
//! block aligned and avoids fragmentation.
//!
//! ## Architecture
//!
//! - `ip`: 32-bit address arithmetic and parent network parsing
//! - `vlsm`: demand sorting, subnet sizing, subnet layout and the allocator
//! - `config` / `config_loader`: YAML allocation plans
//! - `report`: tab-separated, table and JSON reports
//! - `error`: allocation error kinds
//!
//! ## Example Usage
//!
//! ```rust
//! use vlsm::ip::ParentNetwork;
//! use vlsm::vlsm::allocate_map;
//!
//! let parent: ParentNetwork = "192.168.1.0/24".parse()?;
//! let subnets = allocate_map(&parent, vec![("A", 50), ("B", 30), ("C", 62), ("D", 10)])?;
//!
//! // Largest demand first
//! assert_eq!(subnets[0].name, "C");
//! assert_eq!(subnets[0].mask_notation(), "/26");
//! assert_eq!(subnets[3].address.to_string(), "192.168.1.160");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Plan Format
//!
//! ```yaml
//! network: 192.168.1.0/24
//! demands:
//!   A: 50
//!   B: 30
//!   C: 62
//!   D: 10
//! format: table   # tsv | table | json
//! ```
//!
//! ## Error Handling
//!
//! The allocation core returns [`error::AllocationError`]. It is fail-fast:
//! an invalid network, an invalid demand or running out of addresses aborts
//! the whole plan and no partial result is returned. The plan loader and the
//! binary wrap errors with `color_eyre` context.

pub mod config;
pub mod config_loader;
pub mod error;
pub mod ip;
pub mod report;
pub mod vlsm;

pub use error::AllocationError;
