//! VLSM allocation core.
//!
//! Demands are sorted largest first, each is sized to the smallest
//! power-of-two block that holds it, and blocks are laid out back to back
//! from the base of the parent network.

pub mod demand;
pub mod sizer;
pub mod subnet;
pub mod allocator;
pub mod summary;

// Re-export commonly used types
pub use demand::{sort_demands, validate_demands, Demand};
pub use sizer::{prefix_for_hosts, size_demand, usable_hosts};
pub use subnet::{format_subnet, AllocatedSubnet, UsableRange};
pub use allocator::{allocate, allocate_map};
pub use summary::AllocationSummary;
