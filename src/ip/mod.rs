//! IPv4 address arithmetic and parent network handling.
//!
//! Addresses are treated as plain `u32` values for arithmetic and only turned
//! into dotted-decimal text at the edges.

pub mod address;
pub mod network;

// Re-export commonly used types
pub use address::{block_size, decimal_mask, mask_for_prefix, prefix_from_mask, ADDRESS_BITS};
pub use network::ParentNetwork;
