//! Allocated subnet records.
//!
//! A record is derived from a cursor position and a prefix length and is
//! never modified afterwards.

use std::net::Ipv4Addr;

use serde::Serialize;

use super::sizer::usable_hosts;
use crate::error::AllocationError;
use crate::ip::{block_size, decimal_mask, ADDRESS_BITS};
use crate::ip::address::offset_address;

/// Inclusive range of assignable host addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsableRange {
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
}

/// One subnet carved out of the parent network
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllocatedSubnet {
    pub name: String,
    pub needed_size: u32,
    pub allocated_size: u64,
    pub address: Ipv4Addr,
    pub prefix_length: u8,
    pub decimal_mask: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub usable_range: UsableRange,
}

impl AllocatedSubnet {
    /// Prefix in slash notation, e.g. `/26`
    pub fn mask_notation(&self) -> String {
        format!("/{}", self.prefix_length)
    }

    /// Usable range as `first - last`
    pub fn range_text(&self) -> String {
        format!("{} - {}", self.usable_range.first, self.usable_range.last)
    }

    /// Addresses taken by the block, network and broadcast included
    pub fn block_size(&self) -> u64 {
        block_size(self.prefix_length)
    }

    pub fn contains(&self, address: Ipv4Addr) -> bool {
        self.address <= address && address <= self.broadcast
    }
}

/// Lay out a subnet of `/prefix` starting at `cursor`.
///
/// /31 and /32 are rejected since they have no usable hosts, and a block
/// running past `255.255.255.255` fails with `AddressSpaceExhausted`.
pub fn format_subnet(
    name: &str,
    needed_size: u32,
    cursor: u32,
    prefix: u8,
) -> Result<AllocatedSubnet, AllocationError> {
    if prefix > ADDRESS_BITS - 2 {
        return Err(AllocationError::DegeneratePrefix(prefix));
    }

    let allocated_size = usable_hosts(prefix);
    let exhausted = || AllocationError::AddressSpaceExhausted {
        name: name.to_string(),
        block_size: block_size(prefix),
        remaining: (1u64 << ADDRESS_BITS) - u64::from(cursor),
        network: "0.0.0.0/0".to_string(),
    };

    let broadcast = offset_address(cursor, allocated_size + 1).ok_or_else(exhausted)?;
    let first = offset_address(cursor, 1).ok_or_else(exhausted)?;
    let last = offset_address(cursor, allocated_size).ok_or_else(exhausted)?;

    Ok(AllocatedSubnet {
        name: name.to_string(),
        needed_size,
        allocated_size,
        address: Ipv4Addr::from(cursor),
        prefix_length: prefix,
        decimal_mask: decimal_mask(prefix),
        broadcast: Ipv4Addr::from(broadcast),
        usable_range: UsableRange {
            first: Ipv4Addr::from(first),
            last: Ipv4Addr::from(last),
        },
    })
}
