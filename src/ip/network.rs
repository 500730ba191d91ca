//! Parent network parsing.
//!
//! The parent network is the block every subnet is carved from. It is given as
//! `A.B.C.D/N`; any host bits in the address are cleared when the base address
//! is computed.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use super::address::{block_size, network_base, ADDRESS_BITS};
use crate::error::AllocationError;

/// The network block subnets are allocated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentNetwork {
    address: Ipv4Addr,
    prefix_length: u8,
}

impl ParentNetwork {
    /// Create a parent network, rejecting prefixes outside 0..=32
    pub fn new(address: Ipv4Addr, prefix_length: u8) -> Result<Self, AllocationError> {
        if prefix_length > ADDRESS_BITS {
            return Err(AllocationError::invalid_network(
                &format!("{}/{}", address, prefix_length),
                format!("prefix length must be between 0 and {}", ADDRESS_BITS),
            ));
        }

        let network = ParentNetwork { address, prefix_length };
        if network.base() != address {
            log::warn!(
                "Parent address {} has host bits set, using network base {}",
                address,
                network.base()
            );
        }
        Ok(network)
    }

    /// Address exactly as it was supplied
    pub fn address(&self) -> Ipv4Addr {
        self.address
    }

    pub fn prefix_length(&self) -> u8 {
        self.prefix_length
    }

    /// Base address with all host bits cleared
    pub fn base(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.base_bits())
    }

    pub(crate) fn base_bits(&self) -> u32 {
        network_base(u32::from(self.address), self.prefix_length)
    }

    /// Number of addresses in the block, including network and broadcast
    pub fn capacity(&self) -> u64 {
        block_size(self.prefix_length)
    }

    /// Last address of the block as a 64-bit value, so a /0 does not wrap
    pub(crate) fn end_bits(&self) -> u64 {
        u64::from(self.base_bits()) + self.capacity() - 1
    }

    /// Last address of the block
    pub fn last_address(&self) -> Ipv4Addr {
        // end_bits never exceeds u32::MAX because the base is masked
        Ipv4Addr::from(self.end_bits() as u32)
    }
}

impl FromStr for ParentNetwork {
    type Err = AllocationError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (address, prefix) = trimmed
            .split_once('/')
            .ok_or_else(|| AllocationError::invalid_network(input, "expected A.B.C.D/N notation"))?;

        let address = address
            .parse::<Ipv4Addr>()
            .map_err(|_| AllocationError::invalid_network(input, format!("'{}' is not a valid IPv4 address", address)))?;

        let prefix_length = prefix
            .parse::<u8>()
            .map_err(|_| AllocationError::invalid_network(input, format!("'{}' is not a valid prefix length", prefix)))?;

        if prefix_length > ADDRESS_BITS {
            return Err(AllocationError::invalid_network(
                input,
                format!("prefix length must be between 0 and {}", ADDRESS_BITS),
            ));
        }

        ParentNetwork::new(address, prefix_length)
    }
}

impl fmt::Display for ParentNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.base(), self.prefix_length)
    }
}

impl Serialize for ParentNetwork {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
