//! Errors raised by the allocation core.

/// Errors that can occur while planning a VLSM allocation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AllocationError {
    #[error("Invalid network '{input}': {reason}")]
    InvalidNetwork { input: String, reason: String },

    #[error("Invalid demand '{name}': {reason}")]
    InvalidDemand { name: String, reason: String },

    #[error("Address space exhausted allocating '{name}': needs a block of {block_size} addresses, {remaining} left in {network}")]
    AddressSpaceExhausted {
        name: String,
        block_size: u64,
        remaining: u64,
        network: String,
    },

    #[error("Prefix /{0} leaves no usable hosts")]
    DegeneratePrefix(u8),
}

impl AllocationError {
    pub(crate) fn invalid_network(input: &str, reason: impl Into<String>) -> Self {
        AllocationError::InvalidNetwork {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_demand(name: &str, reason: impl Into<String>) -> Self {
        AllocationError::InvalidDemand {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
