//! Host count to prefix length conversion.

use crate::error::AllocationError;
use crate::ip::block_size;

use super::demand::Demand;

/// Usable hosts in a block: every address except network and broadcast.
///
/// /31 and /32 have none.
pub fn usable_hosts(prefix: u8) -> u64 {
    block_size(prefix).saturating_sub(2)
}

/// Prefix length for a block holding at least `needed` usable hosts.
///
/// The block is sized from the highest set bit of `needed`: with that bit at
/// index `b` the candidate prefix is `32 - (b + 1)`. When `needed` is all ones
/// in binary (1, 3, 7, 63, ...) the candidate cannot fit the network and
/// broadcast addresses, so the block is widened by one bit.
///
/// Returns `None` for zero or for counts no IPv4 block can hold.
///
/// # Examples
/// ```
/// use vlsm::vlsm::prefix_for_hosts;
///
/// assert_eq!(prefix_for_hosts(62), Some(26));
/// assert_eq!(prefix_for_hosts(50), Some(26));
/// assert_eq!(prefix_for_hosts(2), Some(30));
/// assert_eq!(prefix_for_hosts(0), None);
/// ```
pub fn prefix_for_hosts(needed: u32) -> Option<u8> {
    if needed == 0 {
        return None;
    }

    // 32 - (b + 1) where b is the index of the highest set bit
    let candidate = needed.leading_zeros() as u8;
    if usable_hosts(candidate) >= u64::from(needed) {
        return Some(candidate);
    }

    let widened = candidate.checked_sub(1)?;
    log::debug!("{} hosts do not fit in a /{}, widening to /{}", needed, candidate, widened);
    Some(widened)
}

/// Resolve the prefix length for a demand
pub fn size_demand(demand: &Demand) -> Result<u8, AllocationError> {
    if demand.hosts == 0 {
        return Err(AllocationError::invalid_demand(&demand.name, "host count must be positive, got 0"));
    }
    prefix_for_hosts(demand.hosts).ok_or_else(|| {
        AllocationError::invalid_demand(
            &demand.name,
            format!("{} hosts do not fit in any IPv4 block", demand.hosts),
        )
    })
}
