//! Bit-level helpers for 32-bit addresses and prefix lengths.

use std::net::Ipv4Addr;

/// Number of bits in an IPv4 address
pub const ADDRESS_BITS: u8 = 32;

/// Build the 32-bit mask whose high `prefix` bits are set.
///
/// Prefixes above 32 are clamped to 32. A prefix of 0 yields an all-zero mask.
///
/// # Examples
/// ```
/// use vlsm::ip::mask_for_prefix;
///
/// assert_eq!(mask_for_prefix(24), 0xFFFF_FF00);
/// assert_eq!(mask_for_prefix(0), 0);
/// assert_eq!(mask_for_prefix(32), u32::MAX);
/// ```
pub fn mask_for_prefix(prefix: u8) -> u32 {
    let host_bits = u32::from(ADDRESS_BITS - prefix.min(ADDRESS_BITS));
    // Shifting by the full width is not defined for u32, so /0 falls out as None
    u32::MAX.checked_shl(host_bits).unwrap_or(0)
}

/// Dotted-decimal form of a prefix length (`/26` -> `255.255.255.192`)
pub fn decimal_mask(prefix: u8) -> Ipv4Addr {
    Ipv4Addr::from(mask_for_prefix(prefix))
}

/// Convert a dotted-decimal mask back into a prefix length by counting bits.
///
/// Returns `None` when the set bits are not contiguous from the top.
pub fn prefix_from_mask(mask: Ipv4Addr) -> Option<u8> {
    let bits = u32::from(mask);
    let ones = bits.count_ones() as u8;
    if mask_for_prefix(ones) == bits {
        Some(ones)
    } else {
        None
    }
}

/// Total number of addresses in a block with the given prefix, including the
/// network and broadcast addresses
pub fn block_size(prefix: u8) -> u64 {
    1u64 << (ADDRESS_BITS - prefix.min(ADDRESS_BITS))
}

/// Clear the host bits of `address` for the given prefix
pub fn network_base(address: u32, prefix: u8) -> u32 {
    address & mask_for_prefix(prefix)
}

/// Add `offset` to `base`, returning `None` past `255.255.255.255`
pub fn offset_address(base: u32, offset: u64) -> Option<u32> {
    u64::from(base)
        .checked_add(offset)
        .and_then(|value| u32::try_from(value).ok())
}
