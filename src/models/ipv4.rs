//! IPv4 address and prefix-length utilities.
//!
//! Plain functions over `u32` addresses and `u8` prefix lengths. Everything that
//! depends on the block size works in `u64`, so a `/0` (2^32 addresses) never wraps.

use crate::error::{CidrError, Result};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of addresses in the IPv4 space.
pub const ADDRESS_SPACE: u64 = 1 << MAX_LENGTH;

/// Reject prefix lengths above [`MAX_LENGTH`].
pub fn check_prefix(len: u8) -> Result<()> {
    if len > MAX_LENGTH {
        Err(CidrError::invalid(format!(
            "prefix /{len} is longer than /{MAX_LENGTH}"
        )))
    } else {
        Ok(())
    }
}

/// Number of addresses covered by a block of prefix `len`.
///
/// # Panics
/// If `len > 32`; callers validate the prefix first.
pub fn block_size(len: u8) -> u64 {
    assert!(len <= MAX_LENGTH, "prefix /{len} > /32 should never happen.");
    1u64 << (MAX_LENGTH - len)
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use cidr_calc::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    check_prefix(len)?;
    let right_len = MAX_LENGTH - len;
    let all_bits = u32::MAX as u64;

    let mask = (all_bits >> right_len) << right_len;

    Ok(mask as u32)
}

/// Inverse of [`get_cidr_mask`], the host bits of a prefix.
pub fn wildcard_mask(len: u8) -> Result<u32> {
    Ok(!get_cidr_mask(len)?)
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: u32, len: u8) -> Result<u32> {
    Ok(addr & get_cidr_mask(len)?)
}

/// Calculate the broadcast (last) address for a given IP and prefix length.
pub fn broadcast_addr(addr: u32, len: u8) -> Result<u32> {
    let mask = get_cidr_mask(len)?;
    Ok((addr & mask) | !mask)
}

/// Most specific prefix that `ip` is aligned to, based on trailing zeros.
///
/// `0.0.0.0` is aligned to every prefix, so it yields `0`.
pub fn lo_mask(ip: u32) -> u8 {
    let trailing_zeros = ip.trailing_zeros() as u8;
    assert!(trailing_zeros <= 32, "Trailing zeros exceed 32 bits");
    MAX_LENGTH - trailing_zeros
}

/// Dotted-quad rendering of a raw address.
pub fn to_dotted(addr: u32) -> String {
    Ipv4Addr::from(addr).to_string()
}
