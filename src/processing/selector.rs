//! Smallest prefix that fits a number of hosts.

use crate::error::{CidrError, Result};
use crate::models::MAX_LENGTH;

/// Largest host count [`optimal_prefix`] accepts, the usable hosts of a `/1`.
pub const MAX_HOST_COUNT: u64 = (1 << 31) - 2;

/// Most specific prefix whose usable hosts cover `host_count`.
///
/// One host fits a `/32` and two hosts a `/31` (RFC 3021). Beyond that the block
/// must also hold a network and a broadcast address. The result is never below `/1`.
pub fn optimal_prefix(host_count: u64) -> Result<u8> {
    if !(1..=MAX_HOST_COUNT).contains(&host_count) {
        return Err(CidrError::invalid(format!(
            "host count {host_count} is outside 1..={MAX_HOST_COUNT}"
        )));
    }
    let prefix = match host_count {
        1 => MAX_LENGTH,
        2 => MAX_LENGTH - 1,
        n => {
            // ceil(log2(n + 2))
            let bits = (u64::BITS - (n + 1).leading_zeros()) as u8;
            MAX_LENGTH.saturating_sub(bits).max(1)
        }
    };
    log::trace!("optimal_prefix({host_count}) = /{prefix}");
    Ok(prefix)
}
