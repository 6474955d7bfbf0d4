//! IPAM carving: free space inside a parent block and first-fit allocation.

use super::aggregate::aggregate;
use super::exclude::exclude_all;
use super::selector::optimal_prefix;
use crate::error::{CidrError, Result};
use crate::models::CidrBlock;

/// Unused space of `parent` after removing `allocated`, as the fewest aligned blocks.
///
/// Allocations outside `parent` are ignored.
pub fn free_blocks(parent: &CidrBlock, allocated: &[CidrBlock]) -> Vec<CidrBlock> {
    aggregate(&exclude_all(parent, allocated))
}

/// Lowest free block inside `parent` large enough for `host_count` hosts.
pub fn first_fit(
    parent: &CidrBlock,
    allocated: &[CidrBlock],
    host_count: u64,
) -> Result<CidrBlock> {
    let prefix = optimal_prefix(host_count)?;
    if prefix < parent.prefix() {
        return Err(CidrError::out_of_range(format!(
            "{host_count} hosts need a /{prefix}, larger than {parent}"
        )));
    }

    let free = free_blocks(parent, allocated);
    log::debug!(
        "first_fit /{prefix} in {parent}: {} free blocks to search",
        free.len()
    );

    // free blocks are aligned, so a large enough one is aligned to the target prefix too
    free.iter()
        .find(|b| b.prefix() <= prefix)
        .map(|b| CidrBlock::aligned(b.start(), prefix))
        .ok_or_else(|| CidrError::out_of_range(format!("no free /{prefix} left in {parent}")))
}
