//! One rendered row per block.

use crate::models::CidrBlock;
use serde::Serialize;

/// Represents a row of block data for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockRow {
    /// Row index, starting at 1.
    pub cnt: usize,
    /// CIDR notation.
    pub cidr: String,
    /// Network address.
    pub first: String,
    /// Broadcast address.
    pub last: String,
    pub netmask: String,
    /// Number of addresses.
    pub size: u64,
    /// Usable host addresses.
    pub hosts: u64,
}

impl BlockRow {
    pub fn new(cnt: usize, block: &CidrBlock) -> BlockRow {
        BlockRow {
            cnt,
            cidr: block.to_string(),
            first: block.first().to_string(),
            last: block.last().to_string(),
            netmask: block.netmask().to_string(),
            size: block.size(),
            hosts: block.host_range().count,
        }
    }
}

/// Build numbered rows for a list of blocks.
pub fn block_rows(blocks: &[CidrBlock]) -> Vec<BlockRow> {
    blocks
        .iter()
        .enumerate()
        .map(|(i, b)| BlockRow::new(i + 1, b))
        .collect()
}
