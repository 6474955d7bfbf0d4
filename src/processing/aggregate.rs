//! Aggregation (gap preserving) and summarization (gap filling) of block lists.

use super::relations::contains;
use crate::error::{CidrError, Result};
use crate::models::{block_size, CidrBlock, MAX_LENGTH};
use itertools::Itertools;

/// Merge `blocks` into the fewest blocks covering exactly the same addresses.
///
/// Contained blocks are dropped and aligned, equal-size neighbours are merged
/// until nothing changes. Addresses between blocks are never added.
/// The result is sorted ascending.
pub fn aggregate(blocks: &[CidrBlock]) -> Vec<CidrBlock> {
    let mut kept = remove_contained(blocks);

    let mut passes = 0;
    loop {
        passes += 1;
        let (merged, merges) = merge_pass(&kept);
        kept = merged;
        if merges == 0 {
            break;
        }
        log::trace!("aggregate pass {passes}: {merges} merges");
    }

    log::debug!(
        "aggregate {} blocks -> {} blocks in {passes} passes",
        blocks.len(),
        kept.len()
    );
    kept
}

/// Sort by start (larger block first on ties) and drop every block that a kept block covers.
fn remove_contained(blocks: &[CidrBlock]) -> Vec<CidrBlock> {
    let mut kept: Vec<CidrBlock> = Vec::with_capacity(blocks.len());
    for block in blocks.iter().sorted() {
        if kept.iter().any(|k| contains(k, block)) {
            continue;
        }
        kept.retain(|k| !contains(block, k));
        kept.push(*block);
    }
    kept.sort();
    kept
}

/// One sweep over sorted blocks, merging each mergeable neighbour pair once.
///
/// Returns the re-sorted blocks and the number of merges made.
fn merge_pass(blocks: &[CidrBlock]) -> (Vec<CidrBlock>, usize) {
    let mut out = Vec::with_capacity(blocks.len());
    let mut merges = 0;
    let mut i = 0;
    while i < blocks.len() {
        if let Some(merged) = blocks.get(i + 1).and_then(|b| merge_pair(&blocks[i], b)) {
            out.push(merged);
            merges += 1;
            i += 2;
        } else {
            out.push(blocks[i]);
            i += 1;
        }
    }
    out.sort();
    (out, merges)
}

/// The parent of `a` and `b` when they are the two aligned halves of it.
fn merge_pair(a: &CidrBlock, b: &CidrBlock) -> Option<CidrBlock> {
    let p = a.prefix();
    if p == 0 || p != b.prefix() {
        return None;
    }
    if a.end() as u64 + 1 != b.start() as u64 {
        return None;
    }
    if a.start() as u64 % block_size(p - 1) != 0 {
        return None;
    }
    Some(CidrBlock::aligned(a.start(), p - 1))
}

/// The most specific single block covering every block of `blocks`.
///
/// Unlike [`aggregate`] the result can include addresses that are in none of the inputs.
pub fn summarize(blocks: &[CidrBlock]) -> Result<CidrBlock> {
    let (first, rest) = blocks
        .split_first()
        .ok_or_else(|| CidrError::invalid("cannot summarize an empty block list"))?;
    if rest.is_empty() {
        return Ok(*first);
    }

    let min = blocks.iter().map(|b| b.start()).min().unwrap_or(first.start()) as u64;
    let max = blocks.iter().map(|b| b.end()).max().unwrap_or(first.end()) as u64;

    for prefix in (0..=MAX_LENGTH).rev() {
        let size = block_size(prefix);
        let network_start = (min / size) * size;
        if network_start + size - 1 >= max {
            let summary = CidrBlock::aligned(network_start as u32, prefix);
            log::debug!("summarize {} blocks -> {summary}", blocks.len());
            return Ok(summary);
        }
    }
    unreachable!("/0 covers every address")
}
