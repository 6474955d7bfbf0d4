//! Set difference of blocks, decomposed into aligned blocks.
//!
//! Aligned blocks either nest or are disjoint, so a base that partially overlaps
//! an excluded block always strictly contains it. Bisecting the base and keeping
//! the halves that fall outside the excluded block yields the minimal result:
//! at most one block per prefix level between the two.

use super::relations::{contains, overlaps};
use crate::models::{CidrBlock, MAX_LENGTH};

/// `base` minus `excluded`, as non-overlapping aligned blocks in ascending order.
pub fn exclude(base: &CidrBlock, excluded: &CidrBlock) -> Vec<CidrBlock> {
    let mut out = Vec::new();
    // lower half is pushed last so it is popped first
    let mut stack = vec![*base];

    while let Some(block) = stack.pop() {
        if !overlaps(&block, excluded) {
            out.push(block);
            continue;
        }
        if contains(excluded, &block) {
            continue;
        }
        assert!(
            block.prefix() < MAX_LENGTH,
            "partial overlap of {block} with {excluded} should never happen."
        );
        let (lo, hi) = block.halves().expect("a block shorter than /32 has halves");
        stack.push(hi);
        stack.push(lo);
    }

    log::trace!("exclude({base}, {excluded}) -> {} blocks", out.len());
    out
}

/// Remove every block of `excluded` from `base`, in the order given.
///
/// The result is not re-aggregated; see [`super::aggregate`].
pub fn exclude_all(base: &CidrBlock, excluded: &[CidrBlock]) -> Vec<CidrBlock> {
    let mut working = vec![*base];
    for ex in excluded {
        working = working
            .iter()
            .flat_map(|member| exclude(member, ex))
            .collect();
        if working.is_empty() {
            break;
        }
    }
    log::debug!(
        "exclude_all({base}, {} blocks) -> {} blocks",
        excluded.len(),
        working.len()
    );
    working
}
