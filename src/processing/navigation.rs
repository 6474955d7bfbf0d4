//! Stepping to neighbouring blocks of the same size.

use crate::error::{CidrError, Result};
use crate::models::{CidrBlock, ADDRESS_SPACE};

/// The block of equal size directly after `block`.
pub fn next(block: &CidrBlock) -> Result<CidrBlock> {
    let new_start = block.start() as u64 + block.size();
    if new_start + block.size() - 1 > ADDRESS_SPACE - 1 {
        return Err(CidrError::out_of_range(format!(
            "no /{} after {block}",
            block.prefix()
        )));
    }
    Ok(CidrBlock::aligned(new_start as u32, block.prefix()))
}

/// The block of equal size directly before `block`.
pub fn previous(block: &CidrBlock) -> Result<CidrBlock> {
    if (block.start() as u64) < block.size() {
        return Err(CidrError::out_of_range(format!(
            "no /{} before {block}",
            block.prefix()
        )));
    }
    let new_start = block.start() as u64 - block.size();
    Ok(CidrBlock::aligned(new_start as u32, block.prefix()))
}

/// `count` blocks after (`count > 0`) or before (`count < 0`) `block`, nearest first.
///
/// Fails with no partial result when fewer than `|count|` blocks fit on that side.
pub fn adjacent(block: &CidrBlock, count: i64) -> Result<Vec<CidrBlock>> {
    let steps = count.unsigned_abs();
    let available = if count >= 0 {
        (ADDRESS_SPACE - block.start() as u64 - block.size()) / block.size()
    } else {
        block.start() as u64 / block.size()
    };
    if steps > available {
        return Err(CidrError::out_of_range(format!(
            "only {available} /{} blocks {} {block}, asked for {steps}",
            block.prefix(),
            if count >= 0 { "after" } else { "before" }
        )));
    }

    let step: fn(&CidrBlock) -> Result<CidrBlock> = if count >= 0 { next } else { previous };
    let mut out = Vec::with_capacity(steps.min(64) as usize);
    let mut current = *block;
    for _ in 0..steps {
        current = step(&current)?;
        out.push(current);
    }
    log::trace!("adjacent({block}, {count}) -> {} blocks", out.len());
    Ok(out)
}
