//! Subdividing a block into equal, more specific blocks.

use crate::error::{CidrError, Result};
use crate::models::{block_size, CidrBlock, MAX_LENGTH};

/// Lazy, ascending iterator over the sub-blocks produced by [`split_iter`].
#[derive(Debug, Clone)]
pub struct Subnets {
    next_start: u64,
    end: u64,
    prefix: u8,
}

impl Iterator for Subnets {
    type Item = CidrBlock;

    fn next(&mut self) -> Option<CidrBlock> {
        if self.next_start > self.end {
            return None;
        }
        let block = CidrBlock::aligned(self.next_start as u32, self.prefix);
        self.next_start += block_size(self.prefix);
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next_start > self.end {
            0
        } else {
            (self.end - self.next_start + 1) / block_size(self.prefix)
        };
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

/// Split `block` into `2^(new_prefix - prefix)` contiguous blocks of `new_prefix`.
pub fn split_iter(block: &CidrBlock, new_prefix: u8) -> Result<Subnets> {
    if new_prefix <= block.prefix() || new_prefix > MAX_LENGTH {
        return Err(CidrError::invalid(format!(
            "cannot split {block} into /{new_prefix}, prefix must be in /{}../{MAX_LENGTH}",
            block.prefix() + 1
        )));
    }
    Ok(Subnets {
        next_start: block.start() as u64,
        end: block.end() as u64,
        prefix: new_prefix,
    })
}

/// Eager form of [`split_iter`].
pub fn split(block: &CidrBlock, new_prefix: u8) -> Result<Vec<CidrBlock>> {
    let subnets: Vec<CidrBlock> = split_iter(block, new_prefix)?.collect();
    log::debug!("split {block} into {} x /{new_prefix}", subnets.len());
    Ok(subnets)
}
