//! Set relations between blocks.

use crate::models::CidrBlock;

/// True when the two blocks share at least one address.
pub fn overlaps(a: &CidrBlock, b: &CidrBlock) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

/// True when every address of `b` is in `a`. A block contains itself.
pub fn contains(a: &CidrBlock, b: &CidrBlock) -> bool {
    a.start() <= b.start() && a.end() >= b.end()
}

pub fn is_contained_in(a: &CidrBlock, b: &CidrBlock) -> bool {
    contains(b, a)
}

pub fn contains_addr(block: &CidrBlock, addr: u32) -> bool {
    block.start() <= addr && addr <= block.end()
}

impl CidrBlock {
    pub fn overlaps(&self, other: &CidrBlock) -> bool {
        overlaps(self, other)
    }

    pub fn contains(&self, other: &CidrBlock) -> bool {
        contains(self, other)
    }

    pub fn is_contained_in(&self, other: &CidrBlock) -> bool {
        is_contained_in(self, other)
    }

    pub fn contains_addr(&self, addr: u32) -> bool {
        contains_addr(self, addr)
    }
}
