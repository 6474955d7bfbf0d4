//! The [`CidrBlock`] value type.

use super::host_range::HostRange;
use super::ipv4::{block_size, check_prefix, cut_addr, get_cidr_mask, lo_mask, MAX_LENGTH};
use super::parse::parse_block;
use crate::error::{CidrError, Result};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// An aligned IPv4 CIDR block: `start` is always a multiple of the block size.
///
/// Blocks are ordered by start address, and for equal starts the larger block
/// (smaller prefix) sorts first.
#[derive(Eq, PartialEq, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    start: u32,
    prefix: u8,
}

impl CidrBlock {
    /// Create a block, rejecting prefixes above 32 and starts not aligned to the prefix.
    pub fn new(start: u32, prefix: u8) -> Result<CidrBlock> {
        check_prefix(prefix)?;
        if (start as u64) % block_size(prefix) != 0 {
            return Err(CidrError::invalid(format!(
                "{} is not aligned to /{prefix} (most specific alignment is /{})",
                Ipv4Addr::from(start),
                lo_mask(start)
            )));
        }
        Ok(CidrBlock { start, prefix })
    }

    /// Create a block from a start address and an address count.
    ///
    /// `size` must be a power of two between 1 and 2^32.
    pub fn from_range(start: u32, size: u64) -> Result<CidrBlock> {
        if size == 0 || !size.is_power_of_two() || size > block_size(0) {
            return Err(CidrError::invalid(format!(
                "range size {size} is not a power of two between 1 and 2^32"
            )));
        }
        let prefix = MAX_LENGTH - size.trailing_zeros() as u8;
        CidrBlock::new(start, prefix)
    }

    /// The block of the given prefix that contains `addr`, with host bits cleared.
    pub fn containing(addr: u32, prefix: u8) -> Result<CidrBlock> {
        let start = cut_addr(addr, prefix)?;
        Ok(CidrBlock { start, prefix })
    }

    /// Internal constructor for blocks derived from already valid blocks.
    pub(crate) fn aligned(start: u32, prefix: u8) -> CidrBlock {
        assert!(
            prefix <= MAX_LENGTH && (start as u64) % block_size(prefix) == 0,
            "unaligned block {}/{prefix} should never happen.",
            Ipv4Addr::from(start)
        );
        CidrBlock { start, prefix }
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn prefix(&self) -> u8 {
        self.prefix
    }

    /// Number of addresses in the block (2^32 for a `/0`).
    pub fn size(&self) -> u64 {
        block_size(self.prefix)
    }

    /// Last address of the block.
    pub fn end(&self) -> u32 {
        (self.start as u64 + self.size() - 1) as u32
    }

    /// Network address.
    pub fn first(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.start)
    }

    /// Broadcast address, or the only address of a `/32`.
    pub fn last(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.end())
    }

    pub fn netmask(&self) -> Ipv4Addr {
        // prefix is validated at construction, so the mask always exists
        Ipv4Addr::from(get_cidr_mask(self.prefix).unwrap_or(u32::MAX))
    }

    pub fn wildcard(&self) -> Ipv4Addr {
        Ipv4Addr::from(!u32::from(self.netmask()))
    }

    /// Usable host addresses, honouring RFC 3021 for `/31`.
    pub fn host_range(&self) -> HostRange {
        HostRange::of(self)
    }

    /// Every address of the block, lazily. Calling again restarts from the network address.
    pub fn addresses(&self) -> Addresses {
        Addresses {
            front: self.start as u64,
            back: self.start as u64 + self.size(),
        }
    }

    /// The block one prefix bit shorter that contains this one. `None` for `/0`.
    pub fn supernet(&self) -> Option<CidrBlock> {
        if self.prefix == 0 {
            return None;
        }
        let prefix = self.prefix - 1;
        let start = cut_addr(self.start, prefix).ok()?;
        Some(CidrBlock::aligned(start, prefix))
    }

    /// The two equal halves of the block. `None` for `/32`.
    pub fn halves(&self) -> Option<(CidrBlock, CidrBlock)> {
        if self.prefix == MAX_LENGTH {
            return None;
        }
        let prefix = self.prefix + 1;
        let half = self.size() / 2;
        Some((
            CidrBlock::aligned(self.start, prefix),
            CidrBlock::aligned((self.start as u64 + half) as u32, prefix),
        ))
    }
}

impl FromStr for CidrBlock {
    type Err = CidrError;

    fn from_str(s: &str) -> Result<CidrBlock> {
        parse_block(s)
    }
}

impl TryFrom<(Ipv4Addr, u8)> for CidrBlock {
    type Error = CidrError;

    fn try_from((addr, prefix): (Ipv4Addr, u8)) -> Result<CidrBlock> {
        CidrBlock::new(u32::from(addr), prefix)
    }
}

impl fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.first(), self.prefix)
    }
}

impl Ord for CidrBlock {
    fn cmp(&self, other: &CidrBlock) -> Ordering {
        self.start
            .cmp(&other.start)
            .then_with(|| self.prefix.cmp(&other.prefix))
    }
}

impl PartialOrd for CidrBlock {
    fn partial_cmp(&self, other: &CidrBlock) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> std::result::Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_block(&s).map_err(de::Error::custom)
    }
}

/// Lazy iterator over the addresses of a [`CidrBlock`].
#[derive(Debug, Clone)]
pub struct Addresses {
    front: u64,
    back: u64,
}

impl Iterator for Addresses {
    type Item = Ipv4Addr;

    fn next(&mut self) -> Option<Ipv4Addr> {
        if self.front >= self.back {
            return None;
        }
        let addr = self.front as u32;
        self.front += 1;
        Some(Ipv4Addr::from(addr))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        match usize::try_from(remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }

    fn nth(&mut self, n: usize) -> Option<Ipv4Addr> {
        self.front = self.front.saturating_add(n as u64).min(self.back);
        self.next()
    }
}

impl DoubleEndedIterator for Addresses {
    fn next_back(&mut self) -> Option<Ipv4Addr> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Ipv4Addr::from(self.back as u32))
    }
}
