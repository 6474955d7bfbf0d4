//! Strict CIDR string parsing.

use super::block::CidrBlock;
use crate::error::{CidrError, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::net::Ipv4Addr;

lazy_static! {
    static ref CIDR_RE: Regex =
        Regex::new(r"^(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3})/(\d{1,2})$").expect("Invalid Regex?");
    static ref LIST_SEP_RE: Regex = Regex::new(r"[,\s]+").expect("Invalid Regex?");
}

/// Parse `"a.b.c.d/p"` into a block. Host bits set in the address are rejected.
pub fn parse_block(input: &str) -> Result<CidrBlock> {
    let input = input.trim();
    let caps = CIDR_RE
        .captures(input)
        .ok_or_else(|| CidrError::invalid(format!("expected a.b.c.d/prefix, got '{input}'")))?;

    let addr: Ipv4Addr = caps[1]
        .parse()
        .map_err(|_| CidrError::invalid(format!("invalid address {}", &caps[1])))?;
    let prefix: u8 = caps[2]
        .parse()
        .map_err(|_| CidrError::invalid(format!("invalid prefix {}", &caps[2])))?;

    CidrBlock::new(u32::from(addr), prefix)
}

/// Parse a comma and/or whitespace separated list of CIDR blocks.
///
/// Stops at the first invalid entry.
pub fn parse_block_list(input: &str) -> Result<Vec<CidrBlock>> {
    LIST_SEP_RE
        .split(input.trim())
        .filter(|s| !s.is_empty())
        .map(parse_block)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_block() {
        let b = parse_block(" 10.20.0.0/16 ").unwrap();
        assert_eq!(b.first(), Ipv4Addr::new(10, 20, 0, 0));
        assert_eq!(b.prefix(), 16);
        assert_eq!(parse_block("0.0.0.0/0").unwrap().size(), 1 << 32);
    }

    #[test]
    fn test_parse_block_rejects() {
        for bad in [
            "10.0.0.0",
            "10.0.0.0/",
            "10.0.0/24",
            "256.0.0.0/8",
            "10.0.0.0/33",
            "10.0.0.1/24",
            "10.0.0.0/24/1",
            "a.b.c.d/8",
            "",
        ] {
            assert!(
                matches!(parse_block(bad), Err(CidrError::InvalidArgument(_))),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_block_list() {
        let blocks = parse_block_list("10.0.0.0/24, 10.0.1.0/24\n192.168.0.0/16").unwrap();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[2].to_string(), "192.168.0.0/16");
        assert!(parse_block_list("").unwrap().is_empty());
        assert!(parse_block_list("10.0.0.0/24, nope").is_err());
    }
}
