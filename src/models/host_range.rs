//! Usable host addresses of a block.

use super::block::CidrBlock;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Read-only view of the host addresses inside a [`CidrBlock`].
///
/// A `/31` is a point-to-point link (RFC 3021) where both addresses are usable,
/// and a `/32` is a single host. Larger blocks lose their network and broadcast address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostRange {
    pub first: Ipv4Addr,
    pub last: Ipv4Addr,
    pub count: u64,
}

impl HostRange {
    pub fn of(block: &CidrBlock) -> HostRange {
        let (first, last, count) = match block.prefix() {
            32 => (block.start(), block.start(), 1),
            31 => (block.start(), block.end(), 2),
            _ => (block.start() + 1, block.end() - 1, block.size() - 2),
        };
        HostRange {
            first: Ipv4Addr::from(first),
            last: Ipv4Addr::from(last),
            count,
        }
    }
}

impl fmt::Display for HostRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.first, self.last)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hosts(s: &str) -> HostRange {
        s.parse::<CidrBlock>().unwrap().host_range()
    }

    #[test]
    fn test_regular_block() {
        let h = hosts("192.168.1.0/24");
        assert_eq!(h.first, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(h.last, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(h.count, 254);
        assert_eq!(h.to_string(), "192.168.1.1-192.168.1.254");
    }

    #[test]
    fn test_point_to_point() {
        let h = hosts("10.0.0.4/31");
        assert_eq!(h.first, Ipv4Addr::new(10, 0, 0, 4));
        assert_eq!(h.last, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(h.count, 2);
    }

    #[test]
    fn test_single_host() {
        let h = hosts("10.0.0.7/32");
        assert_eq!(h.first, h.last);
        assert_eq!(h.count, 1);
    }

    #[test]
    fn test_slash_30_and_whole_space() {
        assert_eq!(hosts("10.0.0.8/30").count, 2);
        let all = hosts("0.0.0.0/0");
        assert_eq!(all.first, Ipv4Addr::new(0, 0, 0, 1));
        assert_eq!(all.last, Ipv4Addr::new(255, 255, 255, 254));
        assert_eq!(all.count, 4_294_967_294);
    }
}
