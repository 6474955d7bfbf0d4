//! Address and block primitives.
//!
//! - [`CidrBlock`] - aligned IPv4 block with derived size, end and masks
//! - [`HostRange`] - usable host addresses of a block
//! - address helpers over raw `u32` addresses and prefix lengths
//! - strict CIDR string parsing

mod block;
mod host_range;
mod ipv4;
mod parse;

// Re-export public types
pub use block::{Addresses, CidrBlock};
pub use host_range::HostRange;
pub use ipv4::{
    block_size, broadcast_addr, check_prefix, cut_addr, get_cidr_mask, lo_mask, to_dotted,
    wildcard_mask, ADDRESS_SPACE, MAX_LENGTH,
};
pub use parse::{parse_block, parse_block_list};
