//! IPv4 CIDR block arithmetic.
//!
//! Blocks are aligned `(start, prefix)` pairs treated as address sets:
//! aggregation, exclusion, summarization, navigation, splitting and
//! host-count based prefix selection. Everything in [`models`] and
//! [`processing`] is pure and deterministic.
//!
//! ```
//! use cidr_calc::{aggregate, summarize, CidrBlock};
//!
//! let blocks: Vec<CidrBlock> = vec!["10.0.0.0/24".parse().unwrap(), "10.0.1.0/24".parse().unwrap()];
//! let merged: CidrBlock = "10.0.0.0/23".parse().unwrap();
//! assert_eq!(aggregate(&blocks), vec![merged]);
//! assert_eq!(summarize(&blocks).unwrap().to_string(), "10.0.0.0/23");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::{CidrError, Result};
pub use models::{parse_block, parse_block_list, CidrBlock, HostRange};
pub use processing::{
    adjacent, aggregate, contains, exclude, exclude_all, first_fit, free_blocks, is_contained_in,
    next, optimal_prefix, overlaps, previous, split, summarize,
};

/// Parse a CIDR list, returning the blocks sorted with the larger block first on equal starts.
pub fn get_sorted_blocks(input: &str) -> Result<Vec<CidrBlock>> {
    let mut blocks = parse_block_list(input)?;
    blocks.sort();
    Ok(blocks)
}

/// Return an error if two blocks of the list overlap.
pub fn check_for_overlapping_blocks(blocks: &[CidrBlock]) -> Result<()> {
    let mut sorted = blocks.to_vec();
    sorted.sort();
    for pair in sorted.windows(2) {
        if overlaps(&pair[0], &pair[1]) {
            return Err(CidrError::invalid(format!(
                "Overlap found: {} and {}",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}
