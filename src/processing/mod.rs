//! Block arithmetic.
//!
//! - [`relations`] - overlap and containment predicates
//! - [`navigation`] - next/previous/adjacent blocks of equal size
//! - [`split`] - subdivision into more specific blocks
//! - [`selector`] - optimal prefix for a host count
//! - [`exclude`] - set difference as aligned blocks
//! - [`aggregate`] - aggregation and summarization
//! - [`carve`] - free space and first-fit allocation inside a parent block

mod aggregate;
mod carve;
mod exclude;
mod navigation;
mod relations;
mod selector;
mod split;

// Re-export public functions
pub use aggregate::{aggregate, summarize};
pub use carve::{first_fit, free_blocks};
pub use exclude::{exclude, exclude_all};
pub use navigation::{adjacent, next, previous};
pub use relations::{contains, contains_addr, is_contained_in, overlaps};
pub use selector::{optimal_prefix, MAX_HOST_COUNT};
pub use split::{split, split_iter, Subnets};
