//! Randomized checks of the set invariants behind aggregation, exclusion and summarization.

use cidr_calc::{aggregate, exclude, exclude_all, overlaps, split, summarize, CidrBlock};
use itertools::Itertools;
use proptest::prelude::*;

/// Merged, sorted `[start, end]` intervals covered by `blocks`.
fn coverage(blocks: &[CidrBlock]) -> Vec<(u64, u64)> {
    let mut intervals: Vec<(u64, u64)> = blocks
        .iter()
        .map(|b| (b.start() as u64, b.end() as u64))
        .sorted()
        .collect();
    let mut merged: Vec<(u64, u64)> = Vec::with_capacity(intervals.len());
    for (start, end) in intervals.drain(..) {
        match merged.last_mut() {
            Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

fn pairwise_disjoint(blocks: &[CidrBlock]) -> bool {
    blocks
        .iter()
        .tuple_combinations()
        .all(|(a, b)| !overlaps(a, b))
}

/// Blocks inside 10.0.0.0/16 so that random picks often overlap or touch.
fn arb_block() -> impl Strategy<Value = CidrBlock> {
    (0u32..65536, 16u8..=32).prop_map(|(offset, prefix)| {
        CidrBlock::containing(0x0A00_0000 + offset, prefix).expect("prefix in range")
    })
}

proptest! {
    #[test]
    fn aggregate_preserves_addresses(input in prop::collection::vec(arb_block(), 0..40)) {
        let out = aggregate(&input);
        prop_assert!(pairwise_disjoint(&out));
        prop_assert_eq!(coverage(&out), coverage(&input));
        prop_assert!(out.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn aggregate_is_idempotent(input in prop::collection::vec(arb_block(), 0..40)) {
        let once = aggregate(&input);
        prop_assert_eq!(aggregate(&once), once);
    }

    #[test]
    fn aggregate_leaves_no_mergeable_pair(input in prop::collection::vec(arb_block(), 1..40)) {
        let out = aggregate(&input);
        for (a, b) in out.iter().tuple_windows() {
            let siblings = a.prefix() == b.prefix()
                && a.end() as u64 + 1 == b.start() as u64
                && a.supernet().map(|p| p.start()) == Some(a.start());
            prop_assert!(!siblings, "{} and {} should have merged", a, b);
        }
    }

    #[test]
    fn exclude_contained_block_restores_base(base in arb_block(), pick in any::<u32>(), extra in 0u8..=16) {
        let prefix = (base.prefix() + extra).min(32);
        let offset = pick as u64 % base.size();
        let excluded = CidrBlock::containing((base.start() as u64 + offset) as u32, prefix).unwrap();

        let rest = exclude(&base, &excluded);
        prop_assert!(rest.iter().all(|b| !overlaps(b, &excluded)));
        prop_assert!(pairwise_disjoint(&rest));
        prop_assert!(rest.len() <= (excluded.prefix() - base.prefix()) as usize);

        let mut union = rest.clone();
        union.push(excluded);
        prop_assert_eq!(coverage(&union), coverage(&[base]));
    }

    #[test]
    fn exclude_all_stays_inside_base(base in arb_block(), excluded in prop::collection::vec(arb_block(), 0..10)) {
        let rest = exclude_all(&base, &excluded);
        prop_assert!(pairwise_disjoint(&rest));
        prop_assert!(rest.iter().all(|b| b.is_contained_in(&base)));
        prop_assert!(rest.iter().all(|b| excluded.iter().all(|x| !overlaps(b, x))));

        // every address of base is either left over or excluded
        let mut union = rest.clone();
        union.extend(excluded.iter().filter(|x| overlaps(x, &base)).copied());
        let covered = coverage(&union);
        prop_assert!(covered.iter().any(|&(s, e)| s <= base.start() as u64 && e >= base.end() as u64));
    }

    #[test]
    fn summarize_is_smallest_cover(input in prop::collection::vec(arb_block(), 1..20)) {
        let summary = summarize(&input).unwrap();
        prop_assert!(input.iter().all(|b| b.is_contained_in(&summary)));
        if input.len() > 1 {
            if let Some((lo, hi)) = summary.halves() {
                prop_assert!(!input.iter().all(|b| b.is_contained_in(&lo)));
                prop_assert!(!input.iter().all(|b| b.is_contained_in(&hi)));
            }
        }
    }

    #[test]
    fn split_tiles_parent(parent in arb_block(), extra in 1u8..=6) {
        let prefix = parent.prefix() + extra;
        prop_assume!(prefix <= 32);
        let parts = split(&parent, prefix).unwrap();
        prop_assert_eq!(parts.len() as u64, 1u64 << extra);
        prop_assert_eq!(coverage(&parts), coverage(&[parent]));
        prop_assert_eq!(aggregate(&parts), vec![parent]);
    }
}
