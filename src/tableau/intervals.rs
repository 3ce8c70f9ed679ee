// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Intervals of the flip order.
//!
//! `b ≤ t` when `b` is reached from `t` by down flips. Every interval `[b, t]`
//! is listed under its top: `t` maps to the set of all `b` below it,
//! including `t` itself.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::errors::ConsistencyError;
use crate::tableau::{enumerate, Tableau};

/// Every interval of the flip order on tableaux of size `k`, keyed by top.
pub fn intervals(k: usize) -> Result<HashMap<Tableau, HashSet<Tableau>>, ConsistencyError> {
    let mut covers = HashMap::new();
    for tableau in enumerate(k) {
        let lower = tableau.lower_covers()?;
        covers.insert(tableau, lower);
    }

    let mut intervals = HashMap::with_capacity(covers.len());
    for top in covers.keys() {
        let mut below = HashSet::from([top.clone()]);
        let mut pending = vec![top];
        while let Some(tableau) = pending.pop() {
            for lower in covers.get(tableau).into_iter().flatten() {
                if below.insert(lower.clone()) {
                    pending.push(lower);
                }
            }
        }
        intervals.insert(top.clone(), below);
    }
    debug!(
        k,
        intervals = intervals.values().map(HashSet::len).sum::<usize>(),
        "listed intervals"
    );
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sizes(k: usize) -> Vec<usize> {
        let mut sizes: Vec<usize> = intervals(k).unwrap().values().map(HashSet::len).collect();
        sizes.sort_unstable();
        sizes
    }

    #[test]
    fn test_small_intervals() {
        assert_eq!(sizes(1), vec![1]);
        assert_eq!(sizes(2), vec![1, 2, 2, 2, 5]);
        assert!(intervals(0).unwrap().is_empty());
    }

    #[test]
    fn test_intervals_of_size_three() {
        let all = intervals(3).unwrap();
        assert_eq!(all.len(), 42);
        assert_eq!(all.values().map(HashSet::len).sum::<usize>(), 370);

        let max = Tableau::max_element(3).unwrap();
        let min = Tableau::min_element(3).unwrap();
        assert_eq!(all[&max].len(), 42);
        assert_eq!(all[&min], HashSet::from([min.clone()]));
        assert!(all.values().all(|below| below.contains(&min)));
    }

    #[test]
    fn test_intervals_are_down_closed() {
        let all = intervals(3).unwrap();
        for (top, below) in &all {
            assert!(below.contains(top));
            for b in below {
                assert!(all[b].is_subset(below), "{} under {}", b, top);
            }
        }
    }
}
