// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Counting and listing all tableaux of shape 3×k.
//!
//! A filling is built label by label: label `i` may go at the end of a row
//! whenever that row is shorter than `k` and strictly shorter than the row
//! above it. Counting uses the same rule as a dynamic program over row
//! lengths, and [`random_element`] draws one filling by picking the row at
//! random.

use rand::Rng;

use crate::errors::TableauError;
use crate::tableau::Tableau;

/// Number of standard tableaux of shape 3×k: `2·(3k)! / (k!·(k+1)!·(k+2)!)`.
///
/// Returns `None` once the count no longer fits in a `u128`.
pub fn cardinality(k: usize) -> Option<u128> {
    // ways[b][c]: fillings with row lengths (a, b, c) for the current a.
    let mut ways = vec![vec![0u128; k + 1]; k + 1];
    ways[0][0] = 1;
    for a in 0..=k {
        let mut next = vec![vec![0u128; k + 1]; k + 1];
        for b in 0..=a {
            for c in 0..=b {
                let here = ways[b][c];
                if here == 0 {
                    continue;
                }
                if c < b {
                    ways[b][c + 1] = ways[b][c + 1].checked_add(here)?;
                }
                if b < a {
                    ways[b + 1][c] = ways[b + 1][c].checked_add(here)?;
                }
                if a < k {
                    next[b][c] = next[b][c].checked_add(here)?;
                }
            }
        }
        if a == k {
            return Some(ways[k][k]);
        }
        ways = next;
    }
    Some(ways[k][k])
}

/// All tableaux of shape 3×k, in lexicographic order of their rows.
pub fn enumerate(k: usize) -> Vec<Tableau> {
    let mut found = Vec::new();
    if k == 0 {
        return found;
    }
    let mut rows: [Vec<usize>; 3] = Default::default();
    fill(k, 1, &mut rows, &mut found);
    found.sort();
    found
}

fn fill(k: usize, label: usize, rows: &mut [Vec<usize>; 3], found: &mut Vec<Tableau>) {
    if label > 3 * k {
        if let Ok(tableau) = Tableau::new(rows.clone()) {
            found.push(tableau);
        }
        return;
    }
    for row in 0..3 {
        if accepts(k, rows, row) {
            rows[row].push(label);
            fill(k, label + 1, rows, found);
            rows[row].pop();
        }
    }
}

fn accepts(k: usize, rows: &[Vec<usize>; 3], row: usize) -> bool {
    let len = rows[row].len();
    len < k && (row == 0 || rows[row - 1].len() > len)
}

/// A random tableau of shape 3×k.
///
/// Each label goes to a row drawn uniformly from those that can take it, so
/// every tableau has a nonzero chance but the draw is not uniform over them.
pub fn random_element<R: Rng + ?Sized>(k: usize, rng: &mut R) -> Result<Tableau, TableauError> {
    if k == 0 {
        return Err(TableauError::Shape([0; 3]));
    }
    let mut rows: [Vec<usize>; 3] = Default::default();
    for label in 1..=3 * k {
        // Some row is open: the first row that is not full.
        let open: Vec<usize> = (0..3).filter(|&row| accepts(k, &rows, row)).collect();
        let row = open[rng.random_range(0..open.len())];
        rows[row].push(label);
    }
    Tableau::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_cardinality() {
        let expected = [1, 1, 5, 42, 462, 6006, 87516];
        for (k, &count) in expected.iter().enumerate() {
            assert_eq!(cardinality(k), Some(count), "k = {}", k);
        }
    }

    #[test]
    fn test_cardinality_overflows_to_none() {
        assert!(cardinality(20).is_some());
        assert_eq!(cardinality(200), None);
    }

    #[test]
    fn test_enumerate_matches_cardinality() {
        for k in 1..=4 {
            let all = enumerate(k);
            assert_eq!(all.len() as u128, cardinality(k).unwrap());
            assert!(all.windows(2).all(|w| w[0] < w[1]));
        }
        assert!(enumerate(0).is_empty());
    }

    #[test]
    fn test_enumerate_contains_extremes() {
        let all = enumerate(3);
        assert!(all.contains(&Tableau::min_element(3).unwrap()));
        assert!(all.contains(&Tableau::max_element(3).unwrap()));
    }

    #[test]
    fn test_random_element_is_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        for k in 1..=6 {
            let tableau = random_element(k, &mut rng).unwrap();
            assert_eq!(tableau.size(), k);
            assert_eq!(Tableau::new(tableau.rows().clone()), Ok(tableau));
        }
        assert_eq!(random_element(0, &mut rng), Err(TableauError::Shape([0; 3])));
    }

    #[test]
    fn test_random_element_is_seeded() {
        let draw = |seed| random_element(5, &mut StdRng::seed_from_u64(seed)).unwrap();
        assert_eq!(draw(7), draw(7));
    }

    #[test]
    fn test_random_element_reaches_every_tableau() {
        // The rarest tableau of size 2 is drawn with probability 1/8.
        let mut rng = StdRng::seed_from_u64(2025);
        let drawn: HashSet<Tableau> = (0..200)
            .map(|_| random_element(2, &mut rng).unwrap())
            .collect();
        let all: HashSet<Tableau> = enumerate(2).into_iter().collect();
        assert_eq!(drawn, all);
    }
}
