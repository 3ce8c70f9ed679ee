// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The triangulation/tableau bijection, checked exhaustively on small sizes.

use std::collections::HashSet;

use pc_prograph::tableau::{cardinality, enumerate};
use pc_prograph::{FlipDirection, PcProgram, Tableau, TableauBuilder, Triangulation};

const MAX_SIZE: usize = 4;

#[test]
fn test_every_tableau_round_trips() {
    for k in 1..=MAX_SIZE {
        for tableau in enumerate(k) {
            let triangulation = Triangulation::from_tableau(&tableau).unwrap();
            triangulation.validate().unwrap();
            let program = PcProgram::build(&triangulation).unwrap();
            assert_eq!(TableauBuilder::build(&program).unwrap(), tableau);
        }
    }
}

#[test]
fn test_distinct_tableaux_give_distinct_triangulations() {
    for k in 1..=MAX_SIZE {
        let forms: HashSet<_> = enumerate(k)
            .iter()
            .map(|t| {
                Triangulation::from_tableau(t)
                    .unwrap()
                    .canonical_form()
                    .unwrap()
            })
            .collect();
        assert_eq!(forms.len() as u128, cardinality(k).unwrap());
    }
}

#[test]
fn test_insertions_stay_in_range() {
    // Breadth-first growth by point insertion from the minimal triangulation.
    let mut layer = vec![Triangulation::new()];
    for k in 2..=MAX_SIZE {
        let all: HashSet<Tableau> = enumerate(k).into_iter().collect();
        let mut seen = HashSet::new();
        let mut next = Vec::new();
        for t in &layer {
            for (face, _) in t.faces() {
                let mut grown = t.clone();
                grown.add_point(face).unwrap();
                let tableau = TableauBuilder::from_triangulation(&grown).unwrap().tableau;
                assert!(all.contains(&tableau), "{}", tableau);
                if seen.insert(tableau) {
                    next.push(grown);
                }
            }
        }
        assert!(seen.len() < all.len());
        layer = next;
    }
}

#[test]
fn test_flippable_edges_match_labels() {
    for k in 1..=MAX_SIZE {
        for tableau in enumerate(k) {
            let (triangulation, edges) = Triangulation::from_tableau_labelled(&tableau).unwrap();
            for direction in [FlipDirection::Up, FlipDirection::Down] {
                let mut expected: Vec<usize> = triangulation
                    .flippable_edges(direction)
                    .into_iter()
                    .map(|e| edges.iter().position(|&x| x == e).unwrap() + 1)
                    .collect();
                expected.sort_unstable();
                assert_eq!(tableau.flippable_labels(direction), expected, "{}", tableau);
            }
        }
    }
}

#[test]
fn test_covers_are_inverse() {
    for tableau in enumerate(3) {
        for lower in tableau.lower_covers().unwrap() {
            assert_ne!(lower, tableau);
            assert!(
                lower.upper_covers().unwrap().contains(&tableau),
                "{} is not above {}",
                tableau,
                lower
            );
        }
    }
}

#[test]
fn test_only_minimum_is_irreducible() {
    for k in 1..=MAX_SIZE {
        let bottom: Vec<Tableau> = enumerate(k)
            .into_iter()
            .filter(|t| t.reducible_labels().is_empty())
            .collect();
        assert_eq!(bottom, vec![Tableau::min_element(k).unwrap()]);
    }
}
