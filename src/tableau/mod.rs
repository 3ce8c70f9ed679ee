// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rectangular standard Young tableaux with three rows.
//!
//! A tableau of size `k` holds each of `1..=3k` exactly once, in three rows of
//! length `k`, increasing along rows and down columns. Row 0 is the row that
//! contains 1.
//!
//! Read as a word, a tableau describes a walk through a PC-prograph: label `i`
//! is a wire whose consumer port is fixed by the row of `i` and whose producer
//! port is fixed by the row of `i - 1`. Everything in this module is computed
//! from that reading alone; the triangulation is only needed to compute
//! [`Tableau::lower_covers`].

pub mod builder;
pub mod enumerate;
pub mod intervals;
pub mod layers;

pub use builder::{LabelledTableau, TableauBuilder};
pub use enumerate::{cardinality, enumerate, random_element};
pub use intervals::intervals;
pub use layers::Layer;

use std::fmt;

use crate::errors::{ConsistencyError, TableauError};
use crate::geometry::Port;
use crate::prograph::PcProgram;
use crate::triangulation::{EdgeKind, FlipDirection, Triangulation};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tableau {
    rows: [Vec<usize>; 3],
}

/// Port at which the wire labelled `i` enters its consumer, by the row of `i`.
pub(crate) fn consumer_port(row: usize) -> Port {
    match row {
        0 => Port::Input,
        1 => Port::LeftInput,
        _ => Port::RightInput,
    }
}

/// Port at which the wire labelled `i` leaves its producer, by the row of `i - 1`.
pub(crate) fn producer_port(row: usize) -> Port {
    match row {
        0 => Port::LeftOutput,
        1 => Port::RightOutput,
        _ => Port::Output,
    }
}

impl Tableau {
    /// Check and wrap three rows.
    pub fn new(rows: [Vec<usize>; 3]) -> Result<Self, TableauError> {
        let lengths = [rows[0].len(), rows[1].len(), rows[2].len()];
        let k = lengths[0];
        if k == 0 || lengths.iter().any(|&len| len != k) {
            return Err(TableauError::Shape(lengths));
        }
        let n = 3 * k;
        let mut seen = vec![false; n + 1];
        for &label in rows.iter().flatten() {
            if label == 0 || label > n || seen[label] {
                return Err(TableauError::Labels(n));
            }
            seen[label] = true;
        }
        for (row, cells) in rows.iter().enumerate() {
            if let Some(column) = cells.windows(2).position(|w| w[0] >= w[1]) {
                return Err(TableauError::Row {
                    row,
                    column: column + 1,
                });
            }
        }
        for row in 1..3 {
            if let Some(column) = (0..k).find(|&j| rows[row - 1][j] >= rows[row][j]) {
                return Err(TableauError::Column { row, column });
            }
        }
        Ok(Self { rows })
    }

    pub fn from_rows(
        first: &[usize],
        second: &[usize],
        third: &[usize],
    ) -> Result<Self, TableauError> {
        Self::new([first.to_vec(), second.to_vec(), third.to_vec()])
    }

    /// Number of columns.
    pub fn size(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of cells, which is also the largest label.
    pub fn len(&self) -> usize {
        3 * self.size()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn rows(&self) -> &[Vec<usize>; 3] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[usize]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn columns(&self) -> Vec<[usize; 3]> {
        (0..self.size())
            .map(|j| [self.rows[0][j], self.rows[1][j], self.rows[2][j]])
            .collect()
    }

    /// Row holding `label`, or `None` when the label is out of range.
    pub fn row_of(&self, label: usize) -> Option<usize> {
        self.rows.iter().position(|row| row.binary_search(&label).is_ok())
    }

    /// Row of every label, indexed by label; index 0 is unused.
    pub(crate) fn row_index(&self) -> Vec<usize> {
        let mut index = vec![0; self.len() + 1];
        for (row, cells) in self.rows.iter().enumerate() {
            for &label in cells {
                index[label] = row;
            }
        }
        index
    }

    /// Evacuation: rotate by a half turn and complement every label.
    pub fn schutzenberger(&self) -> Tableau {
        let k = self.size();
        let complement = 3 * k + 1;
        let rows = [0, 1, 2].map(|i| {
            (0..k)
                .map(|j| complement - self.rows[2 - i][k - 1 - j])
                .collect()
        });
        Tableau { rows }
    }

    /// `(left, right)` input labels of each product, ordered by right input.
    ///
    /// Each row-2 label closes the most recently opened product that is still
    /// waiting for its right input.
    pub fn product_inputs(&self) -> Vec<(usize, usize)> {
        let rows = self.row_index();
        let mut pending = Vec::with_capacity(self.size());
        let mut products = Vec::with_capacity(self.size());
        for label in 2..=self.len() {
            match rows[label] {
                1 => pending.push(label),
                2 => {
                    if let Some(left) = pending.pop() {
                        products.push((left, label));
                    }
                }
                _ => {}
            }
        }
        products
    }

    /// `(left, right)` output labels of each coproduct, ordered by right output.
    pub fn coproduct_outputs(&self) -> Vec<(usize, usize)> {
        let rows = self.row_index();
        let mut open = Vec::with_capacity(self.size());
        let mut coproducts = Vec::with_capacity(self.size());
        for label in 1..=self.len() {
            match rows[label] {
                0 => open.push(label),
                1 => {
                    if let Some(opened) = open.pop() {
                        coproducts.push((opened + 1, label + 1));
                    }
                }
                _ => {}
            }
        }
        coproducts
    }

    /// Kind of the edge labelled `label`. The root, label 1, is `Output → Input`.
    pub fn edge_kind(&self, label: usize) -> Option<EdgeKind> {
        if label == 1 {
            return Some(EdgeKind::new(Port::Output, Port::Input));
        }
        let to = self.row_of(label)?;
        let from = self.row_of(label - 1)?;
        Some(EdgeKind::new(producer_port(from), consumer_port(to)))
    }

    /// Labels of the edges that flip in `direction`.
    pub fn flippable_labels(&self, direction: FlipDirection) -> Vec<usize> {
        (2..=self.len())
            .filter(|&label| {
                self.edge_kind(label)
                    .is_some_and(|kind| kind.allows(direction))
            })
            .collect()
    }

    /// Labels of the edges that flip down.
    pub fn reducible_labels(&self) -> Vec<usize> {
        self.flippable_labels(FlipDirection::Down)
    }

    /// Tableaux one flip below this one, in label order of the flipped edge.
    pub fn lower_covers(&self) -> Result<Vec<Tableau>, ConsistencyError> {
        self.covers(FlipDirection::Down)
    }

    /// Tableaux one flip above this one, in label order of the flipped edge.
    pub fn upper_covers(&self) -> Result<Vec<Tableau>, ConsistencyError> {
        self.covers(FlipDirection::Up)
    }

    fn covers(&self, direction: FlipDirection) -> Result<Vec<Tableau>, ConsistencyError> {
        const MISMATCH: &str = "tableau edge kind disagrees with triangulation";
        let (triangulation, edges) = Triangulation::from_tableau_labelled(self)?;
        self.flippable_labels(direction)
            .into_iter()
            .map(|label| {
                let mut flipped = triangulation.clone();
                flipped
                    .flip(edges[label - 1], direction)
                    .map_err(|_| ConsistencyError::Traversal(MISMATCH))?;
                TableauBuilder::build(&PcProgram::build(&flipped)?)
            })
            .collect()
    }

    /// The bottom of the flip order: rows filled one after the other.
    pub fn min_element(k: usize) -> Result<Tableau, TableauError> {
        Tableau::new([0, 1, 2].map(|row| (row * k + 1..=(row + 1) * k).collect()))
    }

    /// The top of the flip order.
    pub fn max_element(k: usize) -> Result<Tableau, TableauError> {
        if k == 0 {
            return Err(TableauError::Shape([0; 3]));
        }
        let mut first = vec![1];
        first.extend((1..k).map(|j| 3 * j));
        let second = (0..k).map(|j| 3 * j + 2).collect();
        let mut third: Vec<usize> = (1..k).map(|j| 3 * j + 1).collect();
        third.push(3 * k);
        Tableau::new([first, second, third])
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.len().to_string().len() + 2;
        let rule = |left: &str, middle: &str, right: &str| {
            let bar = "─".repeat(width);
            let inner = vec![bar; self.size()].join(middle);
            format!("{left}{inner}{right}")
        };
        writeln!(f, "{}", rule("┌", "┬", "┐"))?;
        for (i, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|label| format!("{:^width$}", label, width = width))
                .collect();
            writeln!(f, "│{}│", cells.join("│"))?;
            if i < 2 {
                writeln!(f, "{}", rule("├", "┼", "┤"))?;
            }
        }
        write!(f, "{}", rule("└", "┴", "┘"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tableau(first: &[usize], second: &[usize], third: &[usize]) -> Tableau {
        Tableau::from_rows(first, second, third).unwrap()
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Tableau::from_rows(&[1, 2], &[3], &[4, 5]),
            Err(TableauError::Shape([2, 1, 2]))
        );
        assert_eq!(
            Tableau::from_rows(&[1, 2], &[3, 4], &[5, 5]),
            Err(TableauError::Labels(6))
        );
        assert_eq!(
            Tableau::from_rows(&[2, 1], &[3, 4], &[5, 6]),
            Err(TableauError::Row { row: 0, column: 1 })
        );
        assert_eq!(
            Tableau::from_rows(&[1, 4], &[2, 3], &[5, 6]),
            Err(TableauError::Column { row: 1, column: 1 })
        );
        assert_eq!(
            Tableau::from_rows(&[], &[], &[]),
            Err(TableauError::Shape([0, 0, 0]))
        );
    }

    #[test]
    fn test_queries() {
        let t = tableau(&[1, 3], &[2, 5], &[4, 6]);
        assert_eq!(t.size(), 2);
        assert_eq!(t.len(), 6);
        assert_eq!(t.columns(), vec![[1, 2, 4], [3, 5, 6]]);
        assert_eq!(t.row_of(5), Some(1));
        assert_eq!(t.row_of(7), None);
        assert_eq!(t.row(2), Some(&[4, 6][..]));
        assert_eq!(t.row(3), None);
    }

    #[test]
    fn test_schutzenberger() {
        let t = tableau(&[1, 3, 4], &[2, 5, 7], &[6, 8, 9]);
        let expected = tableau(&[1, 2, 4], &[3, 5, 8], &[6, 7, 9]);
        assert_eq!(t.schutzenberger(), expected);
        assert_eq!(expected.schutzenberger(), t);
        let max = Tableau::max_element(2).unwrap();
        assert_eq!(max.schutzenberger(), max);
    }

    #[test]
    fn test_product_inputs() {
        let t = tableau(&[1, 3, 4], &[2, 5, 7], &[6, 8, 9]);
        assert_eq!(t.product_inputs(), vec![(5, 6), (7, 8), (2, 9)]);
        let t = tableau(&[1, 3, 5, 7], &[2, 4, 6, 8], &[9, 10, 11, 12]);
        assert_eq!(t.product_inputs(), vec![(8, 9), (6, 10), (4, 11), (2, 12)]);
    }

    #[test]
    fn test_coproduct_outputs() {
        let t = tableau(&[1, 4], &[2, 5], &[3, 6]);
        assert_eq!(t.coproduct_outputs(), vec![(2, 3), (5, 6)]);
        let t = tableau(&[1, 3, 5, 7], &[2, 4, 6, 8], &[9, 10, 11, 12]);
        assert_eq!(t.coproduct_outputs(), vec![(2, 3), (4, 5), (6, 7), (8, 9)]);
    }

    #[test]
    fn test_edge_kinds() {
        let t = tableau(&[1, 4], &[2, 5], &[3, 6]);
        let kinds: Vec<EdgeKind> = (1..=6).map(|i| t.edge_kind(i).unwrap()).collect();
        let expected = [
            (Port::Output, Port::Input),
            (Port::LeftOutput, Port::LeftInput),
            (Port::RightOutput, Port::RightInput),
            (Port::Output, Port::Input),
            (Port::LeftOutput, Port::LeftInput),
            (Port::RightOutput, Port::RightInput),
        ];
        for (kind, (from, to)) in kinds.into_iter().zip(expected) {
            assert_eq!(kind, EdgeKind::new(from, to));
        }
        assert_eq!(t.edge_kind(7), None);
    }

    #[test]
    fn test_reducible_labels() {
        let t = tableau(&[1, 3, 6], &[2, 5, 8], &[4, 7, 9]);
        assert_eq!(t.reducible_labels(), (3..=8).collect::<Vec<_>>());
        assert!(Tableau::min_element(3).unwrap().reducible_labels().is_empty());
        let t = tableau(&[1, 4, 7], &[2, 5, 8], &[3, 6, 9]);
        assert_eq!(t.reducible_labels(), vec![4, 7]);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            Tableau::min_element(2).unwrap(),
            tableau(&[1, 2], &[3, 4], &[5, 6])
        );
        assert_eq!(
            Tableau::max_element(3).unwrap(),
            tableau(&[1, 3, 6], &[2, 5, 8], &[4, 7, 9])
        );
        assert_eq!(Tableau::max_element(1), Tableau::min_element(1));
        assert!(Tableau::max_element(3)
            .unwrap()
            .flippable_labels(FlipDirection::Up)
            .is_empty());
    }

    #[test]
    fn test_lower_covers_of_max() {
        let max = Tableau::max_element(2).unwrap();
        let covers = max.lower_covers().unwrap();
        assert_eq!(covers.len(), 3);
        assert!(covers.contains(&tableau(&[1, 2], &[3, 5], &[4, 6])));
        assert!(covers.contains(&tableau(&[1, 4], &[2, 5], &[3, 6])));
        for cover in &covers {
            assert!(cover.upper_covers().unwrap().contains(&max));
        }
    }

    #[test]
    fn test_display() {
        let t = tableau(&[1], &[2], &[3]);
        let expected = "┌───┐\n│ 1 │\n├───┤\n│ 2 │\n├───┤\n│ 3 │\n└───┘";
        assert_eq!(t.to_string(), expected);
    }
}
