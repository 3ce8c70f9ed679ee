// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Reading a tableau off a prograph.
//!
//! The walk starts on the open leg, which gets label 1 and enters the
//! coproduct at infinity. From there each wire is labelled in turn and the
//! port it enters decides both the row of its label and the next wire:
//!
//! - an input: row 0, the coproduct is pushed, continue from its left output;
//! - a left input: row 1, the last pushed coproduct is popped, continue from
//!   its right output;
//! - a right input: row 2, continue from the product's output.
//!
//! The walk visits every wire once and ends back on the open leg with an
//! empty stack. Anything else means the prograph is broken.

use tracing::debug;

use crate::errors::ConsistencyError;
use crate::geometry::{EdgeId, Port};
use crate::prograph::{Node, PcProgram};
use crate::tableau::Tableau;
use crate::triangulation::Triangulation;

/// A tableau together with the edge carrying each label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelledTableau {
    pub tableau: Tableau,
    /// `edges[i - 1]` carries label `i`.
    pub edges: Vec<EdgeId>,
}

impl LabelledTableau {
    pub fn edge(&self, label: usize) -> Option<EdgeId> {
        label.checked_sub(1).and_then(|i| self.edges.get(i).copied())
    }

    pub fn label_of(&self, edge: EdgeId) -> Option<usize> {
        self.edges.iter().position(|&e| e == edge).map(|i| i + 1)
    }
}

pub struct TableauBuilder;

fn output(node: &Node, port: Port) -> Result<usize, ConsistencyError> {
    node.wire(port)
        .ok_or(ConsistencyError::Traversal("node has no such output port"))
}

impl TableauBuilder {
    pub fn build(program: &PcProgram) -> Result<Tableau, ConsistencyError> {
        Ok(Self::build_labelled(program)?.tableau)
    }

    pub fn build_labelled(program: &PcProgram) -> Result<LabelledTableau, ConsistencyError> {
        let n = program.wires().len();
        if n == 0 || n % 3 != 0 {
            return Err(ConsistencyError::Traversal(
                "wire count is not a positive multiple of three",
            ));
        }
        let root = program.root_wire();
        let entry = program.entry();

        let mut rows: [Vec<usize>; 3] = Default::default();
        let mut edges = Vec::with_capacity(n);
        let mut visited = vec![false; n];
        rows[0].push(1);
        edges.push(program.wire(root)?.edge);
        visited[root] = true;

        let mut stack = vec![entry];
        let mut current = output(program.node(entry)?, Port::LeftOutput)?;
        for label in 2..=n {
            if std::mem::replace(&mut visited[current], true) {
                return Err(ConsistencyError::Traversal("a wire is reached twice"));
            }
            let wire = program.wire(current)?;
            edges.push(wire.edge);
            let target = program.node(wire.target.node)?;
            current = match wire.target.port {
                Port::Input => {
                    rows[0].push(label);
                    stack.push(wire.target.node);
                    output(target, Port::LeftOutput)?
                }
                Port::LeftInput => {
                    rows[1].push(label);
                    let coproduct = stack
                        .pop()
                        .ok_or(ConsistencyError::Traversal("no open coproduct to close"))?;
                    output(program.node(coproduct)?, Port::RightOutput)?
                }
                Port::RightInput => {
                    rows[2].push(label);
                    output(target, Port::Output)?
                }
                _ => {
                    return Err(ConsistencyError::Traversal("a wire ends at an output port"));
                }
            };
        }
        if current != root || !stack.is_empty() {
            return Err(ConsistencyError::Traversal(
                "the walk does not close on the open leg",
            ));
        }
        let tableau = Tableau::new(rows)?;
        debug!(size = tableau.size(), "built tableau");
        Ok(LabelledTableau { tableau, edges })
    }

    /// Shorthand for building the prograph and then the tableau.
    pub fn from_triangulation(
        triangulation: &Triangulation,
    ) -> Result<LabelledTableau, ConsistencyError> {
        Self::build_labelled(&PcProgram::build(triangulation)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triangulation::FlipDirection;

    fn tableau(first: &[usize], second: &[usize], third: &[usize]) -> Tableau {
        Tableau::from_rows(first, second, third).unwrap()
    }

    #[test]
    fn test_minimal_tableau() {
        let t = Triangulation::new();
        let labelled = TableauBuilder::from_triangulation(&t).unwrap();
        assert_eq!(labelled.tableau, tableau(&[1], &[2], &[3]));
        assert_eq!(labelled.edge(1), Some(t.root()));
        assert_eq!(labelled.label_of(t.root()), Some(1));
        assert_eq!(labelled.edge(0), None);
    }

    #[test]
    fn test_top_insertion_gives_max() {
        let mut t = Triangulation::new();
        let top = t.top_face().unwrap();
        t.add_point(top).unwrap();
        let labelled = TableauBuilder::from_triangulation(&t).unwrap();
        assert_eq!(labelled.tableau, Tableau::max_element(2).unwrap());
        assert_eq!(labelled.edges.len(), 6);
    }

    #[test]
    fn test_flips_below_max() {
        let mut t = Triangulation::new();
        let top = t.top_face().unwrap();
        t.add_point(top).unwrap();
        let labelled = TableauBuilder::from_triangulation(&t).unwrap();

        let mut down3 = t.clone();
        down3
            .flip(labelled.edge(3).unwrap(), FlipDirection::Down)
            .unwrap();
        let result = TableauBuilder::from_triangulation(&down3).unwrap();
        assert_eq!(result.tableau, tableau(&[1, 2], &[3, 5], &[4, 6]));

        let mut down4 = t.clone();
        down4
            .flip(labelled.edge(4).unwrap(), FlipDirection::Down)
            .unwrap();
        let result = TableauBuilder::from_triangulation(&down4).unwrap();
        assert_eq!(result.tableau, tableau(&[1, 4], &[2, 5], &[3, 6]));
    }

    #[test]
    fn test_mirrored_minimal_prograph() {
        let program = PcProgram::build(&Triangulation::new()).unwrap().mirrored();
        let labelled = TableauBuilder::build_labelled(&program).unwrap();
        assert_eq!(labelled.tableau, tableau(&[1], &[2], &[3]));
    }
}
