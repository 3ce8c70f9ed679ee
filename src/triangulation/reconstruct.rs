// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! From a tableau back to a triangulation.
//!
//! The tableau walk is replayed to recover the prograph: a row-0 label opens
//! a coproduct, a row-1 label opens a product and closes the last open
//! coproduct, a row-2 label completes the most recent product still missing
//! its right input. Each node then becomes a triangle whose sides are its
//! wires in rotation order, and the corners of neighbouring triangles are
//! glued across their shared side. The glued corner classes are the vertices.

use slotmap::SlotMap;
use tracing::debug;

use crate::errors::ConsistencyError;
use crate::geometry::{Color, Edge, EdgeId, Pole, Port, Vertex, VertexId};
use crate::tableau::Tableau;
use crate::triangulation::Triangulation;

/// A node under reconstruction: the label at each port slot.
struct Shell {
    color: Color,
    ports: [usize; 3],
}

impl Shell {
    fn new(color: Color) -> Self {
        Self {
            color,
            ports: [0; 3],
        }
    }

    /// Port slots in rotation order.
    fn rotation(&self) -> [usize; 3] {
        match self.color {
            Color::Blue => [0, 1, 2],
            Color::Red => [0, 2, 1],
        }
    }

    fn position(&self, port: Port) -> usize {
        let slot = port.slot();
        match self.color {
            Color::Blue => slot,
            Color::Red => [0, 2, 1][slot],
        }
    }
}

/// Union-find over the corners of all shells, corner `i` of shell `f` being
/// `3 * f + i`.
struct Corners {
    parent: Vec<usize>,
}

impl Corners {
    fn new(count: usize) -> Self {
        Self {
            parent: (0..count).collect(),
        }
    }

    fn find(&mut self, mut corner: usize) -> usize {
        while self.parent[corner] != corner {
            self.parent[corner] = self.parent[self.parent[corner]];
            corner = self.parent[corner];
        }
        corner
    }

    fn union(&mut self, a: usize, b: usize) {
        let (a, b) = (self.find(a), self.find(b));
        if a != b {
            self.parent[a] = b;
        }
    }
}

type End = (usize, Port);

impl Triangulation {
    pub fn from_tableau(tableau: &Tableau) -> Result<Self, ConsistencyError> {
        Ok(Self::from_tableau_labelled(tableau)?.0)
    }

    /// As [`Triangulation::from_tableau`], also returning the edge carrying
    /// each label (`edges[i - 1]` for label `i`).
    pub fn from_tableau_labelled(
        tableau: &Tableau,
    ) -> Result<(Self, Vec<EdgeId>), ConsistencyError> {
        let n = tableau.len();
        let rows = tableau.row_index();
        let broken = ConsistencyError::Traversal("tableau does not describe a prograph");

        let mut shells = vec![Shell::new(Color::Red)];
        let mut consumers: Vec<End> = vec![(0, Port::Input); n + 1];
        let mut producers: Vec<End> = vec![(0, Port::Output); n + 1];
        let mut open = vec![0];
        let mut pending = Vec::new();
        let mut next: End = (0, Port::LeftOutput);
        for label in 2..=n {
            producers[label] = next;
            match rows[label] {
                0 => {
                    let coproduct = shells.len();
                    shells.push(Shell::new(Color::Red));
                    consumers[label] = (coproduct, Port::Input);
                    open.push(coproduct);
                    next = (coproduct, Port::LeftOutput);
                }
                1 => {
                    let product = shells.len();
                    shells.push(Shell::new(Color::Blue));
                    consumers[label] = (product, Port::LeftInput);
                    pending.push(product);
                    let coproduct = open.pop().ok_or(broken.clone())?;
                    next = (coproduct, Port::RightOutput);
                }
                _ => {
                    let product = pending.pop().ok_or(broken.clone())?;
                    consumers[label] = (product, Port::RightInput);
                    next = (product, Port::Output);
                }
            }
        }
        if next.1 != Port::Output || !open.is_empty() || !pending.is_empty() {
            return Err(broken);
        }
        producers[1] = next;
        for label in 1..=n {
            for (shell, port) in [consumers[label], producers[label]] {
                shells[shell].ports[port.slot()] = label;
            }
        }

        // Glue: the two faces walk a shared side in opposite directions.
        let mut corners = Corners::new(3 * shells.len());
        for label in 1..=n {
            let (f, in_port) = consumers[label];
            let (g, out_port) = producers[label];
            let i = shells[f].position(in_port);
            let j = shells[g].position(out_port);
            corners.union(3 * f + i, 3 * g + (j + 1) % 3);
            corners.union(3 * f + (i + 1) % 3, 3 * g + j);
        }

        let left = corners.find(0);
        let right = corners.find(1);
        let mut vertices = SlotMap::with_key();
        let mut vertex_of: Vec<Option<VertexId>> = vec![None; 3 * shells.len()];
        for corner in 0..3 * shells.len() {
            let class = corners.find(corner);
            if vertex_of[class].is_none() {
                let vertex = if class == left {
                    Vertex::pole(Pole::Left)
                } else if class == right {
                    Vertex::pole(Pole::Right)
                } else {
                    Vertex::inner()
                };
                vertex_of[class] = Some(vertices.insert(vertex));
            }
        }
        let mut vertex_at = |corner: usize| vertex_of[corners.find(corner)].ok_or(broken.clone());

        let mut edges = SlotMap::with_key();
        let mut labelled = Vec::with_capacity(n);
        for &(f, port) in &consumers[1..] {
            let i = shells[f].position(port);
            let tail = vertex_at(3 * f + i)?;
            let head = vertex_at(3 * f + (i + 1) % 3)?;
            labelled.push(edges.insert(Edge::detached(tail, head)));
        }

        let mut faces = Vec::with_capacity(shells.len());
        for (f, shell) in shells.iter().enumerate() {
            let rotation = shell.rotation();
            let ring = [
                vertex_at(3 * f)?,
                vertex_at(3 * f + 1)?,
                vertex_at(3 * f + 2)?,
            ];
            let sides = rotation.map(|slot| labelled[shell.ports[slot] - 1]);
            faces.push((ring, sides));
        }

        let mut triangulation =
            Triangulation::from_parts(vertices, edges, SlotMap::with_key(), labelled[0]);
        for (ring, sides) in faces {
            triangulation.attach(ring, sides);
        }
        triangulation.validate()?;
        debug!(size = tableau.size(), "rebuilt triangulation from tableau");
        Ok((triangulation, labelled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tableau::{enumerate, TableauBuilder};

    #[test]
    fn test_minimal() {
        let tableau = Tableau::min_element(1).unwrap();
        let t = Triangulation::from_tableau(&tableau).unwrap();
        assert!(t.is_isomorphic(&Triangulation::new()).unwrap());
    }

    #[test]
    fn test_max_is_top_insertion() {
        let mut expected = Triangulation::new();
        let top = expected.top_face().unwrap();
        expected.add_point(top).unwrap();
        let t = Triangulation::from_tableau(&Tableau::max_element(2).unwrap()).unwrap();
        assert!(t.is_isomorphic(&expected).unwrap());
    }

    #[test]
    fn test_round_trip_small() {
        for k in 1..=3 {
            for tableau in enumerate(k) {
                let (t, edges) = Triangulation::from_tableau_labelled(&tableau).unwrap();
                assert_eq!(t.size(), k);
                assert_eq!(t.vertex_count(), k + 2);
                let labelled = TableauBuilder::from_triangulation(&t).unwrap();
                assert_eq!(labelled.tableau, tableau);
                assert_eq!(labelled.edges, edges);
            }
        }
    }
}
