// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Full invariant check of a triangulation.
//!
//! Run after every committed edit when the editor is configured for full
//! validation, and by the tests on every reachable state. The checks are:
//!
//! 1. the root joins the left pole to the right pole, and exactly those two
//!    vertices are poles;
//! 2. every face side joins consecutive corners, and every edge is consumed by
//!    exactly one face and produced by exactly one other face;
//! 3. every face is a transitive triangle (has a frame);
//! 4. as many RED as BLUE faces, and `V - E + F = 2`;
//! 5. the orientation is bipolar: the left pole is the only source, the right
//!    pole the only sink, and there is no directed cycle.

use std::collections::VecDeque;

use slotmap::SecondaryMap;

use crate::errors::{ConsistencyError, Element};
use crate::geometry::{Color, Pole, VertexId};
use crate::triangulation::Triangulation;

impl Triangulation {
    pub fn validate(&self) -> Result<(), ConsistencyError> {
        self.validate_poles()?;
        self.validate_incidence()?;
        self.validate_colors()?;
        self.validate_orientation()
    }

    fn validate_poles(&self) -> Result<(), ConsistencyError> {
        let root = self.edge_ref(self.root())?;
        for (id, vertex) in self.vertices() {
            let expected = if id == root.tail {
                Some(Pole::Left)
            } else if id == root.head {
                Some(Pole::Right)
            } else {
                None
            };
            if vertex.pole != expected {
                return Err(ConsistencyError::Root);
            }
        }
        if self.vertex(root.tail).is_none() || self.vertex(root.head).is_none() {
            return Err(ConsistencyError::Root);
        }
        Ok(())
    }

    fn validate_incidence(&self) -> Result<(), ConsistencyError> {
        let mut consumed: SecondaryMap<_, usize> = SecondaryMap::new();
        let mut produced: SecondaryMap<_, usize> = SecondaryMap::new();
        for (face_id, face) in self.faces() {
            for &corner in &face.corners {
                if self.vertex(corner).is_none() {
                    return Err(ConsistencyError::Dangling(Element::Vertex(corner)));
                }
            }
            for (i, &side) in face.sides.iter().enumerate() {
                let edge = self.edge_ref(side)?;
                let (from, to) = (face.corner(i), face.corner(i + 1));
                let mismatch = ConsistencyError::Incidence {
                    edge: side,
                    face: face_id,
                };
                if edge.tail == from && edge.head == to && edge.consumer == face_id {
                    *consumed.entry(side).ok_or(mismatch.clone())?.or_insert(0) += 1;
                } else if edge.tail == to && edge.head == from && edge.producer == face_id {
                    *produced.entry(side).ok_or(mismatch.clone())?.or_insert(0) += 1;
                } else {
                    return Err(mismatch);
                }
            }
        }
        for (id, edge) in self.edges() {
            if edge.tail == edge.head {
                return Err(ConsistencyError::Loop(id));
            }
            let once = |counts: &SecondaryMap<_, usize>| counts.get(id).copied() == Some(1);
            if !once(&consumed) || !once(&produced) || edge.consumer == edge.producer {
                return Err(ConsistencyError::Incidence {
                    edge: id,
                    face: edge.consumer,
                });
            }
        }
        Ok(())
    }

    fn validate_colors(&self) -> Result<(), ConsistencyError> {
        let mut red = 0;
        let mut blue = 0;
        for (id, _) in self.faces() {
            match self.frame(id)?.color {
                Color::Red => red += 1,
                Color::Blue => blue += 1,
            }
        }
        if red != blue {
            return Err(ConsistencyError::ColorImbalance { red, blue });
        }
        if self.color(self.top_face()?)? != Color::Red {
            return Err(ConsistencyError::Root);
        }
        let euler =
            self.vertex_count() as i64 - self.edge_count() as i64 + self.face_count() as i64;
        if euler != 2 {
            return Err(ConsistencyError::Euler(euler));
        }
        Ok(())
    }

    /// Kahn's algorithm from the left pole; every vertex must be reached.
    fn validate_orientation(&self) -> Result<(), ConsistencyError> {
        let left = self.pole(Pole::Left)?;
        let right = self.pole(Pole::Right)?;
        let mut indegree: SecondaryMap<VertexId, usize> = SecondaryMap::new();
        let mut outdegree: SecondaryMap<VertexId, usize> = SecondaryMap::new();
        let mut successors: SecondaryMap<VertexId, Vec<VertexId>> = SecondaryMap::new();
        for (id, _) in self.vertices() {
            indegree.insert(id, 0);
            outdegree.insert(id, 0);
            successors.insert(id, Vec::new());
        }
        for (_, edge) in self.edges() {
            let dangling = ConsistencyError::Dangling(Element::Vertex(edge.head));
            *indegree.get_mut(edge.head).ok_or(dangling)? += 1;
            let dangling = ConsistencyError::Dangling(Element::Vertex(edge.tail));
            *outdegree.get_mut(edge.tail).ok_or(dangling.clone())? += 1;
            successors
                .get_mut(edge.tail)
                .ok_or(dangling)?
                .push(edge.head);
        }
        for (id, _) in self.vertices() {
            let has_in = indegree.get(id).is_some_and(|&d| d > 0);
            let has_out = outdegree.get(id).is_some_and(|&d| d > 0);
            let ok = if id == left {
                !has_in && has_out
            } else if id == right {
                has_in && !has_out
            } else {
                has_in && has_out
            };
            if !ok {
                return Err(ConsistencyError::Bipolarity(id));
            }
        }

        let mut queue = VecDeque::from([left]);
        let mut reached = 0;
        while let Some(vertex) = queue.pop_front() {
            reached += 1;
            for &next in successors.get(vertex).map(Vec::as_slice).unwrap_or(&[]) {
                if let Some(d) = indegree.get_mut(next) {
                    *d -= 1;
                    if *d == 0 {
                        queue.push_back(next);
                    }
                }
            }
        }
        if reached != self.vertex_count() {
            return Err(ConsistencyError::DirectedCycle);
        }
        Ok(())
    }
}
