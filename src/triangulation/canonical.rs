// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Canonical codes for rooted triangulations.
//!
//! Two triangulations are isomorphic (as rooted, oriented maps) exactly when
//! their codes are equal. The code is obtained by a breadth-first walk of the
//! faces that starts from the top face at the root side and crosses the sides
//! of each face in rotation order, numbering vertices and edges as they are
//! first met. Keys never appear in the code.

use std::collections::VecDeque;

use slotmap::SecondaryMap;

use crate::errors::{ConsistencyError, Element};
use crate::geometry::{Color, EdgeId, FaceId, VertexId};
use crate::triangulation::Triangulation;

/// One face as met by the walk: corners and sides start from the side the walk
/// entered through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceCode {
    pub color: Color,
    pub corners: [usize; 3],
    pub sides: [usize; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalForm {
    pub faces: Vec<FaceCode>,
    /// `(tail, head)` vertex numbers of each edge, by edge number.
    pub edges: Vec<(usize, usize)>,
}

#[derive(Default)]
struct Numbering {
    vertices: SecondaryMap<VertexId, usize>,
    edges: SecondaryMap<EdgeId, usize>,
    vertex_count: usize,
    edge_order: Vec<EdgeId>,
}

impl Numbering {
    fn vertex(&mut self, id: VertexId) -> usize {
        if let Some(&n) = self.vertices.get(id) {
            return n;
        }
        let n = self.vertex_count;
        self.vertices.insert(id, n);
        self.vertex_count += 1;
        n
    }

    fn edge(&mut self, id: EdgeId) -> usize {
        if let Some(&n) = self.edges.get(id) {
            return n;
        }
        let n = self.edge_order.len();
        self.edges.insert(id, n);
        self.edge_order.push(id);
        n
    }
}

impl Triangulation {
    pub fn canonical_form(&self) -> Result<CanonicalForm, ConsistencyError> {
        let root = self.root();
        let top = self.top_face()?;
        let start = self
            .face_ref(top)?
            .side_index(root)
            .ok_or(ConsistencyError::Incidence {
                edge: root,
                face: top,
            })?;

        let mut numbering = Numbering::default();
        let mut seen: SecondaryMap<FaceId, ()> = SecondaryMap::new();
        let mut queue = VecDeque::from([(top, start)]);
        seen.insert(top, ());
        let mut faces = Vec::with_capacity(self.face_count());

        while let Some((id, start)) = queue.pop_front() {
            let face = *self.face_ref(id)?;
            let mut code = FaceCode {
                color: self.color(id)?,
                corners: [0; 3],
                sides: [0; 3],
            };
            for k in 0..3 {
                code.corners[k] = numbering.vertex(face.corner(start + k));
                let side = face.side(start + k);
                code.sides[k] = numbering.edge(side);

                let neighbour = self
                    .edge_ref(side)?
                    .other_face(id)
                    .ok_or(ConsistencyError::Incidence { edge: side, face: id })?;
                if !seen.contains_key(neighbour) {
                    let entry = self
                        .face_ref(neighbour)?
                        .side_index(side)
                        .ok_or(ConsistencyError::Incidence {
                            edge: side,
                            face: neighbour,
                        })?;
                    seen.insert(neighbour, ());
                    queue.push_back((neighbour, entry));
                }
            }
            faces.push(code);
        }
        if faces.len() != self.face_count() {
            return Err(ConsistencyError::Dangling(Element::Face(top)));
        }

        let edges = numbering
            .edge_order
            .iter()
            .map(|&id| {
                let edge = self.edge_ref(id)?;
                let tail = numbering.vertices.get(edge.tail).copied();
                let head = numbering.vertices.get(edge.head).copied();
                match (tail, head) {
                    (Some(t), Some(h)) => Ok((t, h)),
                    _ => Err(ConsistencyError::Dangling(Element::Edge(id))),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(CanonicalForm { faces, edges })
    }

    pub fn is_isomorphic(&self, other: &Triangulation) -> Result<bool, ConsistencyError> {
        Ok(self.canonical_form()? == other.canonical_form()?)
    }
}
