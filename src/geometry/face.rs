// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Triangular faces.
//!
//! A face lists its corners and sides in the rotation order of the embedding:
//! side `i` joins corner `i` to corner `i + 1` (indices modulo 3). Whether a
//! side is read forwards or backwards by that walk decides which faces consume
//! and produce it, and from there the face's color and ports.

use slotmap::new_key_type;

use crate::geometry::{EdgeId, VertexId};

new_key_type! {
    /// Stable identifier of a face. Faces are never edited in place: inserting
    /// a point or flipping an edge removes faces and creates new ones.
    pub struct FaceId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    pub corners: [VertexId; 3],
    pub sides: [EdgeId; 3],
}

impl Face {
    pub fn new(corners: [VertexId; 3], sides: [EdgeId; 3]) -> Self {
        Self { corners, sides }
    }

    pub fn corner(&self, index: usize) -> VertexId {
        self.corners[index % 3]
    }

    pub fn side(&self, index: usize) -> EdgeId {
        self.sides[index % 3]
    }

    /// Position of `edge` among the sides.
    pub fn side_index(&self, edge: EdgeId) -> Option<usize> {
        self.sides.iter().position(|&side| side == edge)
    }

    pub fn has_corner(&self, vertex: VertexId) -> bool {
        self.corners.contains(&vertex)
    }
}
