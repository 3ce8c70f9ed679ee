// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertices of the triangulation.
//!
//! A vertex carries no coordinates; positions belong to [`crate::layout`].
//! Exactly two vertices are poles: the unique source (left) and the unique
//! sink (right) of the bipolar orientation. The root edge joins them.

use slotmap::new_key_type;

new_key_type! {
    /// Stable identifier of a vertex. Keys of removed vertices never match again.
    pub struct VertexId;
}

/// The two extremal vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pole {
    /// Source of the orientation, tail of the root edge.
    Left,
    /// Sink of the orientation, head of the root edge.
    Right,
}

impl Pole {
    pub fn opposite(self) -> Self {
        match self {
            Pole::Left => Pole::Right,
            Pole::Right => Pole::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Vertex {
    pub pole: Option<Pole>,
}

impl Vertex {
    pub fn inner() -> Self {
        Self { pole: None }
    }

    pub fn pole(pole: Pole) -> Self {
        Self { pole: Some(pole) }
    }

    pub fn is_extremal(&self) -> bool {
        self.pole.is_some()
    }
}
