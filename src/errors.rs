// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error taxonomy for the editing engine.
//!
//! Failures fall into two families that callers must be able to tell apart:
//!
//! - [`EditError`] user-input variants: recoverable, the state is left exactly
//!   as it was and the editor turns them into a status message.
//! - [`ConsistencyError`]: an invariant of the engine itself is broken. These
//!   abort the operation in progress and leave the last committed state intact.

use std::fmt;

use strum_macros::{EnumCount as EnumCountMacro, IntoStaticStr};
use thiserror::Error;

use crate::geometry::{EdgeId, FaceId, VertexId};
use crate::triangulation::FlipDirection;

/// A reference to some element of the current structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Vertex(VertexId),
    Edge(EdgeId),
    Face(FaceId),
    /// An edge referenced by its tableau label.
    Label(usize),
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Vertex(v) => write!(f, "vertex {:?}", v),
            Element::Edge(e) => write!(f, "edge {:?}", e),
            Element::Face(face) => write!(f, "face {:?}", face),
            Element::Label(label) => write!(f, "edge label {}", label),
        }
    }
}

/// Failure of an editor command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("face {0:?} no longer exists and cannot receive a new point")]
    InvalidTarget(FaceId),

    #[error("{0} does not exist in the current triangulation")]
    NotFound(Element),

    #[error("the extremal vertex {0:?} cannot be moved")]
    ForbiddenMove(VertexId),

    #[error("moving vertex {vertex:?} there would make its edges cross")]
    PlanarityViolation {
        vertex: VertexId,
        face: Option<FaceId>,
    },

    #[error("edge {edge:?} cannot be flipped {direction}")]
    NotFlippable {
        edge: EdgeId,
        direction: FlipDirection,
    },

    #[error("no {0} is selected")]
    NoSelection(&'static str),

    #[error("finish or cancel the current {0} first")]
    Busy(&'static str),

    #[error("internal consistency failure: {0}")]
    Inconsistent(#[from] ConsistencyError),
}

impl EditError {
    /// True for the recoverable, user-caused failures.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, EditError::Inconsistent(_))
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::InvalidTarget(_) => ErrorKind::InvalidTarget,
            EditError::NotFound(_) => ErrorKind::NotFound,
            EditError::ForbiddenMove(_) => ErrorKind::ForbiddenMove,
            EditError::PlanarityViolation { .. } => ErrorKind::PlanarityViolation,
            EditError::NotFlippable { .. } => ErrorKind::NotFlippable,
            EditError::NoSelection(_) => ErrorKind::NoSelection,
            EditError::Busy(_) => ErrorKind::Busy,
            EditError::Inconsistent(_) => ErrorKind::Inconsistent,
        }
    }
}

/// Fieldless mirror of [`EditError`], used to index rejection counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, IntoStaticStr)]
#[repr(u8)]
pub enum ErrorKind {
    InvalidTarget,
    NotFound,
    ForbiddenMove,
    PlanarityViolation,
    NotFlippable,
    NoSelection,
    Busy,
    Inconsistent,
}

/// A broken engine invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConsistencyError {
    #[error("{0} is referenced but missing")]
    Dangling(Element),

    #[error("face {face:?} is not a transitive triangle ({forward} sides traversed forwards)")]
    FaceFrame { face: FaceId, forward: usize },

    #[error("edge {edge:?} and face {face:?} disagree about their incidence")]
    Incidence { edge: EdgeId, face: FaceId },

    #[error("edge {0:?} would become a loop")]
    Loop(EdgeId),

    #[error("the orientation contains a directed cycle")]
    DirectedCycle,

    #[error("vertex {0:?} breaks the bipolar orientation")]
    Bipolarity(VertexId),

    #[error("the root edge does not join the two extremal vertices")]
    Root,

    #[error("{red} red faces against {blue} blue faces")]
    ColorImbalance { red: usize, blue: usize },

    #[error("euler characteristic is {0}, expected 2")]
    Euler(i64),

    #[error("dual node of face {face:?} has degree {degree}, expected 3")]
    DualDegree { face: FaceId, degree: usize },

    #[error("traversal failed: {0}")]
    Traversal(&'static str),

    #[error(transparent)]
    Tableau(#[from] TableauError),

    #[error("the {0} disagree after the involution")]
    Involution(&'static str),
}

/// Reasons for rejecting an array as a rectangular 3-row standard tableau.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableauError {
    #[error("rows have lengths {0:?}, a rectangular tableau needs three equal rows")]
    Shape([usize; 3]),

    #[error("cells do not use each of 1..={0} exactly once")]
    Labels(usize),

    #[error("row {row} is not increasing at column {column}")]
    Row { row: usize, column: usize },

    #[error("column {column} is not increasing at row {row}")]
    Column { row: usize, column: usize },
}
