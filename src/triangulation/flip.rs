// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Edge flips.
//!
//! The kind of an edge is the pair (producer port, consumer port). It decides
//! whether the edge can be flipped and in which direction:
//!
//! | kind                           | down | up  |
//! |--------------------------------|------|-----|
//! | `Output → LeftInput`           | yes  |     |
//! | `RightOutput → Input`          | yes  |     |
//! | `LeftOutput → RightInput`      | yes  |     |
//! | `Output → Input`               | yes  | yes |
//! | `Output → RightInput`          |      | yes |
//! | `LeftOutput → Input`           |      | yes |
//! | `RightOutput → LeftInput`      |      | yes |
//! | `LeftOutput → LeftInput`       |      |     |
//! | `RightOutput → RightInput`     |      |     |
//!
//! The root edge is never flippable. Flipping an edge down moves the tableau
//! down the flip order, towards the tableau filled row by row; each down flip
//! yields an edge that flips up again to the previous triangulation.
//!
//! For an edge `u→v` whose producer has third corner `x` and whose consumer
//! has third corner `y`, the flip removes `u→v` and adds a diagonal between
//! `x` and `y`. The two kinds that admit both directions are exactly those
//! where `x` and `y` are incomparable, and the direction picks the orientation
//! of the new diagonal.

use strum_macros::{Display, EnumIter};
use tracing::debug;

use crate::errors::{ConsistencyError, EditError};
use crate::geometry::{EdgeId, Port};
use crate::triangulation::Triangulation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum FlipDirection {
    Up,
    Down,
}

impl FlipDirection {
    pub fn opposite(self) -> Self {
        match self {
            FlipDirection::Up => FlipDirection::Down,
            FlipDirection::Down => FlipDirection::Up,
        }
    }
}

/// Producer and consumer ports of an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKind {
    pub from: Port,
    pub to: Port,
}

const DOWN: [(Port, Port); 4] = [
    (Port::Output, Port::LeftInput),
    (Port::RightOutput, Port::Input),
    (Port::LeftOutput, Port::RightInput),
    (Port::Output, Port::Input),
];

const UP: [(Port, Port); 4] = [
    (Port::Output, Port::RightInput),
    (Port::LeftOutput, Port::Input),
    (Port::Output, Port::Input),
    (Port::RightOutput, Port::LeftInput),
];

impl EdgeKind {
    pub fn new(from: Port, to: Port) -> Self {
        Self { from, to }
    }

    /// Whether an edge of this kind, other than the root, flips in `direction`.
    pub fn allows(self, direction: FlipDirection) -> bool {
        let table = match direction {
            FlipDirection::Down => &DOWN,
            FlipDirection::Up => &UP,
        };
        table.contains(&(self.from, self.to))
    }

    /// True when the new diagonal runs from the producer's third corner to the
    /// consumer's, false when it runs the other way.
    fn diagonal_from_producer(self, direction: FlipDirection) -> bool {
        matches!(
            (direction, self.from, self.to),
            (FlipDirection::Down, Port::Output, Port::LeftInput)
                | (FlipDirection::Down, Port::RightOutput, Port::Input)
                | (FlipDirection::Up, Port::RightOutput, Port::LeftInput)
                | (FlipDirection::Up, Port::Output, Port::Input)
        )
    }
}

impl Triangulation {
    pub fn edge_kind(&self, edge: EdgeId) -> Result<EdgeKind, EditError> {
        let e = *self.find_edge(edge)?;
        let from = self.port_of(edge, e.producer)?;
        let to = self.port_of(edge, e.consumer)?;
        Ok(EdgeKind::new(from, to))
    }

    pub fn flippable(&self, edge: EdgeId, direction: FlipDirection) -> Result<bool, EditError> {
        let kind = self.edge_kind(edge)?;
        Ok(edge != self.root() && kind.allows(direction))
    }

    /// Edges currently flippable in `direction`.
    pub fn flippable_edges(&self, direction: FlipDirection) -> Vec<EdgeId> {
        self.edges()
            .map(|(id, _)| id)
            .filter(|&id| self.flippable(id, direction).unwrap_or(false))
            .collect()
    }

    /// Replace `edge` by the other diagonal of the quadrilateral formed by its
    /// two faces, returning the new diagonal.
    ///
    /// Fails with [`EditError::NotFlippable`] without touching the structure
    /// when the edge does not flip in `direction`.
    pub fn flip(&mut self, edge: EdgeId, direction: FlipDirection) -> Result<EdgeId, EditError> {
        let kind = self.edge_kind(edge)?;
        if edge == self.root() || !kind.allows(direction) {
            return Err(EditError::NotFlippable { edge, direction });
        }
        let e = *self.edge_ref(edge)?;
        let (u, v) = (e.tail, e.head);

        // The producer walks the edge backwards: corners v, u, x.
        let producer = *self.face_ref(e.producer)?;
        let i = producer
            .side_index(edge)
            .ok_or(ConsistencyError::Incidence {
                edge,
                face: e.producer,
            })?;
        // The consumer walks it forwards: corners u, v, y.
        let consumer = *self.face_ref(e.consumer)?;
        let j = consumer
            .side_index(edge)
            .ok_or(ConsistencyError::Incidence {
                edge,
                face: e.consumer,
            })?;
        if producer.corner(i) != v || producer.corner(i + 1) != u {
            return Err(ConsistencyError::Incidence {
                edge,
                face: e.producer,
            }
            .into());
        }
        if consumer.corner(j) != u || consumer.corner(j + 1) != v {
            return Err(ConsistencyError::Incidence {
                edge,
                face: e.consumer,
            }
            .into());
        }
        let x = producer.corner(i + 2);
        let y = consumer.corner(j + 2);
        if x == y {
            return Err(EditError::NotFlippable { edge, direction });
        }
        let (ux, xv) = (producer.side(i + 1), producer.side(i + 2));
        let (vy, yu) = (consumer.side(j + 1), consumer.side(j + 2));

        self.remove_face(e.producer);
        self.remove_face(e.consumer);
        self.remove_edge(edge);
        let diagonal = if kind.diagonal_from_producer(direction) {
            self.new_edge(x, y)
        } else {
            self.new_edge(y, x)
        };
        self.attach([u, x, y], [ux, diagonal, yu]);
        self.attach([x, v, y], [xv, vy, diagonal]);
        debug!(?edge, ?diagonal, %direction, ?kind, "flipped edge");
        Ok(diagonal)
    }
}
