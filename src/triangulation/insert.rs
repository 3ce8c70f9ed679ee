// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Point insertion.
//!
//! A new vertex `n` is placed inside a face `(s, a, t)` and joined to its
//! three corners. The orientation of the three new edges is forced by the
//! color of the face:
//!
//! | face | new edges          | new faces                                   |
//! |------|--------------------|---------------------------------------------|
//! | RED  | `s→n, n→a, n→t`    | RED `(s,n,t)`, RED `(n,a,t)`, BLUE `(s,n,a)` |
//! | BLUE | `s→n, a→n, n→t`    | BLUE `(s,a,n)`, RED `(a,n,t)`, BLUE `(s,n,t)` |
//!
//! Each insertion adds one RED and one BLUE face, so the tableau gains a
//! column. The face `(s,n,t)` keeps the long side; when the target was an
//! outer face, that face is the new outer face.

use tracing::debug;

use crate::errors::EditError;
use crate::geometry::{Color, FaceId, VertexId};
use crate::triangulation::{Frame, Triangulation};

/// Result of a successful insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    pub vertex: VertexId,
    /// The face keeping the long side of the old face, then the other two.
    pub faces: [FaceId; 3],
}

impl Triangulation {
    /// Insert a new vertex inside `target`.
    ///
    /// Fails with [`EditError::InvalidTarget`] if `target` is not a current face.
    pub fn add_point(&mut self, target: FaceId) -> Result<Insertion, EditError> {
        if self.face(target).is_none() {
            return Err(EditError::InvalidTarget(target));
        }
        let frame = self.frame(target)?;
        let Frame {
            color,
            source: s,
            apex: a,
            sink: t,
            ports,
        } = frame;

        self.remove_face(target);
        let n = self.new_vertex();
        let faces = match color {
            Color::Red => {
                let [input, left, right] = ports;
                let sn = self.new_edge(s, n);
                let na = self.new_edge(n, a);
                let nt = self.new_edge(n, t);
                [
                    self.attach([s, t, n], [input, nt, sn]),
                    self.attach([n, t, a], [nt, right, na]),
                    self.attach([s, n, a], [sn, na, left]),
                ]
            }
            Color::Blue => {
                let [left, right, output] = ports;
                let sn = self.new_edge(s, n);
                let an = self.new_edge(a, n);
                let nt = self.new_edge(n, t);
                [
                    self.attach([s, n, t], [sn, nt, output]),
                    self.attach([s, a, n], [left, an, sn]),
                    self.attach([a, t, n], [right, nt, an]),
                ]
            }
        };
        debug!(?target, %color, vertex = ?n, "inserted point");
        Ok(Insertion { vertex: n, faces })
    }
}
