// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Oriented edges.
//!
//! Edges point from the lower to the higher end of the bipolar orientation.
//! Each edge bounds exactly two faces: the one whose rotation traverses it from
//! tail to head (the *consumer*) and the one that traverses it from head to
//! tail (the *producer*). In the dual, the edge is a wire from the producer's
//! output port to the consumer's input port.
//!
//! Parallel edges between the same two vertices are allowed; edges are always
//! addressed by [`EdgeId`], never by their endpoints.

use slotmap::new_key_type;

use crate::geometry::{FaceId, VertexId};

new_key_type! {
    /// Stable identifier of an edge. A flip removes the old diagonal and
    /// inserts a new one, so stale identifiers are detected.
    pub struct EdgeId;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub tail: VertexId,
    pub head: VertexId,
    /// Face for which this edge is an output.
    pub producer: FaceId,
    /// Face for which this edge is an input.
    pub consumer: FaceId,
}

impl Edge {
    /// A fresh edge whose faces are filled in when it is attached.
    pub(crate) fn detached(tail: VertexId, head: VertexId) -> Self {
        Self {
            tail,
            head,
            producer: FaceId::default(),
            consumer: FaceId::default(),
        }
    }

    /// The face on the other side of `face`, if `face` bounds this edge.
    pub fn other_face(&self, face: FaceId) -> Option<FaceId> {
        if face == self.producer {
            Some(self.consumer)
        } else if face == self.consumer {
            Some(self.producer)
        } else {
            None
        }
    }

    /// Same edge with its orientation reversed: endpoints and faces swap roles.
    pub fn reversed(self) -> Self {
        Self {
            tail: self.head,
            head: self.tail,
            producer: self.consumer,
            consumer: self.producer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_reversed_swaps_everything() {
        let mut vertices: SlotMap<VertexId, ()> = SlotMap::with_key();
        let mut faces: SlotMap<FaceId, ()> = SlotMap::with_key();
        let (a, b) = (vertices.insert(()), vertices.insert(()));
        let (f, g) = (faces.insert(()), faces.insert(()));
        let edge = Edge {
            tail: a,
            head: b,
            producer: f,
            consumer: g,
        };
        let reversed = edge.reversed();
        assert_eq!((reversed.tail, reversed.head), (b, a));
        assert_eq!((reversed.producer, reversed.consumer), (g, f));
        assert_eq!(reversed.reversed(), edge);
        assert_eq!(edge.other_face(f), Some(g));
        assert_eq!(edge.other_face(FaceId::default()), None);
    }
}
