// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rooted bipolar triangulations of the sphere.
//!
//! The structure owns three slot maps (vertices, edges, faces) and the key of
//! the root edge. Everything else is derived:
//!
//! - the two *poles* are the tail and head of the root edge;
//! - the two *outer* faces are the consumer (RED, "top") and the producer
//!   (BLUE, "bottom") of the root edge, the root being the one edge that
//!   passes through infinity;
//! - the color and ports of a face come from its [`Frame`].
//!
//! Mutations live in submodules: [`insert`] (point insertion), [`flip`] (edge
//! flips), plus the orientation reversal used by the Schützenberger
//! involution. [`validation`] checks the full invariant set, [`canonical`]
//! computes isomorphism codes and [`reconstruct`] inverts the tableau bijection.

pub mod canonical;
pub mod flip;
pub mod insert;
pub mod reconstruct;
pub mod validation;

pub use canonical::CanonicalForm;
pub use flip::{EdgeKind, FlipDirection};

use slotmap::SlotMap;
use tracing::debug;

use crate::errors::{ConsistencyError, EditError, Element};
use crate::geometry::{Color, Edge, EdgeId, Face, FaceId, Pole, Port, Vertex, VertexId};

/// The source, apex and sink of a face together with its ports.
///
/// A BLUE face reads `(source, apex, sink)` in rotation order, a RED face
/// reads `(source, sink, apex)`. `ports` is indexed by [`Port::slot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub color: Color,
    pub source: VertexId,
    pub apex: VertexId,
    pub sink: VertexId,
    pub ports: [EdgeId; 3],
}

impl Frame {
    /// Edge attached to `port`, or `None` if the port belongs to the other color.
    pub fn edge(&self, port: Port) -> Option<EdgeId> {
        (port.color() == self.color).then(|| self.ports[port.slot()])
    }

    /// Port at which `edge` is attached.
    pub fn port(&self, edge: EdgeId) -> Option<Port> {
        let slot = self.ports.iter().position(|&e| e == edge)?;
        Some(Port::of(self.color)[slot])
    }
}

#[derive(Debug, Clone)]
pub struct Triangulation {
    vertices: SlotMap<VertexId, Vertex>,
    edges: SlotMap<EdgeId, Edge>,
    faces: SlotMap<FaceId, Face>,
    root: EdgeId,
}

impl Default for Triangulation {
    fn default() -> Self {
        Self::new()
    }
}

impl Triangulation {
    /// The minimal triangulation: poles `L`, `R`, one inner vertex `C`, the
    /// root `L→R`, edges `L→C` and `C→R`, and two faces on those three edges.
    pub fn new() -> Self {
        let mut vertices = SlotMap::with_key();
        let left = vertices.insert(Vertex::pole(Pole::Left));
        let right = vertices.insert(Vertex::pole(Pole::Right));
        let center = vertices.insert(Vertex::inner());

        let mut triangulation = Self {
            vertices,
            edges: SlotMap::with_key(),
            faces: SlotMap::with_key(),
            root: EdgeId::default(),
        };
        let root = triangulation.new_edge(left, right);
        let lc = triangulation.new_edge(left, center);
        let cr = triangulation.new_edge(center, right);
        triangulation.root = root;
        triangulation.attach([left, right, center], [root, cr, lc]);
        triangulation.attach([left, center, right], [lc, cr, root]);
        triangulation
    }

    /// Replace the whole state with the minimal triangulation.
    pub fn reset(&mut self) {
        debug!("resetting triangulation");
        *self = Self::new();
    }

    /// Assemble a triangulation from raw parts. Used by the tableau inverse.
    pub(crate) fn from_parts(
        vertices: SlotMap<VertexId, Vertex>,
        edges: SlotMap<EdgeId, Edge>,
        faces: SlotMap<FaceId, Face>,
        root: EdgeId,
    ) -> Self {
        Self {
            vertices,
            edges,
            faces,
            root,
        }
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex)> {
        self.vertices.iter()
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.edges.iter()
    }

    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of columns of the matching tableau: half the number of faces.
    pub fn size(&self) -> usize {
        self.faces.len() / 2
    }

    pub fn root(&self) -> EdgeId {
        self.root
    }

    pub fn pole(&self, pole: Pole) -> Result<VertexId, ConsistencyError> {
        let root = self.edge_ref(self.root)?;
        Ok(match pole {
            Pole::Left => root.tail,
            Pole::Right => root.head,
        })
    }

    /// The RED face consuming the root edge.
    pub fn top_face(&self) -> Result<FaceId, ConsistencyError> {
        Ok(self.edge_ref(self.root)?.consumer)
    }

    /// The BLUE face producing the root edge.
    pub fn bottom_face(&self) -> Result<FaceId, ConsistencyError> {
        Ok(self.edge_ref(self.root)?.producer)
    }

    pub fn is_outer(&self, face: FaceId) -> bool {
        self.edges
            .get(self.root)
            .is_some_and(|root| root.consumer == face || root.producer == face)
    }

    pub fn is_extremal(&self, vertex: VertexId) -> bool {
        self.vertices.get(vertex).is_some_and(Vertex::is_extremal)
    }

    /// Faces having `vertex` as a corner.
    pub fn faces_around(&self, vertex: VertexId) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces.iter().filter(move |(_, face)| face.has_corner(vertex))
    }

    pub fn color(&self, face: FaceId) -> Result<Color, ConsistencyError> {
        Ok(self.frame(face)?.color)
    }

    /// Read the frame of a face off the orientation of its sides.
    pub fn frame(&self, id: FaceId) -> Result<Frame, ConsistencyError> {
        let face = self.face_ref(id)?;
        let mut forward = [false; 3];
        for (i, &side) in face.sides.iter().enumerate() {
            forward[i] = self.edge_ref(side)?.consumer == id;
        }
        let count = forward.iter().filter(|&&f| f).count();
        let bad_frame = ConsistencyError::FaceFrame {
            face: id,
            forward: count,
        };
        match count {
            // Sides s→a and a→t forwards, t→s backwards.
            n if n == Color::Blue.inputs() => {
                let backward = forward.iter().position(|&f| !f).ok_or(bad_frame)?;
                let i = (backward + 1) % 3;
                Ok(Frame {
                    color: Color::Blue,
                    source: face.corner(i),
                    apex: face.corner(i + 1),
                    sink: face.corner(i + 2),
                    ports: [face.side(i), face.side(i + 1), face.side(i + 2)],
                })
            }
            // Side s→t forwards, t→a and a→s backwards.
            n if n == Color::Red.inputs() => {
                let i = forward.iter().position(|&f| f).ok_or(bad_frame)?;
                Ok(Frame {
                    color: Color::Red,
                    source: face.corner(i),
                    apex: face.corner(i + 2),
                    sink: face.corner(i + 1),
                    ports: [face.side(i), face.side(i + 2), face.side(i + 1)],
                })
            }
            _ => Err(bad_frame),
        }
    }

    /// Port at which `face` holds `edge`.
    pub fn port_of(&self, edge: EdgeId, face: FaceId) -> Result<Port, ConsistencyError> {
        self.frame(face)?
            .port(edge)
            .ok_or(ConsistencyError::Incidence { edge, face })
    }

    /// Check that `edge` exists, as a user-facing lookup.
    pub fn find_edge(&self, edge: EdgeId) -> Result<&Edge, EditError> {
        self.edges
            .get(edge)
            .ok_or(EditError::NotFound(Element::Edge(edge)))
    }

    /// Check that `vertex` exists, as a user-facing lookup.
    pub fn find_vertex(&self, vertex: VertexId) -> Result<&Vertex, EditError> {
        self.vertices
            .get(vertex)
            .ok_or(EditError::NotFound(Element::Vertex(vertex)))
    }

    /// Reverse every edge and exchange the poles.
    ///
    /// Face rotations are kept, so every face changes color and every port
    /// becomes its [`Port::mirror`].
    pub(crate) fn reverse_orientation(&mut self) {
        debug!(edges = self.edges.len(), "reversing orientation");
        for edge in self.edges.values_mut() {
            *edge = edge.reversed();
        }
        for vertex in self.vertices.values_mut() {
            vertex.pole = vertex.pole.map(Pole::opposite);
        }
    }

    pub(crate) fn edge_ref(&self, id: EdgeId) -> Result<&Edge, ConsistencyError> {
        self.edges
            .get(id)
            .ok_or(ConsistencyError::Dangling(Element::Edge(id)))
    }

    pub(crate) fn face_ref(&self, id: FaceId) -> Result<&Face, ConsistencyError> {
        self.faces
            .get(id)
            .ok_or(ConsistencyError::Dangling(Element::Face(id)))
    }

    pub(crate) fn new_vertex(&mut self) -> VertexId {
        self.vertices.insert(Vertex::inner())
    }

    pub(crate) fn new_edge(&mut self, tail: VertexId, head: VertexId) -> EdgeId {
        self.edges.insert(Edge::detached(tail, head))
    }

    /// Insert a face and register it with its sides.
    ///
    /// A side read from `corners[i]` to `corners[i + 1]` along its own
    /// orientation makes the new face its consumer; otherwise its producer.
    pub(crate) fn attach(&mut self, corners: [VertexId; 3], sides: [EdgeId; 3]) -> FaceId {
        let id = self.faces.insert(Face::new(corners, sides));
        for (i, &side) in sides.iter().enumerate() {
            if let Some(edge) = self.edges.get_mut(side) {
                if edge.tail == corners[i] && edge.head == corners[(i + 1) % 3] {
                    edge.consumer = id;
                } else {
                    edge.producer = id;
                }
            }
        }
        id
    }

    pub(crate) fn remove_face(&mut self, id: FaceId) -> Option<Face> {
        self.faces.remove(id)
    }

    pub(crate) fn remove_edge(&mut self, id: EdgeId) -> Option<Edge> {
        self.edges.remove(id)
    }
}
