// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Combinatorial building blocks of the triangulation.
//!
//! - Color: RED or BLUE faces
//! - Port: the role a side plays for its face
//! - Vertex, Edge, Face: slot-map keyed elements
//! - plane: orientation predicates on layout points

pub mod color;
pub mod edge;
pub mod face;
pub mod plane;
pub mod port;
pub mod vertex;

pub use color::Color;
pub use edge::{Edge, EdgeId};
pub use face::{Face, FaceId};
pub use port::Port;
pub use vertex::{Pole, Vertex, VertexId};
