// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rooted bipolar sphere triangulations, their product-coproduct prographs
//! and rectangular 3-row standard Young tableaux.
//!
//! The three structures are in bijection. This crate keeps the three views of
//! one object in step while it is edited: points are inserted, moved, edges
//! flipped up or down, and the Schützenberger involution is applied.
//!
//! # Architecture
//!
//! The implementation separates one primary structure from two derived ones:
//!
//! ## Primary: the triangulation
//!
//! [`Triangulation`] owns vertices, directed edges and triangular faces in
//! slot maps. Each face lists its corners in rotation order and is colored by
//! its edge directions: RED faces have one forward side, BLUE faces two.
//! Every mutation (point insertion, flip, reversal) acts here.
//!
//! ## Derived: prograph and tableau
//!
//! - [`PcProgram`] is the planar dual: one product node per BLUE face, one
//!   coproduct node per RED face, one wire per edge.
//! - [`Tableau`] is read off the prograph by a depth-first traversal from the
//!   root wire. Each wire is labelled, and its row is fixed by the port it
//!   enters.
//!
//! Both are rebuilt from scratch after each committed edit, never patched.
//! [`Triangulation::from_tableau`] inverts the traversal.
//!
//! ## Editing
//!
//! [`Editor`] holds the committed state, the [`Layout`] of point positions and
//! an armed-tool [`Selection`]. Each command runs on a scratch copy and either
//! commits every representation or none of them.

pub mod editor;
pub mod errors;
pub mod geometry;
pub mod layout;
pub mod prograph;
pub mod symmetry;
pub mod tableau;
pub mod triangulation;

// Re-export commonly used types
pub use editor::{Editor, EditorConfig, Selection, Statistics};
pub use errors::{ConsistencyError, EditError, ErrorKind, TableauError};
pub use layout::Layout;
pub use prograph::PcProgram;
pub use tableau::{LabelledTableau, Tableau, TableauBuilder};
pub use triangulation::{FlipDirection, Triangulation};
