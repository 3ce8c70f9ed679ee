// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Vertex positions.
//!
//! Positions live in the unit disc with the canvas convention that y grows
//! downward. The poles sit on the boundary at `(-1, 0)` and `(1, 0)`; the top
//! (RED) outer face lies on the negative-y side and the bottom (BLUE) outer
//! face on the positive-y side. The triangulation never reads positions: they
//! are only used to place new points, hit-test faces and reject moves that
//! would fold an inner face over.

use kurbo::Point;
use slotmap::SecondaryMap;
use tracing::debug;

use crate::errors::{ConsistencyError, EditError, Element};
use crate::geometry::plane::{arc_point, inside_disc, orientation, triangle_contains, RADIUS};
use crate::geometry::{Color, FaceId, Pole, VertexId};
use crate::triangulation::Triangulation;

#[derive(Debug, Clone, Default)]
pub struct Layout {
    positions: SecondaryMap<VertexId, Point>,
}

impl Layout {
    /// Positions for the minimal triangulation: poles on the boundary, the
    /// inner vertex at the centre.
    pub fn minimal(triangulation: &Triangulation) -> Result<Self, ConsistencyError> {
        let mut layout = Layout::default();
        layout.place(triangulation.pole(Pole::Left)?, Point::new(-RADIUS, 0.0));
        layout.place(triangulation.pole(Pole::Right)?, Point::new(RADIUS, 0.0));
        for (vertex, v) in triangulation.vertices() {
            if !v.is_extremal() {
                layout.place(vertex, Point::ORIGIN);
            }
        }
        Ok(layout)
    }

    pub fn position(&self, vertex: VertexId) -> Option<Point> {
        self.positions.get(vertex).copied()
    }

    pub fn positions(&self) -> impl Iterator<Item = (VertexId, Point)> + '_ {
        self.positions.iter().map(|(vertex, &p)| (vertex, p))
    }

    pub fn place(&mut self, vertex: VertexId, point: Point) {
        self.positions.insert(vertex, point);
    }

    fn require(&self, vertex: VertexId) -> Result<Point, ConsistencyError> {
        self.position(vertex)
            .ok_or(ConsistencyError::Dangling(Element::Vertex(vertex)))
    }

    pub fn corners(
        &self,
        triangulation: &Triangulation,
        face: FaceId,
    ) -> Result<[Point; 3], ConsistencyError> {
        let f = triangulation
            .face(face)
            .ok_or(ConsistencyError::Dangling(Element::Face(face)))?;
        Ok([
            self.require(f.corners[0])?,
            self.require(f.corners[1])?,
            self.require(f.corners[2])?,
        ])
    }

    /// Where a point inserted into `face` goes: the centroid of an inner face,
    /// or halfway from the apex to the boundary arc for an outer face.
    pub fn insertion_point(
        &self,
        triangulation: &Triangulation,
        face: FaceId,
    ) -> Result<Point, ConsistencyError> {
        if triangulation.is_outer(face) {
            let frame = triangulation.frame(face)?;
            let apex = self.require(frame.apex)?;
            let upward = frame.color == Color::Red;
            Ok(apex.midpoint(arc_point(apex, upward)))
        } else {
            let [a, b, c] = self.corners(triangulation, face)?;
            Ok(Point::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0))
        }
    }

    /// Check that `vertex` may move to `point` without changing anything else.
    pub fn check_move(
        &self,
        triangulation: &Triangulation,
        vertex: VertexId,
        point: Point,
    ) -> Result<(), EditError> {
        if triangulation.find_vertex(vertex)?.is_extremal() {
            return Err(EditError::ForbiddenMove(vertex));
        }
        if !inside_disc(point) {
            return Err(EditError::PlanarityViolation { vertex, face: None });
        }
        for (id, face) in triangulation.faces_around(vertex) {
            if triangulation.is_outer(id) {
                continue;
            }
            let before = self.corners(triangulation, id)?;
            let mut after = before;
            for (i, &corner) in face.corners.iter().enumerate() {
                if corner == vertex {
                    after[i] = point;
                }
            }
            let [a, b, c] = before;
            let [x, y, z] = after;
            if orientation(a, b, c) > 0.0 && orientation(x, y, z) <= 0.0 {
                return Err(EditError::PlanarityViolation {
                    vertex,
                    face: Some(id),
                });
            }
        }
        Ok(())
    }

    pub fn move_point(
        &mut self,
        triangulation: &Triangulation,
        vertex: VertexId,
        point: Point,
    ) -> Result<(), EditError> {
        self.check_move(triangulation, vertex, point)?;
        debug!(?vertex, x = point.x, y = point.y, "moved point");
        self.place(vertex, point);
        Ok(())
    }

    /// The face under `point`: an inner face whose triangle contains it, or
    /// else the outer face on that side of the root.
    pub fn locate(
        &self,
        triangulation: &Triangulation,
        point: Point,
    ) -> Result<FaceId, ConsistencyError> {
        for (id, _) in triangulation.faces() {
            if triangulation.is_outer(id) {
                continue;
            }
            if triangle_contains(self.corners(triangulation, id)?, point) {
                return Ok(id);
            }
        }
        if point.y < 0.0 {
            triangulation.top_face()
        } else {
            triangulation.bottom_face()
        }
    }

    /// Turn the drawing upside down, matching the reversal of every edge.
    pub fn rotate_half_turn(&mut self) {
        for p in self.positions.values_mut() {
            *p = Point::new(-p.x, -p.y);
        }
    }

    /// Forget vertices that no longer exist.
    pub fn retain(&mut self, triangulation: &Triangulation) {
        self.positions
            .retain(|vertex, _| triangulation.vertex(vertex).is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grown() -> (Triangulation, Layout, VertexId) {
        let mut t = Triangulation::new();
        let mut layout = Layout::minimal(&t).unwrap();
        let top = t.top_face().unwrap();
        let point = layout.insertion_point(&t, top).unwrap();
        let insertion = t.add_point(top).unwrap();
        layout.place(insertion.vertex, point);
        (t, layout, insertion.vertex)
    }

    #[test]
    fn test_minimal_positions() {
        let t = Triangulation::new();
        let layout = Layout::minimal(&t).unwrap();
        let left = t.pole(Pole::Left).unwrap();
        assert_eq!(layout.position(left), Some(Point::new(-1.0, 0.0)));
        assert_eq!(layout.positions().count(), 3);
    }

    #[test]
    fn test_insertion_points() {
        let t = Triangulation::new();
        let layout = Layout::minimal(&t).unwrap();
        let top = layout.insertion_point(&t, t.top_face().unwrap()).unwrap();
        let bottom = layout.insertion_point(&t, t.bottom_face().unwrap()).unwrap();
        assert_eq!(top, Point::new(0.0, -0.5));
        assert_eq!(bottom, Point::new(0.0, 0.5));
    }

    #[test]
    fn test_inner_faces_are_positive() {
        let (t, layout, _) = grown();
        for (id, _) in t.faces() {
            if !t.is_outer(id) {
                let [a, b, c] = layout.corners(&t, id).unwrap();
                assert!(orientation(a, b, c) > 0.0);
            }
        }
    }

    #[test]
    fn test_move_checks() {
        let (t, layout, vertex) = grown();
        let left = t.pole(Pole::Left).unwrap();
        assert_eq!(
            layout.check_move(&t, left, Point::new(0.0, 0.1)),
            Err(EditError::ForbiddenMove(left))
        );
        assert_eq!(
            layout.check_move(&t, vertex, Point::new(0.0, -1.5)),
            Err(EditError::PlanarityViolation { vertex, face: None })
        );
        assert!(matches!(
            layout.check_move(&t, vertex, Point::new(0.0, 0.5)),
            Err(EditError::PlanarityViolation { face: Some(_), .. })
        ));
        assert_eq!(layout.check_move(&t, vertex, Point::new(0.1, -0.7)), Ok(()));
    }

    #[test]
    fn test_stale_vertex_is_not_found() {
        let (mut t, layout, vertex) = grown();
        t.reset();
        assert!(matches!(
            layout.check_move(&t, vertex, Point::new(0.0, -0.5)),
            Err(EditError::NotFound(_))
        ));
    }

    #[test]
    fn test_locate() {
        let (t, layout, _) = grown();
        let inner = layout.locate(&t, Point::new(0.1, -0.1)).unwrap();
        assert!(!t.is_outer(inner));
        assert_eq!(
            layout.locate(&t, Point::new(0.0, -0.9)).unwrap(),
            t.top_face().unwrap()
        );
        assert_eq!(
            layout.locate(&t, Point::new(0.0, 0.9)).unwrap(),
            t.bottom_face().unwrap()
        );
    }

    #[test]
    fn test_half_turn() {
        let (mut t, mut layout, vertex) = grown();
        t.reverse_orientation();
        layout.rotate_half_turn();
        assert_eq!(layout.position(vertex), Some(Point::new(0.0, 0.5)));
        let left = t.pole(Pole::Left).unwrap();
        assert_eq!(layout.position(left), Some(Point::new(-1.0, 0.0)));
    }
}
