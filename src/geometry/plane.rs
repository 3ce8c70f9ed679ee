// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Planar predicates used to validate point moves and to hit-test faces.

use kurbo::Point;

/// Radius of the disc the drawing lives in. The poles sit on its boundary.
pub const RADIUS: f64 = 1.0;

/// Twice the signed area of the triangle `a b c`.
///
/// Positive when the corners are listed in rotation order.
pub fn orientation(a: Point, b: Point, c: Point) -> f64 {
    (b - a).cross(c - a)
}

/// True when `p` lies in the closed triangle `corners`, whatever its orientation.
pub fn triangle_contains(corners: [Point; 3], p: Point) -> bool {
    let [a, b, c] = corners;
    let d1 = orientation(a, b, p);
    let d2 = orientation(b, c, p);
    let d3 = orientation(c, a, p);
    let has_negative = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_positive = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_negative && has_positive)
}

/// True when `p` lies strictly inside the drawing disc.
pub fn inside_disc(p: Point) -> bool {
    p.to_vec2().hypot() < RADIUS
}

/// Point of the disc boundary straight above (`upward`) or below `p`.
pub fn arc_point(p: Point, upward: bool) -> Point {
    let y = (RADIUS * RADIUS - p.x * p.x).max(0.0).sqrt();
    Point::new(p.x, if upward { -y } else { y })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_sign() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(1.0, 0.0);
        let c = Point::new(0.0, 1.0);
        assert!(orientation(a, b, c) > 0.0);
        assert!(orientation(a, c, b) < 0.0);
        assert_eq!(orientation(a, b, Point::new(2.0, 0.0)), 0.0);
    }

    #[test]
    fn test_triangle_contains() {
        let corners = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
        ];
        assert!(triangle_contains(corners, Point::new(0.2, 0.2)));
        assert!(triangle_contains(
            [corners[0], corners[2], corners[1]],
            Point::new(0.2, 0.2)
        ));
        assert!(!triangle_contains(corners, Point::new(0.8, 0.8)));
    }

    #[test]
    fn test_disc() {
        assert!(inside_disc(Point::new(0.5, -0.5)));
        assert!(!inside_disc(Point::new(1.0, 0.0)));
        let top = arc_point(Point::new(0.0, 0.3), true);
        assert_eq!(top, Point::new(0.0, -1.0));
    }
}
