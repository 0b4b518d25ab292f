//! Play triangle with filleted corners.

use super::{is_finite_point, is_length};
use crate::geometry::{TriangleVertices, round_corner};
use kurbo::{BezPath, Point};

/// Build the play symbol inscribed in the circle of `radius` around `center`.
///
/// The outline starts at the midpoint of side AB, goes around B, C and A
/// with fillets of `corner_radius` and closes back at the midpoint.
pub fn play_triangle(center: Point, radius: f64, corner_radius: f64) -> BezPath {
    let mut path = BezPath::new();
    if !is_length(radius) || !is_finite_point(center) {
        return path;
    }

    let v = TriangleVertices::around(center, radius);
    path.move_to(v.midpoint);
    round_corner(&mut path, v.midpoint, v.b, v.c, corner_radius);
    round_corner(&mut path, v.b, v.c, v.a, corner_radius);
    round_corner(&mut path, v.c, v.a, v.midpoint, corner_radius);
    path.close_path();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{PathEl, Shape};

    #[test]
    fn test_play_is_deterministic() {
        let a = play_triangle(Point::new(50.0, 50.0), 29.6, 4.0);
        let b = play_triangle(Point::new(50.0, 50.0), 29.6, 4.0);
        assert_eq!(a.elements(), b.elements());
    }

    #[test]
    fn test_play_starts_at_midpoint_and_closes() {
        let center = Point::new(50.0, 50.0);
        let path = play_triangle(center, 30.0, 3.0);
        let v = TriangleVertices::around(center, 30.0);
        assert_eq!(path.elements()[0], PathEl::MoveTo(v.midpoint));
        assert_eq!(path.elements().last(), Some(&PathEl::ClosePath));
    }

    #[test]
    fn test_play_stays_inside_triangle_bounds() {
        let center = Point::new(50.0, 50.0);
        let path = play_triangle(center, 30.0, 3.0);
        let bbox = path.bounding_box();
        // Fillets pull the outline inwards from the sharp vertices.
        assert!(bbox.x1 < 80.0);
        assert!(bbox.x0 >= 35.0 - 1e-9);
        assert!(bbox.y0 > 50.0 - 30.0 * (3.0f64).sqrt() / 2.0);
    }

    #[test]
    fn test_play_without_corner_radius_is_sharp() {
        let center = Point::ZERO;
        let path = play_triangle(center, 10.0, 0.0);
        let v = TriangleVertices::around(center, 10.0);
        assert_eq!(
            path.elements(),
            &[
                PathEl::MoveTo(v.midpoint),
                PathEl::LineTo(v.b),
                PathEl::LineTo(v.c),
                PathEl::LineTo(v.a),
                PathEl::ClosePath,
            ]
        );
    }

    #[test]
    fn test_play_oversized_corner_radius_stays_finite() {
        let path = play_triangle(Point::new(10.0, 10.0), 5.0, 500.0);
        let bbox = path.bounding_box();
        assert!(bbox.x0.is_finite() && bbox.x1.is_finite());
        assert!(bbox.width() <= 10.0);
    }

    #[test]
    fn test_play_degenerate_radius() {
        assert!(play_triangle(Point::ZERO, 0.0, 1.0).elements().is_empty());
        assert!(play_triangle(Point::ZERO, -3.0, 1.0).elements().is_empty());
        assert!(play_triangle(Point::ZERO, f64::NAN, 1.0).elements().is_empty());
    }
}
