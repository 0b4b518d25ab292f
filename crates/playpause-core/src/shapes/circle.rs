//! Boundary circle around the symbol.

use super::is_length;
use crate::geometry::ARC_TOLERANCE;
use kurbo::{BezPath, Ellipse, Rect, Shape};

/// Full ellipse inscribed in `rect`.
pub fn boundary_circle(rect: Rect) -> BezPath {
    let rect = rect.abs();
    if !is_length(rect.width()) || !is_length(rect.height()) {
        return BezPath::new();
    }
    Ellipse::from_rect(rect).to_path(ARC_TOLERANCE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_fits_rect() {
        let rect = Rect::new(5.0, 5.0, 95.0, 95.0);
        let bbox = boundary_circle(rect).bounding_box();
        assert!((bbox.x0 - 5.0).abs() < ARC_TOLERANCE);
        assert!((bbox.y0 - 5.0).abs() < ARC_TOLERANCE);
        assert!((bbox.x1 - 95.0).abs() < ARC_TOLERANCE);
        assert!((bbox.y1 - 95.0).abs() < ARC_TOLERANCE);
    }

    #[test]
    fn test_circle_empty_rect() {
        assert!(boundary_circle(Rect::new(10.0, 10.0, 10.0, 40.0)).elements().is_empty());
    }

    #[test]
    fn test_circle_flipped_rect_is_normalized() {
        let a = boundary_circle(Rect::new(0.0, 0.0, 20.0, 20.0));
        let b = boundary_circle(Rect::new(20.0, 20.0, 0.0, 0.0));
        assert_eq!(a.elements(), b.elements());
    }
}
