//! Pause bars.

use super::{is_finite_point, is_length};
use kurbo::{BezPath, Point};

/// Two vertical bars of `height`, `delta` apart, centered on `center`.
///
/// Each bar is its own subpath; the caller strokes them with round caps.
pub fn pause_bars(center: Point, height: f64, delta: f64) -> BezPath {
    let mut path = BezPath::new();
    if !is_length(height) || !delta.is_finite() || !is_finite_point(center) {
        return path;
    }

    let half_height = height / 2.0;
    for x in [center.x - delta / 2.0, center.x + delta / 2.0] {
        path.move_to(Point::new(x, center.y - half_height));
        path.line_to(Point::new(x, center.y + half_height));
    }
    path
}
