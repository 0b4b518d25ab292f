//! Loading indicator arc.

use super::{is_finite_point, is_length};
use crate::geometry::ARC_TOLERANCE;
use kurbo::{Arc, BezPath, Point, Shape, Vec2};
use std::f64::consts::PI;

/// Polar angle where the loading arc starts.
pub const LOADING_ARC_START: f64 = 0.0;
/// Angular length of the loading arc (30°).
pub const LOADING_ARC_SWEEP: f64 = PI / 6.0;

/// Short open arc of `radius` around `center`.
///
/// The spinning effect comes from rotating the layer, not from redrawing
/// this path.
pub fn loading_arc(center: Point, radius: f64) -> BezPath {
    if !is_length(radius) || !is_finite_point(center) {
        return BezPath::new();
    }
    Arc::new(
        center,
        Vec2::new(radius, radius),
        LOADING_ARC_START,
        LOADING_ARC_SWEEP,
        0.0,
    )
    .to_path(ARC_TOLERANCE)
}
