//! Polar coordinates and corner rounding.

use kurbo::{Arc, BezPath, Point, Vec2};
use std::f64::consts::{PI, TAU};

/// Accuracy used when converting circular arcs into cubic segments.
pub const ARC_TOLERANCE: f64 = 0.1;

/// Translate a polar coordinate into a cartesian point.
///
/// `translation` is added to the result, so passing a center point yields a
/// point on the circle of `radius` around that center.
pub fn to_cartesian(radius: f64, angle: f64, translation: Point) -> Point {
    Point::new(
        radius * angle.cos() + translation.x,
        radius * angle.sin() + translation.y,
    )
}

/// The points describing the play triangle.
///
/// Let the triangle be ABC, where A is the tip on the right, B the vertex at
/// the bottom and C the vertex at the top (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangleVertices {
    /// Midpoint of the side AB. The outline starts and ends here.
    pub midpoint: Point,
    /// Vertex at polar angle 0.
    pub a: Point,
    /// Vertex at polar angle 2π/3.
    pub b: Point,
    /// Vertex at polar angle 4π/3.
    pub c: Point,
}

impl TriangleVertices {
    /// Equilateral triangle inscribed in the circle of `radius` around `center`.
    pub fn around(center: Point, radius: f64) -> Self {
        let step = TAU / 3.0;
        let a = to_cartesian(radius, 0.0, center);
        let b = to_cartesian(radius, step, center);
        let c = to_cartesian(radius, 2.0 * step, center);
        Self {
            midpoint: a.midpoint(b),
            a,
            b,
            c,
        }
    }
}

/// Append a line plus a circular fillet at `corner` to `path`.
///
/// The fillet is tangent to the legs `previous -> corner` and
/// `corner -> next`. The tangent distance is clamped to half of the shorter
/// leg (the radius shrinks accordingly) so fillets on neighbouring corners
/// never overlap. Degenerate corners (empty legs, collinear legs or a
/// non-positive radius) become a straight line to `corner`.
///
/// Returns the point where the path now ends.
pub fn round_corner(
    path: &mut BezPath,
    previous: Point,
    corner: Point,
    next: Point,
    radius: f64,
) -> Point {
    let leg_in = previous - corner;
    let leg_out = next - corner;
    let len_in = leg_in.hypot();
    let len_out = leg_out.hypot();

    let usable = |value: f64| value.is_finite() && value > f64::EPSILON;
    if !usable(radius) || !usable(len_in) || !usable(len_out) {
        path.line_to(corner);
        return corner;
    }

    let dir_in = leg_in / len_in;
    let dir_out = leg_out / len_out;
    let theta = dir_in.dot(dir_out).clamp(-1.0, 1.0).acos();
    if theta < 1e-9 || PI - theta < 1e-9 {
        path.line_to(corner);
        return corner;
    }

    let half_tan = (theta / 2.0).tan();
    let distance = (radius / half_tan).min(len_in.min(len_out) / 2.0);
    let radius = distance * half_tan;

    let start = corner + dir_in * distance;
    let end = corner + dir_out * distance;
    let center = corner + (dir_in + dir_out).normalize() * (radius / (theta / 2.0).sin());

    let start_angle = (start - center).atan2();
    let sweep = shortest_sweep((end - center).atan2() - start_angle);

    path.line_to(start);
    let arc = Arc::new(center, Vec2::new(radius, radius), start_angle, sweep, 0.0);
    path.extend(arc.append_iter(ARC_TOLERANCE));
    end
}

/// Fold an angle difference into (-π, π].
fn shortest_sweep(mut sweep: f64) -> f64 {
    while sweep > PI {
        sweep -= TAU;
    }
    while sweep <= -PI {
        sweep += TAU;
    }
    sweep
}
