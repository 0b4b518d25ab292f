//! Symbol geometry for the control's layers.
//!
//! Every generator is a pure function of its inputs and is re-run on each
//! redraw, so nothing here caches geometry. Non-finite or non-positive sizes
//! produce an empty path instead of failing.

mod circle;
mod loading;
mod pause;
mod play;

pub use circle::boundary_circle;
pub use loading::loading_arc;
pub use pause::pause_bars;
pub use play::play_triangle;

use crate::layer::LayerKind;
use kurbo::{BezPath, Cap, Point, Rect, Stroke};

/// Stroke width of the play triangle outline.
pub const PLAY_STROKE_WIDTH: f64 = 1.0;

/// A layer's path together with how it should be painted.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// Outline of the symbol in layer coordinates.
    pub path: BezPath,
    /// Stroke parameters (width and caps).
    pub stroke: Stroke,
    /// Whether the interior is filled with the foreground color as well.
    pub filled: bool,
}

impl Symbol {
    /// Build the symbol for a layer kind drawn inside `bounds`.
    pub fn for_layer(kind: LayerKind, bounds: Rect) -> Self {
        let bounds = bounds.abs();
        let center = bounds.center();
        let (width, height) = (bounds.width(), bounds.height());

        match kind {
            LayerKind::PlaySymbol => {
                let common = height * 0.8;
                Self {
                    path: play_triangle(center, common * 0.37, common * 0.05),
                    stroke: Stroke::new(PLAY_STROKE_WIDTH),
                    filled: true,
                }
            }
            LayerKind::PauseSymbol => Self {
                path: pause_bars(center, height / 2.3, width / 4.0),
                stroke: round_stroke(width * 0.15),
                filled: false,
            },
            LayerKind::LoadingArc => Self {
                path: loading_arc(center, width * 0.45),
                stroke: round_stroke(width * 0.1),
                filled: false,
            },
            LayerKind::BoundaryCircle => {
                let circle = Rect::from_center_size(center, bounds.size() * 0.9);
                Self {
                    path: boundary_circle(circle),
                    stroke: round_stroke(width * 0.1),
                    filled: false,
                }
            }
        }
    }
}

fn round_stroke(width: f64) -> Stroke {
    let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
    Stroke::new(width).with_caps(Cap::Round)
}

/// True when `value` can be used as a length.
pub(crate) fn is_length(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

pub(crate) fn is_finite_point(point: Point) -> bool {
    point.x.is_finite() && point.y.is_finite()
}
