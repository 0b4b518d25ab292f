//! Drawable layers of the control.

use crate::animation::{Animated, Curve};
use crate::shapes::Symbol;
use kurbo::{Affine, BezPath, Rect, Stroke};
use peniko::Color;
use std::time::Duration;

/// The four layers, in paint order (later layers are drawn on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerKind {
    PlaySymbol,
    PauseSymbol,
    LoadingArc,
    BoundaryCircle,
}

impl LayerKind {
    pub const ALL: [LayerKind; 4] = [
        LayerKind::PlaySymbol,
        LayerKind::PauseSymbol,
        LayerKind::LoadingArc,
        LayerKind::BoundaryCircle,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            LayerKind::PlaySymbol => "play",
            LayerKind::PauseSymbol => "pause",
            LayerKind::LoadingArc => "loading",
            LayerKind::BoundaryCircle => "boundary",
        }
    }
}

/// One symbol layer: animated color, opacity and scale over fixed bounds.
///
/// Geometry is never stored; [`Layer::symbol`] regenerates it from the
/// current bounds on every call.
#[derive(Debug, Clone)]
pub struct Layer {
    kind: LayerKind,
    bounds: Rect,
    foreground: Animated<Color>,
    alpha: Animated<f64>,
    scale: Animated<f64>,
    rotation: f64,
    needs_display: bool,
}

impl Layer {
    /// Create an opaque black layer at scale 1.
    pub fn new(kind: LayerKind, bounds: Rect) -> Self {
        Self {
            kind,
            bounds,
            foreground: Animated::new(Color::BLACK),
            alpha: Animated::new(1.0),
            scale: Animated::new(1.0),
            rotation: 0.0,
            needs_display: true,
        }
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Current foreground color.
    pub fn foreground(&self) -> Color {
        self.foreground.value()
    }

    /// Current opacity in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha.value().clamp(0.0, 1.0)
    }

    /// Current uniform scale about the layer center.
    pub fn scale(&self) -> f64 {
        self.scale.value()
    }

    /// Current rotation about the layer center, in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn is_animating(&self) -> bool {
        self.foreground.is_animating() || self.alpha.is_animating() || self.scale.is_animating()
    }

    /// Whether the symbol must be regenerated since the last
    /// [`take_needs_display`](Self::take_needs_display).
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    pub fn take_needs_display(&mut self) -> bool {
        std::mem::take(&mut self.needs_display)
    }

    pub(crate) fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds != bounds {
            self.bounds = bounds;
            self.needs_display = true;
        }
    }

    pub(crate) fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    pub(crate) fn animate_alpha(&mut self, alpha: f64, now: Duration, duration: Duration, curve: Curve) {
        self.alpha.animate_to(alpha, now, duration, curve);
    }

    pub(crate) fn animate_foreground(&mut self, color: Color, now: Duration, duration: Duration, curve: Curve) {
        self.foreground.animate_to(color, now, duration, curve);
        self.needs_display = true;
    }

    pub(crate) fn animate_scale(&mut self, scale: f64, now: Duration, duration: Duration, curve: Curve) {
        self.scale.animate_to(scale, now, duration, curve);
    }

    /// Advance all animated properties to `now`.
    pub(crate) fn sample(&mut self, now: Duration) {
        if self.foreground.sample(now) {
            self.needs_display = true;
        }
        self.alpha.sample(now);
        self.scale.sample(now);
    }

    /// Transform applied when painting: scale, then rotation, both about
    /// the center of the bounds.
    pub fn transform(&self) -> Affine {
        let center = self.bounds.center().to_vec2();
        Affine::translate(center)
            * Affine::rotate(self.rotation)
            * Affine::scale(self.scale())
            * Affine::translate(-center)
    }

    /// Regenerate this layer's symbol for the current bounds.
    pub fn symbol(&self) -> Symbol {
        Symbol::for_layer(self.kind, self.bounds)
    }

    /// Paint description for the current frame, or `None` when fully
    /// transparent.
    pub fn paint(&self) -> Option<LayerPaint> {
        let alpha = self.alpha();
        if alpha <= 0.0 {
            return None;
        }
        let Symbol {
            path,
            stroke,
            filled,
        } = self.symbol();
        let color = self.foreground().multiply_alpha(alpha as f32);
        Some(LayerPaint {
            kind: self.kind,
            path,
            stroke,
            stroke_color: color,
            fill_color: filled.then_some(color),
            transform: self.transform(),
        })
    }

    /// Comparable view of the layer's live properties.
    pub fn snapshot(&self) -> LayerSnapshot {
        LayerSnapshot {
            kind: self.kind,
            alpha: self.alpha(),
            color: self.foreground().components,
            scale: self.scale(),
        }
    }
}

/// Everything a renderer needs to draw one layer.
#[derive(Debug, Clone)]
pub struct LayerPaint {
    pub kind: LayerKind,
    /// Path in layer coordinates; apply `transform` before drawing.
    pub path: BezPath,
    pub stroke: Stroke,
    /// Stroke color with the layer's opacity applied.
    pub stroke_color: Color,
    /// Fill color with opacity applied, for filled symbols.
    pub fill_color: Option<Color>,
    pub transform: Affine,
}

/// Live properties of a layer at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerSnapshot {
    pub kind: LayerKind,
    pub alpha: f64,
    /// Foreground color components (sRGB, straight alpha).
    pub color: [f32; 4],
    pub scale: f64,
}
