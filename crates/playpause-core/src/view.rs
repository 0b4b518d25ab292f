//! The play button view: state machine plus animation orchestration.

use crate::animation::{Clock, Curve, Rotation, SystemClock};
use crate::config::ButtonConfig;
use crate::layer::{Layer, LayerKind, LayerPaint, LayerSnapshot};
use crate::state::ButtonState;
use kurbo::{Point, Rect};
use std::time::Duration;

/// Four symbol layers that enter states and react to presses, with or
/// without animation.
///
/// The host forwards state changes, presses and layout into the view,
/// calls [`tick`](Self::tick) once per frame and paints
/// [`display_list`](Self::display_list). Hit-testing is the host's job: the
/// view honors every press it is told about.
#[derive(Debug)]
pub struct PlayButtonView<C: Clock = SystemClock> {
    clock: C,
    config: ButtonConfig,
    current_state: ButtonState,
    highlighted: bool,
    /// Indexed by [`LayerKind::index`].
    layers: [Layer; 4],
    rotation: Rotation,
    bounds: Rect,
    laid_out: bool,
}

impl PlayButtonView<SystemClock> {
    /// Create a view with the default configuration and the system clock.
    pub fn new(bounds: Rect) -> Self {
        Self::with_clock(bounds, SystemClock::new())
    }
}

impl<C: Clock> PlayButtonView<C> {
    pub fn with_clock(bounds: Rect, clock: C) -> Self {
        Self::with_config(bounds, ButtonConfig::default(), clock)
    }

    /// Create a view showing [`ButtonState::Play`] without animation.
    pub fn with_config(bounds: Rect, config: ButtonConfig, clock: C) -> Self {
        let rotation = Rotation::new(config.rotation());
        let mut view = Self {
            clock,
            config,
            current_state: ButtonState::default(),
            highlighted: false,
            layers: LayerKind::ALL.map(|kind| Layer::new(kind, bounds)),
            rotation,
            bounds,
            laid_out: false,
        };
        view.force_enter_state(ButtonState::default(), false);
        view
    }

    pub fn current_state(&self) -> ButtonState {
        self.current_state
    }

    /// Whether a press is currently active.
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn config(&self) -> &ButtonConfig {
        &self.config
    }

    /// Replace the configuration. Takes effect on the next state entry,
    /// press or rotation start; nothing animates because of this call.
    pub fn set_config(&mut self, config: ButtonConfig) {
        self.config = config;
    }

    /// Mutable access to the configuration, with the same semantics as
    /// [`set_config`](Self::set_config).
    pub fn config_mut(&mut self) -> &mut ButtonConfig {
        &mut self.config
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn layer(&self, kind: LayerKind) -> &Layer {
        &self.layers[kind.index()]
    }

    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.iter()
    }

    /// Live properties of all layers, in paint order.
    pub fn configuration_snapshot(&self) -> [LayerSnapshot; 4] {
        self.layers.each_ref().map(Layer::snapshot)
    }

    /// Enter `state`. Re-entering the current state does nothing.
    pub fn enter_state(&mut self, state: ButtonState, animated: bool) {
        if state == self.current_state {
            return;
        }
        log::debug!(
            "Play button: {} -> {} (animated: {})",
            self.current_state.name(),
            state.name(),
            animated
        );
        self.current_state = state;
        self.force_enter_state(state, animated);
    }

    /// Enter `state` without the re-entry check, re-applying its layer
    /// configuration even if it is already current.
    pub fn force_enter_state(&mut self, state: ButtonState, animated: bool) {
        self.current_state = state;
        let now = self.clock.now();
        let duration = if animated {
            self.config.state_switch()
        } else {
            Duration::ZERO
        };

        for (kind, alpha, color) in state.configuration().resolve(&self.config.palette) {
            let layer = &mut self.layers[kind.index()];
            layer.animate_alpha(alpha, now, duration, Curve::EaseInOut);
            layer.animate_foreground(color, now, duration, Curve::EaseInOut);
        }
    }

    /// A press started. `point` is only logged; the host has already
    /// checked that it lies inside the bounds.
    pub fn notify_press_began(&mut self, point: Point) {
        log::trace!("Play button: press began at ({:.1}, {:.1})", point.x, point.y);
        self.highlight(true);
    }

    pub fn notify_press_ended(&mut self) {
        log::trace!("Play button: press ended");
        self.highlight(false);
    }

    pub fn notify_press_cancelled(&mut self) {
        log::trace!("Play button: press cancelled");
        self.highlight(false);
    }

    /// Grow or shrink the boundary and loading layers and flip the symbol
    /// colors between rest and tap. Alpha and state are left alone.
    fn highlight(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
        let now = self.clock.now();
        let transform_time = self.config.state_switch();
        let color_flip_time = self.config.color_flip();
        let palette = &self.config.palette;

        let scale = if highlighted {
            self.config.max_boundary_scale
        } else {
            1.0
        };
        for kind in [LayerKind::LoadingArc, LayerKind::BoundaryCircle] {
            self.layers[kind.index()].animate_scale(
                scale,
                now,
                transform_time,
                Curve::HIGHLIGHT_SPRING,
            );
        }

        let (play, pause) = if highlighted {
            (palette.play_tap, palette.pause_tap)
        } else {
            (palette.play_rest, palette.pause_rest)
        };
        self.layers[LayerKind::PlaySymbol.index()].animate_foreground(
            play.into(),
            now,
            color_flip_time,
            Curve::Linear,
        );
        self.layers[LayerKind::PauseSymbol.index()].animate_foreground(
            pause.into(),
            now,
            color_flip_time,
            Curve::Linear,
        );
    }

    /// Layout hook. Symbols are regenerated against `bounds` on the next
    /// paint. The first layout re-applies the current state without
    /// animation and starts the loading rotation.
    pub fn on_bounds_changed(&mut self, bounds: Rect) {
        self.bounds = bounds;
        for layer in &mut self.layers {
            layer.set_bounds(bounds);
        }
        if !self.laid_out {
            self.laid_out = true;
            self.force_enter_state(self.current_state, false);
            self.start_rotation();
        }
    }

    /// Start spinning the loading arc. No-op when already spinning.
    pub fn start_rotation(&mut self) {
        let now = self.clock.now();
        self.rotation.set_period(self.config.rotation());
        if self.rotation.start(now) {
            log::debug!(
                "Play button: loading rotation started ({:?} per turn)",
                self.rotation.period()
            );
        }
    }

    /// Stop spinning the loading arc. No-op when not spinning.
    pub fn stop_rotation(&mut self) {
        if self.rotation.stop() {
            log::debug!("Play button: loading rotation stopped");
            self.layers[LayerKind::LoadingArc.index()].set_rotation(0.0);
        }
    }

    pub fn is_rotating(&self) -> bool {
        self.rotation.is_running()
    }

    /// Advance every animation to the clock's current time.
    ///
    /// Returns `true` while anything is still moving (the host should
    /// schedule another frame). A running rotation always moves.
    pub fn tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut animating = false;
        for layer in &mut self.layers {
            layer.sample(now);
            animating |= layer.is_animating();
        }
        if self.rotation.is_running() {
            self.layers[LayerKind::LoadingArc.index()].set_rotation(self.rotation.angle_at(now));
            animating = true;
        }
        animating
    }

    /// Whether any layer must be regenerated; clears the flags.
    pub fn take_needs_display(&mut self) -> bool {
        self.layers
            .iter_mut()
            .fold(false, |dirty, layer| layer.take_needs_display() | dirty)
    }

    /// Paint descriptions of all visible layers, in paint order.
    pub fn display_list(&self) -> Vec<LayerPaint> {
        self.layers.iter().filter_map(Layer::paint).collect()
    }
}
