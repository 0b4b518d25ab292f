//! The outer play button control.

use crate::animation::{Clock, SystemClock};
use crate::config::ButtonConfig;
use crate::layer::LayerPaint;
use crate::state::ButtonState;
use crate::view::PlayButtonView;
use kurbo::{Point, Rect};

/// A button that can enter several states with play/pause/load symbol
/// indication.
///
/// Wraps a [`PlayButtonView`] with the control-level defaults (a faster
/// state switch) and filters presses that start outside its bounds.
#[derive(Debug)]
pub struct PlayButton<C: Clock = SystemClock> {
    view: PlayButtonView<C>,
}

impl PlayButton<SystemClock> {
    pub fn new(bounds: Rect) -> Self {
        Self::with_clock(bounds, SystemClock::new())
    }
}

impl<C: Clock> PlayButton<C> {
    pub fn with_clock(bounds: Rect, clock: C) -> Self {
        Self::with_config(bounds, ButtonConfig::for_control(), clock)
    }

    pub fn with_config(bounds: Rect, config: ButtonConfig, clock: C) -> Self {
        Self {
            view: PlayButtonView::with_config(bounds, config, clock),
        }
    }

    pub fn view(&self) -> &PlayButtonView<C> {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut PlayButtonView<C> {
        &mut self.view
    }

    pub fn config(&self) -> &ButtonConfig {
        self.view.config()
    }

    /// Replace the configuration of the control and its view.
    pub fn set_config(&mut self, config: ButtonConfig) {
        self.view.set_config(config);
    }

    /// Edit the configuration in place.
    pub fn update_config(&mut self, update: impl FnOnce(&mut ButtonConfig)) {
        update(self.view.config_mut());
    }

    pub fn current_state(&self) -> ButtonState {
        self.view.current_state()
    }

    pub fn enter_state(&mut self, state: ButtonState, animated: bool) {
        self.view.enter_state(state, animated);
    }

    /// Whether `point` lies strictly inside the bounds.
    pub fn contains(&self, point: Point) -> bool {
        let bounds = self.view.bounds();
        let local = point - bounds.origin();
        local.x > 0.0 && local.x < bounds.width() && local.y > 0.0 && local.y < bounds.height()
    }

    /// Forward a press to the view if it starts inside the bounds.
    /// Returns whether the press was accepted.
    pub fn press_began(&mut self, point: Point) -> bool {
        if !self.contains(point) {
            log::trace!("Play button: ignoring press outside bounds at {point:?}");
            return false;
        }
        self.view.notify_press_began(point);
        true
    }

    pub fn press_ended(&mut self) {
        self.view.notify_press_ended();
    }

    pub fn press_cancelled(&mut self) {
        self.view.notify_press_cancelled();
    }

    pub fn layout(&mut self, bounds: Rect) {
        self.view.on_bounds_changed(bounds);
    }

    pub fn tick(&mut self) -> bool {
        self.view.tick()
    }

    pub fn display_list(&self) -> Vec<LayerPaint> {
        self.view.display_list()
    }
}
