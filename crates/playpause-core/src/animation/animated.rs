//! Properties that move toward a target over time.

use super::curve::Curve;
use peniko::Color;
use std::time::Duration;

/// Values that can be interpolated.
pub trait Lerp: Copy {
    /// Value at progress `t` between `self` (t = 0) and `to` (t = 1).
    /// `t` may leave `[0, 1]` for overshooting curves.
    fn lerp(self, to: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, to: Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for Color {
    fn lerp(self, to: Self, t: f64) -> Self {
        let t = t as f32;
        let [r0, g0, b0, a0] = self.components;
        let [r1, g1, b1, a1] = to.components;
        Color::new([
            r0 + (r1 - r0) * t,
            g0 + (g1 - g0) * t,
            b0 + (b1 - b0) * t,
            a0 + (a1 - a0) * t,
        ])
    }
}

#[derive(Debug, Clone, Copy)]
struct Transition<T> {
    from: T,
    to: T,
    start: Duration,
    duration: Duration,
    curve: Curve,
}

/// A value with at most one in-flight transition.
///
/// The stored value is the one observed at the last [`sample`](Self::sample);
/// starting a new transition samples first, so the new transition begins
/// from wherever the previous one had got to.
#[derive(Debug, Clone)]
pub struct Animated<T> {
    value: T,
    transition: Option<Transition<T>>,
}

impl<T: Lerp> Animated<T> {
    /// Create a settled value.
    pub fn new(value: T) -> Self {
        Self {
            value,
            transition: None,
        }
    }

    /// The live value as of the last sample.
    pub fn value(&self) -> T {
        self.value
    }

    /// Where the value is heading (the value itself when settled).
    pub fn target(&self) -> T {
        self.transition.map_or(self.value, |t| t.to)
    }

    /// Whether a transition is still in flight.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Jump to `value`, dropping any in-flight transition.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.transition = None;
    }

    /// Move toward `target` over `duration`, starting from the live value at
    /// `now`. A zero duration is the same as [`set`](Self::set).
    pub fn animate_to(&mut self, target: T, now: Duration, duration: Duration, curve: Curve) {
        self.sample(now);
        if duration.is_zero() {
            self.set(target);
            return;
        }
        self.transition = Some(Transition {
            from: self.value,
            to: target,
            start: now,
            duration,
            curve,
        });
    }

    /// Update the live value for time `now`.
    ///
    /// Returns `true` if a transition was in flight (the value may have
    /// changed). Finished transitions land exactly on their target.
    pub fn sample(&mut self, now: Duration) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };

        let elapsed = now.saturating_sub(transition.start);
        if elapsed >= transition.duration {
            self.value = transition.to;
            self.transition = None;
        } else {
            let t = elapsed.as_secs_f64() / transition.duration.as_secs_f64();
            self.value = transition
                .from
                .lerp(transition.to, transition.curve.apply(t));
        }
        true
    }
}

impl<T: Lerp + Default> Default for Animated<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_linear_progress() {
        let mut value = Animated::new(0.0);
        value.animate_to(10.0, ms(0), ms(1000), Curve::Linear);
        assert!(value.is_animating());
        assert!((value.target() - 10.0).abs() < f64::EPSILON);

        value.sample(ms(250));
        assert!((value.value() - 2.5).abs() < 1e-9);

        value.sample(ms(1000));
        assert_eq!(value.value(), 10.0);
        assert!(!value.is_animating());
        assert!(!value.sample(ms(2000)));
    }

    #[test]
    fn test_retarget_starts_from_live_value() {
        let mut value = Animated::new(0.0);
        value.animate_to(10.0, ms(0), ms(1000), Curve::Linear);
        // Never sampled in between: the retarget reads the live value itself.
        value.animate_to(0.0, ms(400), ms(1000), Curve::Linear);
        assert!((value.value() - 4.0).abs() < 1e-9);

        value.sample(ms(400));
        assert!((value.value() - 4.0).abs() < 1e-9);
        value.sample(ms(900));
        assert!((value.value() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let mut value = Animated::new(1.0);
        value.animate_to(0.0, ms(0), ms(1000), Curve::EaseInOut);
        value.animate_to(0.5, ms(10), Duration::ZERO, Curve::EaseInOut);
        assert_eq!(value.value(), 0.5);
        assert!(!value.is_animating());
    }

    #[test]
    fn test_clock_before_start_holds_origin() {
        let mut value = Animated::new(3.0);
        value.animate_to(6.0, ms(500), ms(100), Curve::Linear);
        value.sample(ms(100));
        assert_eq!(value.value(), 3.0);
    }

    #[test]
    fn test_color_lerp() {
        let black = Color::from_rgba8(0, 0, 0, 255);
        let white = Color::from_rgba8(255, 255, 255, 255);
        let mid = Lerp::lerp(black, white, 0.5);
        for c in &mid.components[..3] {
            assert!((c - 0.5).abs() < 1e-6);
        }
        assert_eq!(Lerp::lerp(black, white, 0.0).components, black.components);
        assert_eq!(Lerp::lerp(black, white, 1.0).components, white.components);
    }
}
