//! Endless rotation for the loading indicator.

use std::f64::consts::TAU;
use std::time::Duration;

/// A repeating 0 → 2π revolution.
///
/// Independent of every other animation: it is either running or not, and
/// its angle is a pure function of the time since it was started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rotation {
    period: Duration,
    started_at: Option<Duration>,
}

impl Rotation {
    /// Time for one full revolution unless configured otherwise.
    pub const DEFAULT_PERIOD: Duration = Duration::from_secs(1);

    /// Create a stopped rotation.
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            started_at: None,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Change the revolution time. Only allowed while stopped so a running
    /// spin never jumps; returns whether the period was applied.
    pub fn set_period(&mut self, period: Duration) -> bool {
        if self.is_running() {
            return false;
        }
        self.period = period;
        true
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Start spinning at `now`. No-op when already running; returns whether
    /// the rotation was started by this call.
    pub fn start(&mut self, now: Duration) -> bool {
        if self.is_running() {
            return false;
        }
        self.started_at = Some(now);
        true
    }

    /// Stop spinning. No-op when already stopped; returns whether the
    /// rotation was running.
    pub fn stop(&mut self) -> bool {
        self.started_at.take().is_some()
    }

    /// Rotation angle in radians, in `[0, 2π)`. Zero while stopped or when
    /// the period is zero.
    pub fn angle_at(&self, now: Duration) -> f64 {
        let Some(started_at) = self.started_at else {
            return 0.0;
        };
        if self.period.is_zero() {
            return 0.0;
        }
        let turns = now.saturating_sub(started_at).as_secs_f64() / self.period.as_secs_f64();
        TAU * turns.fract()
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PERIOD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_start_is_idempotent() {
        let mut rotation = Rotation::default();
        assert!(rotation.start(Duration::ZERO));
        assert!(!rotation.start(Duration::from_millis(300)));
        // Phase still measured from the first start.
        let angle = rotation.angle_at(Duration::from_millis(500));
        assert!((angle - PI).abs() < 1e-9);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut rotation = Rotation::default();
        assert!(!rotation.stop());
        rotation.start(Duration::ZERO);
        assert!(rotation.stop());
        assert!(!rotation.stop());
        assert_eq!(rotation.angle_at(Duration::from_secs(3)), 0.0);
    }

    #[test]
    fn test_angle_wraps_each_period() {
        let mut rotation = Rotation::new(Duration::from_secs(2));
        rotation.start(Duration::from_secs(10));
        let a = rotation.angle_at(Duration::from_millis(10_500));
        let b = rotation.angle_at(Duration::from_millis(12_500));
        assert!((a - PI / 2.0).abs() < 1e-9);
        assert!((a - b).abs() < 1e-9);
        assert!(rotation.angle_at(Duration::from_secs(12)) < 1e-9);
    }

    #[test]
    fn test_period_locked_while_running() {
        let mut rotation = Rotation::default();
        rotation.start(Duration::ZERO);
        assert!(!rotation.set_period(Duration::from_secs(5)));
        rotation.stop();
        assert!(rotation.set_period(Duration::from_secs(5)));
        assert_eq!(rotation.period(), Duration::from_secs(5));
    }

    #[test]
    fn test_zero_period() {
        let mut rotation = Rotation::new(Duration::ZERO);
        rotation.start(Duration::ZERO);
        assert_eq!(rotation.angle_at(Duration::from_secs(1)), 0.0);
    }
}
