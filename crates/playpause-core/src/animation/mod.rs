//! Frame-driven animation primitives.
//!
//! Animations are plain values sampled against a [`Clock`]; the host drives
//! them by calling `tick()` once per frame. Retargeting an in-flight
//! animation always starts from its live value, so nothing ever snaps.

mod animated;
mod clock;
mod curve;
mod rotation;

pub use animated::{Animated, Lerp};
pub use clock::{Clock, ManualClock, SystemClock};
pub use curve::Curve;
pub use rotation::Rotation;

use std::time::Duration;

/// Convert seconds into a `Duration` rounded to the nanosecond, mapping
/// negative or non-finite values to zero (an immediate change).
pub fn duration_from_secs(secs: f64) -> Duration {
    let nanos = (secs * 1e9).round();
    if nanos.is_finite() && nanos > 0.0 && nanos < u64::MAX as f64 {
        Duration::from_nanos(nanos as u64)
    } else {
        Duration::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_secs() {
        assert_eq!(duration_from_secs(0.5), Duration::from_millis(500));
        assert_eq!(duration_from_secs(0.7), Duration::from_millis(700));
        assert_eq!(duration_from_secs(0.35), Duration::from_millis(350));
        assert_eq!(duration_from_secs(-1.0), Duration::ZERO);
        assert_eq!(duration_from_secs(f64::NAN), Duration::ZERO);
        assert_eq!(duration_from_secs(f64::INFINITY), Duration::ZERO);
    }
}
