//! Timing curves.

/// `ln(1000)`: springs are tuned so their envelope decays to 0.1% of the
/// initial displacement by the end of the animation.
const SPRING_SETTLE_LN: f64 = 6.907_755_278_982_137;

/// Smallest damping ratio accepted by [`Curve::Spring`].
const MIN_DAMPING_RATIO: f64 = 0.05;

/// Maps linear time progress to value progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    /// Constant speed.
    Linear,
    /// Cubic ease-in-out.
    EaseInOut,
    /// Damped spring that settles within the animation's duration.
    /// Ratios below 1 overshoot the target before settling.
    Spring { damping_ratio: f64 },
}

impl Curve {
    /// Spring used for the press highlight.
    pub const HIGHLIGHT_SPRING: Curve = Curve::Spring { damping_ratio: 0.6 };

    /// Eased progress for linear progress `t`.
    ///
    /// `t` is clamped to `[0, 1]`; the result is exactly 0 at the start and
    /// exactly 1 at the end.
    pub fn apply(self, t: f64) -> f64 {
        if t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        match self {
            Curve::Linear => t,
            Curve::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Curve::Spring { damping_ratio } => spring(t, damping_ratio),
        }
    }
}

/// Step response of a damped harmonic oscillator over unit time.
fn spring(t: f64, damping_ratio: f64) -> f64 {
    let zeta = if damping_ratio.is_finite() {
        damping_ratio.max(MIN_DAMPING_RATIO)
    } else {
        1.0
    };

    if zeta < 1.0 {
        let omega = SPRING_SETTLE_LN / zeta;
        let damped = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * t).exp();
        1.0 - envelope * ((damped * t).cos() + (zeta * omega / damped) * (damped * t).sin())
    } else {
        // Critically damped; overdamped ratios are treated the same way.
        let omega = SPRING_SETTLE_LN;
        1.0 - (-omega * t).exp() * (1.0 + omega * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURVES: [Curve; 3] = [Curve::Linear, Curve::EaseInOut, Curve::HIGHLIGHT_SPRING];

    #[test]
    fn test_endpoints_exact() {
        for curve in CURVES {
            assert_eq!(curve.apply(0.0), 0.0);
            assert_eq!(curve.apply(1.0), 1.0);
            assert_eq!(curve.apply(-3.0), 0.0);
            assert_eq!(curve.apply(7.0), 1.0);
            assert_eq!(curve.apply(f64::NAN), 0.0);
        }
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        let curve = Curve::EaseInOut;
        assert!((curve.apply(0.5) - 0.5).abs() < 1e-12);
        assert!((curve.apply(0.25) + curve.apply(0.75) - 1.0).abs() < 1e-12);
        assert!(curve.apply(0.1) < 0.1);
    }

    #[test]
    fn test_underdamped_spring_overshoots_then_settles() {
        let curve = Curve::HIGHLIGHT_SPRING;
        let peak = (1..100)
            .map(|i| curve.apply(i as f64 / 100.0))
            .fold(f64::NEG_INFINITY, f64::max);
        assert!(peak > 1.0);
        assert!(peak < 1.2);
        assert!((curve.apply(0.99) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_critical_spring_is_monotonic() {
        let curve = Curve::Spring { damping_ratio: 1.0 };
        let mut last = 0.0;
        for i in 1..100 {
            let value = curve.apply(i as f64 / 100.0);
            assert!(value >= last);
            assert!(value <= 1.0);
            last = value;
        }
    }
}
