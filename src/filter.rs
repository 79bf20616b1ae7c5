//! First-order low-pass filtering for noisy sensor streams.
//!
//! Both the ambient-light and motion paths smooth their raw samples through
//! one of these before any thresholding, so a single outlier sample can never
//! flip a derived output.

/// Exponential (first-order) low-pass filter over a scalar sample stream.
///
/// Update rule: `x += (raw - x) * dt / (dt + tau)`. The first sample seeds
/// the state directly, so there is no warm-up transient from an arbitrary
/// initial value. The state is owned by the filter and only ever written by
/// [`update`](Self::update).
#[derive(Debug)]
pub struct FirstOrderFilter {
    tau: f32,
    x: f32,
    seeded: bool,
}

impl FirstOrderFilter {
    /// Create a filter with time constant `tau` (seconds).
    pub const fn new(tau: f32) -> Self {
        Self {
            tau,
            x: 0.0,
            seeded: false,
        }
    }

    /// Feed one raw sample taken `dt` seconds after the previous one and
    /// return the new smoothed value.
    ///
    /// Non-finite samples are ignored: the last-known-good smoothed value is
    /// returned unchanged.
    pub fn update(&mut self, raw: f32, dt: f32) -> f32 {
        if !raw.is_finite() || !(dt > 0.0) {
            return self.x;
        }

        if self.seeded {
            self.x += (raw - self.x) * (dt / (dt + self.tau));
        } else {
            self.x = raw;
            self.seeded = true;
        }

        self.x
    }

    /// Current smoothed value (0.0 before the first sample).
    #[inline]
    pub const fn value(&self) -> f32 {
        self.x
    }

    /// Discard all state; the next sample re-seeds the filter.
    pub fn reset(&mut self) {
        self.x = 0.0;
        self.seeded = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FILTER_DT;

    #[test]
    fn test_first_sample_seeds_state() {
        let mut filter = FirstOrderFilter::new(1.0);
        assert_eq!(filter.update(42.0, FILTER_DT), 42.0, "first sample should seed directly");
    }

    #[test]
    fn test_constant_input_converges() {
        let mut filter = FirstOrderFilter::new(1.0);
        filter.update(0.0, FILTER_DT);

        // Many time constants worth of ticks at a constant input
        let n = (20.0 / FILTER_DT) as u32;
        let mut smoothed = 0.0;
        for _ in 0..n {
            smoothed = filter.update(100.0, FILTER_DT);
        }
        assert!(
            (smoothed - 100.0).abs() < 0.01,
            "sustained constant input should converge, got {smoothed}"
        );
    }

    #[test]
    fn test_outlier_sensitivity_is_bounded() {
        let mut filter = FirstOrderFilter::new(1.0);
        filter.update(10.0, FILTER_DT);
        let before = filter.value();

        let after = filter.update(1000.0, FILTER_DT);
        let max_step = (1000.0 - before) * (FILTER_DT / (FILTER_DT + 1.0));
        assert!(
            after - before <= max_step + f32::EPSILON,
            "single outlier moved the filter by {} (max {max_step})",
            after - before
        );
    }

    #[test]
    fn test_non_finite_sample_is_ignored() {
        let mut filter = FirstOrderFilter::new(1.0);
        filter.update(5.0, FILTER_DT);
        let before = filter.value();

        assert_eq!(filter.update(f32::NAN, FILTER_DT), before);
        assert_eq!(filter.update(f32::INFINITY, FILTER_DT), before);
        assert_eq!(filter.value(), before, "bad samples must not corrupt filter state");
    }

    #[test]
    fn test_zero_dt_is_ignored() {
        let mut filter = FirstOrderFilter::new(1.0);
        filter.update(5.0, FILTER_DT);
        let before = filter.value();
        assert_eq!(filter.update(50.0, 0.0), before);
    }

    #[test]
    fn test_reset_reseeds() {
        let mut filter = FirstOrderFilter::new(1.0);
        filter.update(5.0, FILTER_DT);
        filter.reset();
        assert_eq!(filter.update(77.0, FILTER_DT), 77.0, "first sample after reset should seed");
    }
}
