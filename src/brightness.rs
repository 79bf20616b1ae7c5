//! Ambient-light driven screen brightness with dead-band commit.
//!
//! Raw light is smoothed hard (the backlight should ride through shadows and
//! oncoming headlights), mapped through a piecewise-linear curve, and only
//! committed when the target moves further than the dead-band from the last
//! committed value. Motion is tracked alongside over a rolling window so the
//! caller can read a smoothed motion level from the same place.

use core::time::Duration;

use crate::config::{
    BRIGHTNESS_CURVE,
    BRIGHTNESS_DEADBAND,
    BRIGHTNESS_MAX,
    BRIGHTNESS_MIN,
    FILTER_DT,
    LIGHT_FILTER_TAU,
    MOTION_FILTER_TAU,
};
use crate::filter::FirstOrderFilter;
use crate::motion::{MotionWindow, SensorSample};

/// Maps filtered ambient light to a committed backlight level.
pub struct BrightnessController {
    light_filter: FirstOrderFilter,
    motion_filter: FirstOrderFilter,
    motion_window: MotionWindow,
    committed: u16,
    last_update: Option<Duration>,
}

impl BrightnessController {
    /// Create a controller at minimum brightness.
    pub const fn new() -> Self {
        Self {
            light_filter: FirstOrderFilter::new(LIGHT_FILTER_TAU),
            motion_filter: FirstOrderFilter::new(MOTION_FILTER_TAU),
            motion_window: MotionWindow::new(),
            committed: BRIGHTNESS_MIN,
            last_update: None,
        }
    }

    /// Feed this tick's light sample and motion samples; returns the
    /// committed brightness, always within
    /// [`BRIGHTNESS_MIN`]..=[`BRIGHTNESS_MAX`].
    ///
    /// The elapsed time since the previous update scales the filters, so a
    /// late tick integrates a proportionally larger step. Malformed samples
    /// leave the filters at their last-known-good values.
    pub fn update(&mut self, light: f32, motion_samples: &[SensorSample], now: Duration) -> u16 {
        let dt = match self.last_update {
            Some(last) => {
                let elapsed = now.saturating_sub(last).as_secs_f32();
                if elapsed > 0.0 { elapsed } else { FILTER_DT }
            }
            None => FILTER_DT,
        };
        self.last_update = Some(now);

        for sample in motion_samples {
            self.motion_window.push(sample.value);
        }
        self.motion_filter.update(self.motion_window.magnitude(), dt);

        let filtered_light = self.light_filter.update(light, dt);
        let target = map_brightness(filtered_light);

        // Dead-band: hold the committed value against small target moves
        if self.committed.abs_diff(target) > BRIGHTNESS_DEADBAND {
            self.committed = target;
        }

        self.committed
    }

    /// Last committed brightness.
    #[inline]
    pub const fn brightness(&self) -> u16 {
        self.committed
    }

    /// Smoothed motion level over the rolling window.
    #[inline]
    pub const fn motion_level(&self) -> f32 {
        self.motion_filter.value()
    }
}

impl Default for BrightnessController {
    fn default() -> Self {
        Self::new()
    }
}

/// Piecewise-linear mapping from filtered lux to target brightness, clamped
/// to the curve's endpoints.
fn map_brightness(lux: f32) -> u16 {
    let first = BRIGHTNESS_CURVE[0];
    let last = BRIGHTNESS_CURVE[BRIGHTNESS_CURVE.len() - 1];

    if !lux.is_finite() || lux <= first.0 {
        return first.1;
    }

    for pair in BRIGHTNESS_CURVE.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if lux <= x1 {
            let t = (lux - x0) / (x1 - x0);
            let y = f32::from(y0) + t * (f32::from(y1) - f32::from(y0));
            return (y as u16).clamp(BRIGHTNESS_MIN, BRIGHTNESS_MAX);
        }
    }

    last.1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TICK_PERIOD;
    use crate::motion::MotionAxis;

    fn run_ticks(
        controller: &mut BrightnessController,
        now: &mut Duration,
        light: f32,
        ticks: u32,
    ) -> u16 {
        let mut out = controller.brightness();
        for _ in 0..ticks {
            *now += TICK_PERIOD;
            out = controller.update(light, &[], *now);
        }
        out
    }

    #[test]
    fn test_brightness_always_in_bounds() {
        let mut controller = BrightnessController::new();
        let mut now = Duration::ZERO;
        for light in [-50.0, 0.0, 5000.0, f32::NAN] {
            let b = run_ticks(&mut controller, &mut now, light, 200);
            assert!(
                (BRIGHTNESS_MIN..=BRIGHTNESS_MAX).contains(&b),
                "brightness {b} out of bounds for light {light}"
            );
        }
    }

    #[test]
    fn test_curve_endpoints() {
        assert_eq!(map_brightness(-10.0), BRIGHTNESS_MIN);
        assert_eq!(map_brightness(0.0), BRIGHTNESS_MIN);
        assert_eq!(map_brightness(1e6), BRIGHTNESS_MAX);
    }

    #[test]
    fn test_curve_is_monotonic() {
        let mut prev = map_brightness(0.0);
        let mut lux = 0.0;
        while lux <= 1100.0 {
            let b = map_brightness(lux);
            assert!(b >= prev, "curve must be non-decreasing at {lux} lux");
            prev = b;
            lux += 10.0;
        }
    }

    #[test]
    fn test_small_changes_hold_within_deadband() {
        let mut controller = BrightnessController::new();
        let mut now = Duration::ZERO;
        // Settle at a mid-curve operating point
        run_ticks(&mut controller, &mut now, 300.0, 4000);
        let committed = controller.brightness();

        // Consecutive samples wobbling a few lux never move the commit
        for light in [302.0, 298.0, 303.0, 297.0, 300.0] {
            let b = run_ticks(&mut controller, &mut now, light, 2);
            assert_eq!(b, committed, "wobble below the dead-band must hold");
        }
    }

    #[test]
    fn test_sustained_step_eventually_commits() {
        let mut controller = BrightnessController::new();
        let mut now = Duration::ZERO;
        run_ticks(&mut controller, &mut now, 50.0, 4000);
        let dim = controller.brightness();

        // Step into daylight: within a bounded number of ticks the commit moves
        let bright = run_ticks(&mut controller, &mut now, 900.0, 4000);
        assert!(
            bright > dim + BRIGHTNESS_DEADBAND,
            "sustained step should commit a new brightness ({dim} -> {bright})"
        );
    }

    #[test]
    fn test_motion_level_tracks_window() {
        let mut controller = BrightnessController::new();
        let mut now = Duration::ZERO;
        assert_eq!(controller.motion_level(), 0.0);

        for _ in 0..100 {
            now += TICK_PERIOD;
            let samples = [
                SensorSample::new(MotionAxis::Accelerometer, 1.0, now),
                SensorSample::new(MotionAxis::Gyroscope, 1.0, now),
            ];
            controller.update(100.0, &samples, now);
        }
        assert!(
            (controller.motion_level() - 1.0).abs() < 0.05,
            "constant motion input should converge, got {}",
            controller.motion_level()
        );
    }

    #[test]
    fn test_late_tick_integrates_larger_step() {
        let mut late_controller = BrightnessController::new();
        let mut on_schedule = BrightnessController::new();

        let mut now = Duration::ZERO;
        run_ticks(&mut late_controller, &mut now, 0.0, 1);
        // One tick arriving a full second late integrates a second's worth
        let late = late_controller.update(1000.0, &[], now + Duration::from_secs(1));

        let mut now = Duration::ZERO;
        run_ticks(&mut on_schedule, &mut now, 0.0, 1);
        let prompt = on_schedule.update(1000.0, &[], now + TICK_PERIOD);

        assert!(
            late > prompt,
            "a 1 s stall should integrate more than a 50 ms tick ({late} vs {prompt})"
        );
    }
}
