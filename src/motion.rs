//! Motion sensing: rolling sample window and interaction-evidence detection.
//!
//! Two consumers sit on the motion stream. The brightness path wants a slow
//! measure of how much the device is moving, taken over a 5-second rolling
//! window. The wakefulness path wants a per-tick bool: did the device just
//! get picked up, bumped, or otherwise interacted with.

use core::time::Duration;

use micromath::F32Ext;

use log::warn;

use crate::config::{MOTION_SAMPLES, MOTION_WAKE_ACCEL, MOTION_WAKE_GYRO};

/// Which inertial axis a motion sample came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionAxis {
    Accelerometer,
    Gyroscope,
}

/// One scalar motion reading, tagged with its axis and sample time.
#[derive(Clone, Copy, Debug)]
pub struct SensorSample {
    pub axis: MotionAxis,
    pub value: f32,
    pub timestamp: Duration,
}

impl SensorSample {
    pub const fn new(axis: MotionAxis, value: f32, timestamp: Duration) -> Self {
        Self {
            axis,
            value,
            timestamp,
        }
    }
}

/// Rolling window over the most recent [`MOTION_SAMPLES`] motion magnitudes.
///
/// Fixed-size circular buffer with a running sum of squares; `magnitude`
/// reports the RMS over whatever has been collected so far.
pub struct MotionWindow {
    buffer: [f32; MOTION_SAMPLES],
    index: usize,
    count: usize,
    sum_sq: f32,
}

impl MotionWindow {
    /// Create an empty window.
    pub const fn new() -> Self {
        Self {
            buffer: [0.0; MOTION_SAMPLES],
            index: 0,
            count: 0,
            sum_sq: 0.0,
        }
    }

    /// Push one motion magnitude sample, evicting the oldest when full.
    ///
    /// Non-finite samples are dropped with a diagnostic.
    pub fn push(&mut self, sample: f32) {
        if !sample.is_finite() {
            warn!("dropping non-finite motion sample");
            return;
        }

        if self.count >= MOTION_SAMPLES {
            let old = self.buffer[self.index];
            self.sum_sq -= old * old;
        } else {
            self.count += 1;
        }

        self.buffer[self.index] = sample;
        self.sum_sq += sample * sample;
        self.index = (self.index + 1) % MOTION_SAMPLES;
    }

    /// RMS magnitude over the collected samples (0.0 while empty).
    pub fn magnitude(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        // Running sum can drift slightly negative from float cancellation
        let mean_sq = (self.sum_sq / self.count as f32).max(0.0);
        F32Ext::sqrt(mean_sq)
    }
}

impl Default for MotionWindow {
    fn default() -> Self {
        Self::new()
    }
}

/// Detects interaction evidence from accelerometer and gyroscope magnitudes.
///
/// The accelerometer is compared against its previous sample; the gyroscope
/// against a slow running average, so a held turn does not keep re-triggering
/// while a fresh twist does.
pub struct MotionDetector {
    accel_prev: f32,
    gyro_avg: f32,
    seeded: bool,
}

impl MotionDetector {
    /// Create a detector with no history.
    pub const fn new() -> Self {
        Self {
            accel_prev: 0.0,
            gyro_avg: 0.0,
            seeded: false,
        }
    }

    /// Feed this tick's sensor magnitudes; returns true if the deltas count
    /// as interaction evidence.
    ///
    /// The first sample only seeds the baselines. Non-finite samples keep the
    /// last-known-good baselines and never trigger.
    pub fn update(&mut self, accel: f32, gyro: f32) -> bool {
        if !accel.is_finite() || !gyro.is_finite() {
            warn!("dropping non-finite accel/gyro sample");
            return false;
        }

        if !self.seeded {
            self.accel_prev = accel;
            self.gyro_avg = gyro;
            self.seeded = true;
            return false;
        }

        let triggered = F32Ext::abs(accel - self.accel_prev) > MOTION_WAKE_ACCEL
            || F32Ext::abs(gyro - self.gyro_avg) > MOTION_WAKE_GYRO;

        self.accel_prev = accel;
        let n = MOTION_SAMPLES as f32;
        self.gyro_avg = (self.gyro_avg * (n - 1.0) + gyro) / n;

        triggered
    }
}

impl Default for MotionDetector {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_window_is_zero() {
        assert_eq!(MotionWindow::new().magnitude(), 0.0);
    }

    #[test]
    fn test_constant_samples_give_constant_rms() {
        let mut window = MotionWindow::new();
        for _ in 0..MOTION_SAMPLES {
            window.push(2.0);
        }
        assert!((window.magnitude() - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_window_evicts_oldest() {
        let mut window = MotionWindow::new();
        // Fill with large values, then push a full window of zeros
        for _ in 0..MOTION_SAMPLES {
            window.push(10.0);
        }
        for _ in 0..MOTION_SAMPLES {
            window.push(0.0);
        }
        assert!(
            window.magnitude() < 1e-3,
            "old samples should be fully evicted, got {}",
            window.magnitude()
        );
    }

    #[test]
    fn test_window_drops_non_finite() {
        let mut window = MotionWindow::new();
        window.push(1.0);
        window.push(f32::NAN);
        assert!((window.magnitude() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_detector_first_sample_never_triggers() {
        let mut detector = MotionDetector::new();
        assert!(!detector.update(5.0, 5.0), "seeding sample must not trigger");
    }

    #[test]
    fn test_detector_triggers_on_accel_jump() {
        let mut detector = MotionDetector::new();
        detector.update(1.0, 0.0);
        assert!(detector.update(1.0 + MOTION_WAKE_ACCEL * 2.0, 0.0));
    }

    #[test]
    fn test_detector_triggers_on_gyro_jump() {
        let mut detector = MotionDetector::new();
        detector.update(1.0, 0.0);
        assert!(detector.update(1.0, MOTION_WAKE_GYRO * 2.0));
    }

    #[test]
    fn test_detector_quiet_on_steady_input() {
        let mut detector = MotionDetector::new();
        detector.update(1.0, 0.2);
        for _ in 0..50 {
            assert!(!detector.update(1.0, 0.2), "steady input must not trigger");
        }
    }

    #[test]
    fn test_detector_ignores_non_finite() {
        let mut detector = MotionDetector::new();
        detector.update(1.0, 0.0);
        assert!(!detector.update(f32::NAN, 0.0));
        // Baseline preserved: a normal next sample compares against 1.0
        assert!(!detector.update(1.0, 0.0));
    }
}
