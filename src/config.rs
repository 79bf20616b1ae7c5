//! Centralized timing and posture configuration.
//!
//! All tunables are compile-time constants with validation assertions, so a
//! misconfigured threshold pair (e.g. a dead-band wider than the brightness
//! range) fails the build instead of surfacing as runtime flicker.
//!
//! # Compile-Time Validation
//!
//! Each constant group includes `const` assertions that verify ordering at
//! compile time. If constants are configured incorrectly, compilation fails
//! with a clear error.

use core::time::Duration;

// =============================================================================
// Tick Timing
// =============================================================================

/// Nominal evaluation frequency in Hz. One tick = one evaluation of every
/// controller.
pub const UI_FREQ: u32 = 20;

/// Duration of one tick at [`UI_FREQ`].
pub const TICK_PERIOD: Duration = Duration::from_millis(1000 / UI_FREQ as u64);

const _: () = assert!(UI_FREQ > 0);
const _: () = assert!(1000 % UI_FREQ as u64 == 0, "tick period must be a whole number of ms");

// =============================================================================
// Alert Staleness Thresholds
// =============================================================================

/// Ticks after stream start during which staleness is never judged.
/// Avoids false alarms while the controls process is still coming up.
pub const ALERT_WARMUP_TICKS: u32 = 5;

/// Warm-up window as a duration ([`ALERT_WARMUP_TICKS`] at [`UI_FREQ`]).
pub const ALERT_WARMUP: Duration =
    Duration::from_millis(ALERT_WARMUP_TICKS as u64 * 1000 / UI_FREQ as u64);

/// Maximum tolerated gap since the last received controls message before the
/// "controls not responding" alert escalates.
pub const CONTROLS_TIMEOUT: Duration = Duration::from_secs(5);

const _: () = assert!(ALERT_WARMUP_TICKS > 0);
// Warm-up must expire well before the timeout can ever fire
const _: () = assert!(ALERT_WARMUP.as_millis() < CONTROLS_TIMEOUT.as_millis());

// =============================================================================
// Wakefulness
// =============================================================================

/// Ticks of no interaction evidence before the display goes to sleep
/// (30 seconds at [`UI_FREQ`]).
pub const SLEEP_COUNTDOWN_TICKS: u32 = 30 * UI_FREQ;

const _: () = assert!(SLEEP_COUNTDOWN_TICKS > 0);

// =============================================================================
// Motion Detection
// =============================================================================

/// Number of motion samples in the rolling window (5 seconds at [`UI_FREQ`]).
pub const MOTION_SAMPLES: usize = (5 * UI_FREQ) as usize;

/// Accelerometer magnitude delta that counts as interaction evidence.
pub const MOTION_WAKE_ACCEL: f32 = 0.2;

/// Gyroscope magnitude delta that counts as interaction evidence.
pub const MOTION_WAKE_GYRO: f32 = 0.15;

const _: () = assert!(MOTION_SAMPLES > 0);
const _: () = assert!(MOTION_WAKE_GYRO < MOTION_WAKE_ACCEL);

// =============================================================================
// Sensor Filtering
// =============================================================================

/// Sample interval fed to the sensor filters, in seconds (one tick).
pub const FILTER_DT: f32 = 1.0 / UI_FREQ as f32;

/// Time constant for the ambient-light filter, in seconds. Slow on purpose:
/// the backlight should ride through shadows and oncoming headlights.
pub const LIGHT_FILTER_TAU: f32 = 10.0;

/// Time constant for the motion-magnitude filter, in seconds.
pub const MOTION_FILTER_TAU: f32 = 0.5;

const _: () = assert!(FILTER_DT > 0.0);
const _: () = assert!(MOTION_FILTER_TAU < LIGHT_FILTER_TAU);

// =============================================================================
// Brightness
// =============================================================================

/// Lowest committed brightness. Never fully dark while awake.
pub const BRIGHTNESS_MIN: u16 = 10;

/// Highest committed brightness (panel units).
pub const BRIGHTNESS_MAX: u16 = 512;

/// Minimum difference from the committed brightness before a new target is
/// committed. Suppresses flicker from single noisy light samples.
pub const BRIGHTNESS_DEADBAND: u16 = 5;

/// Piecewise-linear mapping from filtered ambient light (lux) to target
/// brightness. Interpolated between points, clamped outside the table.
pub const BRIGHTNESS_CURVE: [(f32, u16); 4] = [
    (0.0, BRIGHTNESS_MIN),
    (100.0, 160),
    (500.0, 320),
    (1000.0, BRIGHTNESS_MAX),
];

const _: () = assert!(BRIGHTNESS_MIN < BRIGHTNESS_MAX);
const _: () = assert!(BRIGHTNESS_DEADBAND < BRIGHTNESS_MAX - BRIGHTNESS_MIN);
// Curve must be strictly increasing in both lux and brightness
const _: () = assert!(BRIGHTNESS_CURVE[0].0 < BRIGHTNESS_CURVE[1].0);
const _: () = assert!(BRIGHTNESS_CURVE[1].0 < BRIGHTNESS_CURVE[2].0);
const _: () = assert!(BRIGHTNESS_CURVE[2].0 < BRIGHTNESS_CURVE[3].0);
const _: () = assert!(BRIGHTNESS_CURVE[0].1 < BRIGHTNESS_CURVE[1].1);
const _: () = assert!(BRIGHTNESS_CURVE[1].1 < BRIGHTNESS_CURVE[2].1);
const _: () = assert!(BRIGHTNESS_CURVE[2].1 < BRIGHTNESS_CURVE[3].1);
const _: () = assert!(BRIGHTNESS_CURVE[0].1 >= BRIGHTNESS_MIN);
const _: () = assert!(BRIGHTNESS_CURVE[3].1 <= BRIGHTNESS_MAX);

// =============================================================================
// Alert Text
// =============================================================================

/// Capacity of one alert text line, in bytes. Sized for the longest localized
/// string in the table plus headroom for feed-supplied text.
pub const ALERT_TEXT_LEN: usize = 96;

// =============================================================================
// Unit Tests
// =============================================================================
