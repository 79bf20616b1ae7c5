//! HUD core - alert monitoring and device posture logic.
//!
//! This library contains the timing-sensitive logic behind a driver-facing
//! display: deciding which alert to show (including staleness escalation when
//! the controls telemetry stream goes quiet) and what physical posture the
//! device should hold (screen brightness, awake/asleep). Rendering, transport,
//! and hardware access live in the surrounding collaborators; this crate is
//! pure per-tick computation over explicit inputs.
//!
//! - [`config`]: Tick rate, timeouts, filter and brightness constants
//! - [`time`]: Monotonic clock abstraction
//! - [`filter`]: First-order low-pass filter for noisy sensor streams
//! - [`telemetry`]: Controls-state snapshot, alert value types, feed view
//! - [`strings`]: Locale-keyed alert text table
//! - [`alert`]: Alert selection with warm-up and timeout escalation
//! - [`motion`]: Motion window and interaction-evidence detection
//! - [`brightness`]: Ambient-light driven brightness with dead-band
//! - [`wakefulness`]: Awake/asleep countdown state machine
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test -p hud-core --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while target builds stay `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

pub mod alert;
pub mod brightness;
pub mod config;
pub mod filter;
pub mod motion;
pub mod strings;
pub mod telemetry;
pub mod time;
pub mod wakefulness;

// Re-export the per-tick API surface
pub use alert::AlertMonitor;
pub use brightness::BrightnessController;
pub use filter::FirstOrderFilter;
pub use motion::{MotionDetector, SensorSample};
pub use telemetry::{Alert, AlertSize, AudibleAlert, ControlsFeed, TelemetrySnapshot};
pub use time::Clock;
pub use wakefulness::WakefulnessController;
