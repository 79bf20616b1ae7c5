//! HUD core simulator for desktop platforms.
//!
//! Drives the alert monitor, brightness controller, and wakefulness
//! controller at the nominal tick rate with a scripted scenario: a healthy
//! controls stream, a mid-drive controls dropout with recovery, a light sweep
//! from night to daylight, and motion that dies down long enough for the
//! display to fall asleep. Outputs are logged on change.
//!
//! Run with:
//! ```bash
//! RUST_LOG=info cargo run -p hud-simulator
//! ```

use std::thread;
use std::time::{Duration, Instant};

use hud_core::config::{TICK_PERIOD, UI_FREQ};
use hud_core::motion::{MotionAxis, MotionDetector, SensorSample};
use hud_core::strings::Locale;
use hud_core::telemetry::AlertText;
use hud_core::time::Clock;
use hud_core::{
    Alert,
    AlertMonitor,
    AlertSize,
    AudibleAlert,
    BrightnessController,
    ControlsFeed,
    TelemetrySnapshot,
    WakefulnessController,
};
use log::{info, warn};

/// Total scripted scenario length.
const SCENARIO: Duration = Duration::from_secs(45);

/// Controls stream goes quiet here...
const DROPOUT_START: Duration = Duration::from_secs(10);

/// ...and comes back here.
const DROPOUT_END: Duration = Duration::from_secs(22);

/// Last tick with motion on the device; after this it sits untouched.
const MOTION_STOP: Duration = Duration::from_secs(8);

/// An ignition cycle arrives here, waking the sleeping display.
const IGNITION_WAKE: Duration = Duration::from_secs(41);

/// Monotonic clock anchored at process start.
struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let clock = MonotonicClock::new();
    let stream_start = clock.now();

    let monitor = AlertMonitor::new(Locale::En);
    let mut brightness = BrightnessController::new();
    let mut wakefulness = WakefulnessController::new();
    let mut detector = MotionDetector::new();

    // Feed bookkeeping
    let mut snapshot: Option<TelemetrySnapshot> = None;
    let mut last_received = Duration::ZERO;
    let mut ever_received = false;

    // Change tracking for output logging
    let mut last_alert = Alert::NONE;
    let mut last_brightness = 0u16;
    let mut ignition_fired = false;

    info!("HUD simulator starting ({UI_FREQ} Hz, {SCENARIO:?} scenario)");

    loop {
        let tick_started = Instant::now();
        let now = clock.now();
        if now >= SCENARIO {
            break;
        }

        // --- Synthetic controls stream ---
        let controls_alive = now < DROPOUT_START || now >= DROPOUT_END;
        let updated = controls_alive;
        if updated {
            snapshot = Some(synth_snapshot(now));
            last_received = now;
            ever_received = true;
        }
        let feed = ControlsFeed {
            updated,
            snapshot: snapshot.as_ref(),
            last_received,
            ever_received,
        };

        // --- Synthetic sensors ---
        let light = synth_light(now);
        let (accel, gyro) = synth_motion(now);
        let motion_samples = [
            SensorSample::new(MotionAxis::Accelerometer, accel, now),
            SensorSample::new(MotionAxis::Gyroscope, gyro, now),
        ];

        // --- Evaluate the core, one component at a time ---
        let alert = monitor.evaluate(now, stream_start, &feed);
        let level = brightness.update(light, &motion_samples, now);
        let evidence = detector.update(accel, gyro);
        if let Some(on) = wakefulness.tick(evidence) {
            info!("display power changed: {on} (t={:.1}s)", now.as_secs_f32());
        }

        // --- External wake trigger ---
        if !ignition_fired && now >= IGNITION_WAKE {
            ignition_fired = true;
            if let Some(on) = wakefulness.request_wake(true) {
                info!("display power changed: {on} (ignition, t={:.1}s)", now.as_secs_f32());
            }
        }

        // --- Report output changes ---
        if alert != last_alert {
            if alert.is_none() {
                info!("alert cleared (t={:.1}s)", now.as_secs_f32());
            } else {
                info!(
                    "alert: {:?} {:?} \"{}\" / \"{}\" (t={:.1}s)",
                    alert.size,
                    alert.sound,
                    alert.text1.as_str(),
                    alert.text2.as_str(),
                    now.as_secs_f32()
                );
            }
            last_alert = alert;
        }
        if level != last_brightness {
            info!("brightness -> {level} (t={:.1}s)", now.as_secs_f32());
            last_brightness = level;
        }

        // Hold the tick rate; a late tick simply evaluates with a larger delta
        if let Some(remaining) = TICK_PERIOD.checked_sub(tick_started.elapsed()) {
            thread::sleep(remaining);
        }
    }

    info!(
        "scenario complete: awake={}, brightness={}",
        wakefulness.is_awake(),
        brightness.brightness()
    );
}

/// Latest controls message for a healthy stream: silent cruise with a brief
/// steering prompt partway through.
fn synth_snapshot(now: Duration) -> TelemetrySnapshot {
    let prompting = (Duration::from_secs(4)..Duration::from_secs(6)).contains(&now);
    let (text1, text2, alert_type, size, sound) = if prompting {
        (
            "Steering required",
            "lane departure detected",
            "steerRequired",
            AlertSize::Small,
            AudibleAlert::Prompt,
        )
    } else {
        ("", "", "", AlertSize::None, AudibleAlert::None)
    };

    match TelemetrySnapshot::new(text1, text2, alert_type, size, sound, now, now) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!("synthetic snapshot rejected: {err}");
            TelemetrySnapshot {
                text1: AlertText::new(),
                text2: AlertText::new(),
                alert_type: AlertText::new(),
                size: AlertSize::None,
                sound: AudibleAlert::None,
                generated: now,
                received: now,
            }
        }
    }
}

/// Ambient light sweep: night at start, daylight by the end.
fn synth_light(now: Duration) -> f32 {
    let t = now.as_secs_f32() / SCENARIO.as_secs_f32();
    20.0 + 900.0 * t
}

/// Device motion: handling bumps early on, then perfectly still.
fn synth_motion(now: Duration) -> (f32, f32) {
    if now < MOTION_STOP {
        let t = now.as_secs_f32();
        (9.8 + 0.5 * (t * 3.0).sin(), 0.3 * (t * 5.0).cos())
    } else {
        (9.8, 0.0)
    }
}
