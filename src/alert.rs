//! Alert selection with warm-up and timeout escalation.
//!
//! A fresh controls message always wins. Without one, the monitor judges the
//! stream's health: quiet during warm-up is normal, a stream that never came
//! up gets a calm "not ready" banner, and a stream that came up and then died
//! gets the full-screen takeover with an immediate warning tone. The two
//! failure modes are deliberately distinct so startup never alarms the driver
//! and a genuine controls loss is never under-warned.

use core::time::Duration;

use log::warn;

use crate::config::{ALERT_WARMUP, CONTROLS_TIMEOUT};
use crate::strings::{self, AlertKind, Locale};
use crate::telemetry::{Alert, AlertSize, AlertText, AudibleAlert, ControlsFeed, TelemetryError};

/// Selects the driver-facing alert once per tick.
///
/// Pure with respect to the feed: evaluation never mutates telemetry state,
/// and the monitor itself only holds the display locale.
#[derive(Debug, Default)]
pub struct AlertMonitor {
    locale: Locale,
}

impl AlertMonitor {
    /// Create a monitor emitting built-in alert text in `locale`.
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Select the alert to display for this tick.
    ///
    /// Policy, in priority order:
    /// 1. A message that arrived this tick is displayed as-is.
    /// 2. Within the warm-up window after `stream_start`, staleness is not
    ///    judged and the empty alert is returned.
    /// 3. After warm-up: a stream that never delivered a message yields
    ///    "controls not ready" (Mid, silent); one that went quiet beyond
    ///    [`CONTROLS_TIMEOUT`] yields "controls not responding" (Full,
    ///    immediate warning tone); anything merely a little late yields the
    ///    empty alert.
    ///
    /// Malformed input degrades to the empty alert with a logged diagnostic;
    /// this entry point never panics.
    pub fn evaluate(&self, now: Duration, stream_start: Duration, feed: &ControlsFeed) -> Alert {
        if feed.updated {
            return match feed.snapshot {
                Some(snapshot) => match snapshot.validate(now) {
                    Ok(()) => Alert::from_snapshot(snapshot),
                    Err(err) => {
                        warn!("dropping malformed controls snapshot: {err}");
                        Alert::NONE
                    }
                },
                None => {
                    warn!("controls feed: {}", TelemetryError::MissingSnapshot);
                    Alert::NONE
                }
            };
        }

        // Too early to judge staleness
        if now.saturating_sub(stream_start) < ALERT_WARMUP {
            return Alert::NONE;
        }

        if !feed.ever_received {
            // Stream started but the controls process never came up
            return self.builtin(AlertKind::ControlsNotReady, AlertSize::Mid, AudibleAlert::None);
        }

        if now.saturating_sub(feed.last_received) > CONTROLS_TIMEOUT {
            // Controls came up, then stopped responding
            return self.builtin(
                AlertKind::ControlsNotResponding,
                AlertSize::Full,
                AudibleAlert::WarningImmediate,
            );
        }

        Alert::NONE
    }

    fn builtin(&self, kind: AlertKind, size: AlertSize, sound: AudibleAlert) -> Alert {
        let text = strings::lookup(kind, self.locale);
        Alert {
            text1: static_text(text.text1),
            text2: static_text(text.text2),
            alert_type: static_text(text.alert_type),
            size,
            sound,
        }
    }
}

// Table strings are capacity-checked by the strings tests; an oversized
// entry degrades to empty text rather than panicking.
fn static_text(s: &'static str) -> AlertText {
    crate::telemetry::bounded_text(s).unwrap_or_default()
}
