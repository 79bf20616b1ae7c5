//! Controls-state telemetry types and the driver-facing alert value.
//!
//! The transport that delivers controls messages is an external collaborator;
//! this module only models its per-tick view: the latest snapshot, whether it
//! changed this tick, and the receipt bookkeeping the staleness policy needs.

use core::time::Duration;

use heapless::String;
use thiserror::Error;

use crate::config::ALERT_TEXT_LEN;

/// One line of alert text, bounded for `no_std` use.
pub type AlertText = String<ALERT_TEXT_LEN>;

/// How much of the screen an alert claims.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertSize {
    /// No alert visible.
    #[default]
    None,
    /// Single-line banner.
    Small,
    /// Two-line banner.
    Mid,
    /// Full-screen takeover.
    Full,
}

/// Audible tone accompanying an alert.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudibleAlert {
    /// Silent.
    #[default]
    None,
    Engage,
    Disengage,
    Prompt,
    Warning1,
    Warning2,
    WarningRepeat,
    /// Urgent tone played without repeat delay. Used for controls loss.
    WarningImmediate,
    Error,
}

/// Malformed telemetry input, recovered locally and never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TelemetryError {
    /// An alert text line does not fit the bounded capacity.
    #[error("alert text exceeds {ALERT_TEXT_LEN} bytes")]
    TextTooLong,
    /// The receipt timestamp claims to be ahead of the monotonic clock.
    #[error("receipt timestamp {received:?} is ahead of now {now:?}")]
    ReceiptInFuture { received: Duration, now: Duration },
    /// The feed reported a fresh message but supplied no snapshot.
    #[error("feed marked updated without a snapshot")]
    MissingSnapshot,
}

/// Immutable view of the most recent controls-state message.
///
/// Produced by the feed collaborator; read-only to this core.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TelemetrySnapshot {
    pub text1: AlertText,
    pub text2: AlertText,
    pub alert_type: AlertText,
    pub size: AlertSize,
    pub sound: AudibleAlert,
    /// Monotonic time the underlying message was generated.
    pub generated: Duration,
    /// Monotonic time the message was received locally.
    pub received: Duration,
}

impl TelemetrySnapshot {
    /// Build a snapshot from wire-decoded fields, bounding the text lines.
    pub fn new(
        text1: &str,
        text2: &str,
        alert_type: &str,
        size: AlertSize,
        sound: AudibleAlert,
        generated: Duration,
        received: Duration,
    ) -> Result<Self, TelemetryError> {
        Ok(Self {
            text1: bounded_text(text1)?,
            text2: bounded_text(text2)?,
            alert_type: bounded_text(alert_type)?,
            size,
            sound,
            generated,
            received,
        })
    }

    /// Check the snapshot's shape against the current clock reading.
    pub fn validate(&self, now: Duration) -> Result<(), TelemetryError> {
        if self.received > now {
            return Err(TelemetryError::ReceiptInFuture {
                received: self.received,
                now,
            });
        }
        Ok(())
    }
}

pub(crate) fn bounded_text(s: &str) -> Result<AlertText, TelemetryError> {
    let mut out = AlertText::new();
    if out.push_str(s).is_err() {
        return Err(TelemetryError::TextTooLong);
    }
    Ok(out)
}

/// The alert value this core emits each tick.
///
/// Two alerts are equal iff all five fields match; line order matters and
/// text and sound must match exactly. [`Alert::NONE`] (all fields empty,
/// silent) means "nothing to display".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Alert {
    pub text1: AlertText,
    pub text2: AlertText,
    pub alert_type: AlertText,
    pub size: AlertSize,
    pub sound: AudibleAlert,
}

impl Alert {
    /// The empty alert.
    pub const NONE: Self = Self {
        text1: AlertText::new(),
        text2: AlertText::new(),
        alert_type: AlertText::new(),
        size: AlertSize::None,
        sound: AudibleAlert::None,
    };

    /// Build the alert directly from a snapshot's five fields.
    pub fn from_snapshot(snapshot: &TelemetrySnapshot) -> Self {
        Self {
            text1: snapshot.text1.clone(),
            text2: snapshot.text2.clone(),
            alert_type: snapshot.alert_type.clone(),
            size: snapshot.size,
            sound: snapshot.sound,
        }
    }

    /// True if this is the empty alert.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

/// Per-tick view of the controls stream, handed in by the feed collaborator.
#[derive(Clone, Copy, Debug)]
pub struct ControlsFeed<'a> {
    /// Whether a new controls message arrived since the previous tick.
    pub updated: bool,
    /// Latest known snapshot regardless of `updated`, if any exists.
    pub snapshot: Option<&'a TelemetrySnapshot>,
    /// Monotonic time of the last local receipt.
    pub last_received: Duration,
    /// Whether any controls message has been received since stream start.
    pub ever_received: bool,
}
