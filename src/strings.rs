//! Locale-keyed alert text.
//!
//! Literal alert strings are data, not control flow: the staleness policy
//! picks an [`AlertKind`], and the table maps `(kind, locale)` to the exact
//! display text. Swapping the target locale never touches the policy.

/// Display locale for built-in alert text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ko,
}

/// Built-in alerts this core can raise on its own (without a controls
/// message to copy text from).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    /// Controls process has never come up since stream start.
    ControlsNotReady,
    /// Controls process was alive but has stopped responding.
    ControlsNotResponding,
}

/// Text bundle for one alert in one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct AlertStrings {
    pub text1: &'static str,
    pub text2: &'static str,
    pub alert_type: &'static str,
}

const NOT_READY_EN: AlertStrings = AlertStrings {
    text1: "openpilot Unavailable",
    text2: "Waiting for controls to start",
    alert_type: "controlsWaiting",
};

const NOT_RESPONDING_EN: AlertStrings = AlertStrings {
    text1: "TAKE CONTROL IMMEDIATELY",
    text2: "Controls Unresponsive",
    alert_type: "controlsUnresponsive",
};

const NOT_READY_KO: AlertStrings = AlertStrings {
    text1: "오픈파일럿을 사용할수없습니다",
    text2: "프로세스가 준비중입니다",
    alert_type: "프로세스가 준비중입니다",
};

const NOT_RESPONDING_KO: AlertStrings = AlertStrings {
    text1: "핸들을 잡아주세요",
    text2: "프로세스가 응답하지않습니다",
    alert_type: "프로세스가 응답하지않습니다",
};

/// Look up the display text for `kind` in `locale`.
pub const fn lookup(kind: AlertKind, locale: Locale) -> &'static AlertStrings {
    match (kind, locale) {
        (AlertKind::ControlsNotReady, Locale::En) => &NOT_READY_EN,
        (AlertKind::ControlsNotResponding, Locale::En) => &NOT_RESPONDING_EN,
        (AlertKind::ControlsNotReady, Locale::Ko) => &NOT_READY_KO,
        (AlertKind::ControlsNotResponding, Locale::Ko) => &NOT_RESPONDING_KO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ALERT_TEXT_LEN;

    const ALL: [(AlertKind, Locale); 4] = [
        (AlertKind::ControlsNotReady, Locale::En),
        (AlertKind::ControlsNotResponding, Locale::En),
        (AlertKind::ControlsNotReady, Locale::Ko),
        (AlertKind::ControlsNotResponding, Locale::Ko),
    ];

    #[test]
    fn test_all_strings_fit_alert_text_capacity() {
        for (kind, locale) in ALL {
            let s = lookup(kind, locale);
            for text in [s.text1, s.text2, s.alert_type] {
                assert!(
                    text.len() <= ALERT_TEXT_LEN,
                    "{kind:?}/{locale:?} text {text:?} exceeds {ALERT_TEXT_LEN} bytes"
                );
            }
        }
    }

    #[test]
    fn test_korean_strings_are_exact() {
        let ready = lookup(AlertKind::ControlsNotReady, Locale::Ko);
        assert_eq!(ready.text1, "오픈파일럿을 사용할수없습니다");
        assert_eq!(ready.text2, "프로세스가 준비중입니다");

        let dead = lookup(AlertKind::ControlsNotResponding, Locale::Ko);
        assert_eq!(dead.text1, "핸들을 잡아주세요");
        assert_eq!(dead.text2, "프로세스가 응답하지않습니다");
    }

    #[test]
    fn test_kinds_have_distinct_text() {
        for locale in [Locale::En, Locale::Ko] {
            let ready = lookup(AlertKind::ControlsNotReady, locale);
            let dead = lookup(AlertKind::ControlsNotResponding, locale);
            assert_ne!(ready.text1, dead.text1, "the two failure modes must read differently");
        }
    }
}
