//! Owner availability windows: parsing and the default fallback.

use std::sync::OnceLock;

use chrono::NaiveTime;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// The contiguous time-of-day span non-medical tasks must fit inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

fn window_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*(\d{1,2})(?::(\d{2}))?\s*-\s*(\d{1,2})(?::(\d{2}))?\s*$")
            .expect("window pattern is valid")
    })
}

impl AvailabilityWindow {
    /// 09:00-17:00, used whenever an owner's window string cannot be read.
    pub fn default_window() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or(NaiveTime::MIN),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or(NaiveTime::MIN),
        }
    }

    /// Parse `"HH:MM-HH:MM"` (24-hour clock). Bare-hour forms like `"9-17"`
    /// are tolerated. Returns `None` for anything malformed, out of range,
    /// or not strictly start-before-end.
    pub fn parse(s: &str) -> Option<Self> {
        let caps = window_re().captures(s)?;

        let part = |h: usize, m: usize| -> Option<NaiveTime> {
            let hour: u32 = caps.get(h)?.as_str().parse().ok()?;
            let minute: u32 = match caps.get(m) {
                Some(v) => v.as_str().parse().ok()?,
                None => 0,
            };
            NaiveTime::from_hms_opt(hour, minute, 0)
        };

        let start = part(1, 2)?;
        let end = part(3, 4)?;
        (start < end).then_some(Self { start, end })
    }

    /// The window the planner consults: the first entry of the owner's
    /// availability list, falling back to 09:00-17:00 when the list is
    /// empty or its first entry is malformed.
    pub fn first_of(windows: &[String]) -> Self {
        windows
            .first()
            .and_then(|s| Self::parse(s))
            .unwrap_or_else(Self::default_window)
    }
}

impl Default for AvailabilityWindow {
    fn default() -> Self {
        Self::default_window()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn parses_full_form() {
        let w = AvailabilityWindow::parse("09:00-17:30").unwrap();
        assert_eq!(w.start, t(9, 0));
        assert_eq!(w.end, t(17, 30));
    }

    #[test]
    fn parses_bare_hours() {
        let w = AvailabilityWindow::parse("9-17").unwrap();
        assert_eq!(w.start, t(9, 0));
        assert_eq!(w.end, t(17, 0));
    }

    #[test]
    fn parses_mixed_form_with_spaces() {
        let w = AvailabilityWindow::parse(" 9:30 - 12 ").unwrap();
        assert_eq!(w.start, t(9, 30));
        assert_eq!(w.end, t(12, 0));
    }

    #[test]
    fn rejects_malformed_and_inverted() {
        assert!(AvailabilityWindow::parse("").is_none());
        assert!(AvailabilityWindow::parse("whenever").is_none());
        assert!(AvailabilityWindow::parse("25-26").is_none());
        assert!(AvailabilityWindow::parse("9:61-17:00").is_none());
        assert!(AvailabilityWindow::parse("17-9").is_none());
        assert!(AvailabilityWindow::parse("9-9").is_none());
    }

    #[test]
    fn first_of_falls_back_to_default() {
        assert_eq!(
            AvailabilityWindow::first_of(&[]),
            AvailabilityWindow::default_window()
        );
        assert_eq!(
            AvailabilityWindow::first_of(&["Mon-Fri: sometime".to_string()]),
            AvailabilityWindow::default_window()
        );
    }

    #[test]
    fn first_of_ignores_later_entries() {
        let windows = vec!["9-12".to_string(), "14-18".to_string()];
        let w = AvailabilityWindow::first_of(&windows);
        assert_eq!(w.end, t(12, 0));
    }
}
