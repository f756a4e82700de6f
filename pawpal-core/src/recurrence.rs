//! Recurrence cadence rules and next-occurrence date arithmetic.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Cadence for a repeating task.
///
/// A closed variant per cadence; each carries exactly the data its
/// arithmetic needs. Weekday sets are only meaningful for `Weekly`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recurrence {
    Daily,
    /// Alternate-day cadence, anchored at the last completion date.
    EveryOtherDay,
    /// Occurs on the listed weekdays.
    Weekly(Vec<Weekday>),
}

impl Recurrence {
    /// Whether a task with this cadence is due on `date`.
    ///
    /// `anchor` is the task's recorded next-due date, set when the previous
    /// instance was completed. `EveryOtherDay` needs it to know which days
    /// are "on": with no anchor yet the task is eligible on any day; once
    /// anchored it occurs on the anchor and every second day after it.
    pub fn occurs_on(&self, date: NaiveDate, anchor: Option<NaiveDate>) -> bool {
        match self {
            Recurrence::Daily => true,
            Recurrence::EveryOtherDay => match anchor {
                Some(due) => date >= due && (date - due).num_days() % 2 == 0,
                None => true,
            },
            Recurrence::Weekly(days) => days.contains(&date.weekday()),
        }
    }

    /// Earliest occurrence strictly after `completed_on`.
    ///
    /// `Weekly` searches the next 1..=7 days for a listed weekday; an empty
    /// weekday set falls back to the same day next week.
    pub fn next_due_on(&self, completed_on: NaiveDate) -> NaiveDate {
        match self {
            Recurrence::Daily => completed_on + Duration::days(1),
            Recurrence::EveryOtherDay => completed_on + Duration::days(2),
            Recurrence::Weekly(days) => {
                for offset in 1..=7 {
                    let candidate = completed_on + Duration::days(offset);
                    if days.contains(&candidate.weekday()) {
                        return candidate;
                    }
                }
                completed_on + Duration::days(7)
            }
        }
    }
}
