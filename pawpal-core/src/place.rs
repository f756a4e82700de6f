//! Greedy time-slot placement within the availability window.

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::availability::AvailabilityWindow;
use crate::schedule::ScheduledTask;
use crate::task::{Task, TaskStatus};

/// Add minutes to a time-of-day with minute-to-hour carry.
///
/// Placement never rolls past midnight; a sum that would cross it clamps to
/// 23:59 so an oversized medical placement late in the day keeps the
/// end-after-start invariant.
pub fn add_minutes(t: NaiveTime, minutes: u32) -> NaiveTime {
    let total = (t.hour() * 60 + t.minute() + minutes).min(23 * 60 + 59);
    NaiveTime::from_hms_opt(total / 60, total % 60, 0).unwrap_or(t)
}

/// Assign start/end times to tasks in their prioritized order.
///
/// A single cursor starts at the window's start. Each task's candidate end
/// is cursor + duration; the task is placed when that end fits the window,
/// or unconditionally when the task is medical (urgency overrides
/// availability). Placing advances the cursor; skipping leaves it where it
/// was so a later, smaller task can still use the remaining time.
///
/// The result is re-sorted by start time so callers always receive time
/// order regardless of the urgency order used for placement.
pub fn place(
    ordered: &[Task],
    window: &AvailabilityWindow,
    date: NaiveDate,
) -> Vec<ScheduledTask> {
    let mut cursor = window.start;
    let mut placed = Vec::new();

    for task in ordered {
        let end = add_minutes(cursor, task.duration_minutes);
        if end <= window.end || task.medical {
            placed.push(ScheduledTask {
                task_id: task.id.clone(),
                pet_id: task.pet_id.clone(),
                name: task.name.clone(),
                start: cursor,
                end,
                status: TaskStatus::Pending,
                date,
            });
            cursor = end;
        }
    }

    placed.sort_by_key(|t| t.start);
    placed
}
