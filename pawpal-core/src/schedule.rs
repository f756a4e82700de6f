//! The daily schedule value: placements, conflicts, queries, completion.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityWindow;
use crate::conflict::Conflict;
use crate::task::{Task, TaskStatus};

/// One task placed at a concrete time on one date.
///
/// `task_id` is a lookup key back into the owning pet's task list; the
/// placement never copies mutable task state. `name` and `pet_id` are
/// immutable display copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub task_id: String,
    pub pet_id: String,
    pub name: String,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub status: TaskStatus,
    pub date: NaiveDate,
}

/// A task that was due on the day but did not fit the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnplacedTask {
    pub task_id: String,
    pub pet_id: String,
    pub name: String,
    pub duration_minutes: u32,
    pub priority: u8,
}

/// The planning result for one owner on one date.
///
/// Produced once by `Planner::plan_day`; selection, placement, conflicts,
/// and the explanation are generation-time values. The only later mutation
/// is per-task status via `mark_complete`, which deliberately does not
/// refresh conflicts or the explanation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySchedule {
    pub owner: String,
    pub date: NaiveDate,
    pub tasks: Vec<ScheduledTask>,
    pub conflicts: Vec<Conflict>,
    pub unplaced: Vec<UnplacedTask>,
    pub window: AvailabilityWindow,
    pub explanation: String,
}

impl DailySchedule {
    /// Placed tasks sorted by start time (hour, then minute).
    pub fn tasks_by_time(&self) -> Vec<&ScheduledTask> {
        let mut out: Vec<&ScheduledTask> = self.tasks.iter().collect();
        out.sort_by_key(|t| t.start);
        out
    }

    pub fn tasks_by_pet(&self, pet_id: &str) -> Vec<&ScheduledTask> {
        let mut out: Vec<&ScheduledTask> =
            self.tasks.iter().filter(|t| t.pet_id == pet_id).collect();
        out.sort_by_key(|t| t.start);
        out
    }

    pub fn tasks_by_status(&self, status: TaskStatus) -> Vec<&ScheduledTask> {
        let mut out: Vec<&ScheduledTask> =
            self.tasks.iter().filter(|t| t.status == status).collect();
        out.sort_by_key(|t| t.start);
        out
    }

    /// Tasks fully contained in `[from, to]`: a placement that merely brushes
    /// the range edges is excluded.
    pub fn tasks_in_range(&self, from: NaiveTime, to: NaiveTime) -> Vec<&ScheduledTask> {
        let mut out: Vec<&ScheduledTask> = self
            .tasks
            .iter()
            .filter(|t| t.start >= from && t.end <= to)
            .collect();
        out.sort_by_key(|t| t.start);
        out
    }

    pub fn has_conflicts(&self) -> bool {
        !self.conflicts.is_empty()
    }

    /// One line per conflicting pair, naming both tasks and their ranges.
    pub fn conflict_summary(&self) -> String {
        let mut lines = Vec::new();
        for c in &self.conflicts {
            let (Some(a), Some(b)) = (self.tasks.get(c.first), self.tasks.get(c.second)) else {
                continue;
            };
            lines.push(format!(
                "Conflict: {} ({} - {}) overlaps {} ({} - {})",
                a.name,
                a.start.format("%H:%M"),
                a.end.format("%H:%M"),
                b.name,
                b.start.format("%H:%M"),
                b.end.format("%H:%M"),
            ));
        }
        lines.join("\n")
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }
}

/// Complete a placed task.
///
/// Sets the placement's status and, for recurring tasks, records the next
/// due date on the source task. The caller resolves `task` by the
/// placement's `task_id` (see `Owner::task_mut`). This is the only
/// post-construction write path; placement, ordering, and conflicts are
/// never recomputed.
pub fn mark_complete(
    scheduled: &mut ScheduledTask,
    task: &mut Task,
    completed_on: NaiveDate,
) -> String {
    scheduled.status = TaskStatus::Completed;

    match task.next_due_on(completed_on) {
        Some(next) => {
            task.next_due = Some(next);
            format!("Completed '{}'. Next due {}.", scheduled.name, next)
        }
        None => format!("Completed '{}'.", scheduled.name),
    }
}
