//! Task model for the pet-care planning engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::recurrence::Recurrence;

/// Lifecycle of a placed task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

/// Owner's preferred time-of-day for a task.
///
/// The derived `Ord` is the tie-break order used by prioritization:
/// morning before flexible before evening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferredTime {
    Morning = 0,
    Flexible = 1,
    Evening = 2,
}

/// One unit of care work attached to a pet.
///
/// Kept small + serializable; storage is a separate layer (`pawpal-store`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub pet_id: String,
    pub name: String,

    /// Minutes.
    pub duration_minutes: u32,

    /// 1-5, 5 most urgent. Clamped into range at construction.
    pub priority: u8,

    /// Free-form label, e.g. "feeding", "walk", "medication".
    pub category: String,

    /// Medication-related tasks outrank everything and may be placed
    /// past the end of the availability window.
    pub medical: bool,

    pub preferred_time: PreferredTime,

    /// Cadence for repeating tasks. `None` means one-off.
    pub recurrence: Option<Recurrence>,

    /// Set after a recurring instance is completed.
    pub next_due: Option<NaiveDate>,
}

impl Task {
    pub fn new(id: impl Into<String>, pet_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            pet_id: pet_id.into(),
            name: name.into(),
            duration_minutes: 15,
            priority: 3,
            category: "general".to_string(),
            medical: false,
            preferred_time: PreferredTime::Flexible,
            recurrence: None,
            next_due: None,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes.max(1);
        self
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority.clamp(1, 5);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn medical(mut self) -> Self {
        self.medical = true;
        self
    }

    pub fn with_preferred_time(mut self, preferred: PreferredTime) -> Self {
        self.preferred_time = preferred;
        self
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = Some(recurrence);
        self
    }

    /// Whether this task is due on `date`. One-off tasks are always due.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        match &self.recurrence {
            Some(r) => r.occurs_on(date, self.next_due),
            None => true,
        }
    }

    /// Next occurrence strictly after `completed_on`. `None` for one-off tasks.
    pub fn next_due_on(&self, completed_on: NaiveDate) -> Option<NaiveDate> {
        self.recurrence.as_ref().map(|r| r.next_due_on(completed_on))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn priority_is_clamped_into_range() {
        let t = Task::new("t1", "p1", "Walk").with_priority(9);
        assert_eq!(t.priority, 5);
        let t = Task::new("t2", "p1", "Walk").with_priority(0);
        assert_eq!(t.priority, 1);
    }

    #[test]
    fn one_off_task_occurs_any_day() {
        let t = Task::new("t1", "p1", "Nail trim");
        assert!(t.occurs_on(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()));
        assert!(t.occurs_on(NaiveDate::from_ymd_opt(2026, 7, 1).unwrap()));
    }

    #[test]
    fn one_off_task_has_no_next_due() {
        let t = Task::new("t1", "p1", "Nail trim");
        assert_eq!(t.next_due_on(NaiveDate::from_ymd_opt(2026, 2, 15).unwrap()), None);
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let t = Task::new("t1", "p1", "Morning Walk")
            .with_duration(30)
            .with_priority(5)
            .with_category("walk")
            .with_preferred_time(PreferredTime::Morning)
            .with_recurrence(Recurrence::Daily);

        let json = serde_json::to_string(&t).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(t, back);
    }
}
