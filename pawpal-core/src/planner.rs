//! Day planning: wires recurrence filtering, prioritization, placement,
//! and conflict detection into one entry point.

use chrono::NaiveDate;

use crate::availability::AvailabilityWindow;
use crate::conflict::{detect_conflicts, Conflict};
use crate::owner::Owner;
use crate::place::place;
use crate::prioritize::prioritize;
use crate::schedule::{DailySchedule, ScheduledTask, UnplacedTask};
use crate::task::Task;

/// Plans one calendar day for one owner.
#[derive(Debug, Clone)]
pub struct Planner<'a> {
    owner: &'a Owner,
}

impl<'a> Planner<'a> {
    pub fn new(owner: &'a Owner) -> Self {
        Self { owner }
    }

    /// Build the day's schedule for `date`.
    ///
    /// Pipeline: collect the day's due tasks across all pets, order them
    /// (medical first), greedily place them in the availability window,
    /// scan the placements for overlaps, and render the explanation. The
    /// returned value is final except for per-task status updates.
    pub fn plan_day(&self, date: NaiveDate) -> DailySchedule {
        let window = AvailabilityWindow::first_of(&self.owner.availability);

        let due: Vec<Task> = self
            .owner
            .pets
            .iter()
            .flat_map(|p| p.tasks.iter())
            .filter(|t| t.occurs_on(date))
            .cloned()
            .collect();

        let ordered = prioritize(due);
        let placed = place(&ordered, &window, date);
        let conflicts = detect_conflicts(&placed);

        let unplaced: Vec<UnplacedTask> = ordered
            .iter()
            .filter(|t| !placed.iter().any(|p| p.task_id == t.id))
            .map(|t| UnplacedTask {
                task_id: t.id.clone(),
                pet_id: t.pet_id.clone(),
                name: t.name.clone(),
                duration_minutes: t.duration_minutes,
                priority: t.priority,
            })
            .collect();

        let explanation =
            self.render_explanation(date, &window, &ordered, &placed, &conflicts, &unplaced);

        DailySchedule {
            owner: self.owner.name.clone(),
            date,
            tasks: placed,
            conflicts,
            unplaced,
            window,
            explanation,
        }
    }

    fn render_explanation(
        &self,
        date: NaiveDate,
        window: &AvailabilityWindow,
        ordered: &[Task],
        placed: &[ScheduledTask],
        conflicts: &[Conflict],
        unplaced: &[UnplacedTask],
    ) -> String {
        let pet_label = |pet_id: &str| -> String {
            self.owner
                .pet_name(pet_id)
                .unwrap_or(pet_id)
                .to_string()
        };
        let priority_of = |task_id: &str| -> u8 {
            ordered
                .iter()
                .find(|t| t.id == task_id)
                .map(|t| t.priority)
                .unwrap_or(0)
        };

        let mut s = String::new();
        s.push_str(&format!("Plan for {} on {}\n\n", self.owner.name, date));

        s.push_str("Scheduled:\n");
        if placed.is_empty() {
            s.push_str("- No tasks could be scheduled.\n");
        }
        for p in placed {
            s.push_str(&format!(
                "- {} - {}  {} ({}) [priority {}]\n",
                p.start.format("%H:%M"),
                p.end.format("%H:%M"),
                p.name,
                pet_label(&p.pet_id),
                priority_of(&p.task_id),
            ));
        }

        if !unplaced.is_empty() {
            s.push_str("\nUnable to Schedule:\n");
            for u in unplaced {
                s.push_str(&format!(
                    "- {} ({}): {} min, priority {}\n",
                    u.name,
                    pet_label(&u.pet_id),
                    u.duration_minutes,
                    u.priority,
                ));
            }
        }

        if !conflicts.is_empty() {
            s.push_str("\nConflicts:\n");
            for c in conflicts {
                let (Some(a), Some(b)) = (placed.get(c.first), placed.get(c.second)) else {
                    continue;
                };
                s.push_str(&format!(
                    "- {} ({} - {}) overlaps {} ({} - {})\n",
                    a.name,
                    a.start.format("%H:%M"),
                    a.end.format("%H:%M"),
                    b.name,
                    b.start.format("%H:%M"),
                    b.end.format("%H:%M"),
                ));
            }
        }

        s.push_str(&format!(
            "\nAvailability window: {} - {}\n",
            window.start.format("%H:%M"),
            window.end.format("%H:%M"),
        ));

        s
    }
}
