//! pawpal-core: scheduling engine for single-day pet-care planning.

pub mod availability;
pub mod conflict;
pub mod owner;
pub mod place;
pub mod planner;
pub mod prioritize;
pub mod recurrence;
pub mod schedule;
pub mod task;

pub use availability::AvailabilityWindow;
pub use conflict::{detect_conflicts, overlaps, Conflict};
pub use owner::{Owner, Pet};
pub use place::{add_minutes, place};
pub use planner::Planner;
pub use prioritize::prioritize;
pub use recurrence::Recurrence;
pub use schedule::{mark_complete, DailySchedule, ScheduledTask, UnplacedTask};
pub use task::{PreferredTime, Task, TaskStatus};
