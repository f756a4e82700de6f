//! Prioritization: the order in which the placer attempts tasks.

use crate::task::Task;

/// Order tasks for placement.
///
/// Medical tasks come first, sorted by priority descending; a priority-1
/// medication outranks a priority-5 walk. Non-medical tasks follow, sorted
/// by priority descending and then preferred time-of-day
/// (morning, flexible, evening). Both sorts are stable, so equal keys keep
/// their original relative order.
pub fn prioritize(tasks: Vec<Task>) -> Vec<Task> {
    let (mut medical, mut rest): (Vec<Task>, Vec<Task>) =
        tasks.into_iter().partition(|t| t.medical);

    medical.sort_by(|a, b| b.priority.cmp(&a.priority));
    rest.sort_by(|a, b| {
        b.priority
            .cmp(&a.priority)
            .then_with(|| a.preferred_time.cmp(&b.preferred_time))
    });

    medical.extend(rest);
    medical
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::PreferredTime;

    #[test]
    fn medical_outranks_high_priority_non_medical() {
        let walk = Task::new("t1", "p1", "Play").with_priority(5);
        let meds = Task::new("med1", "p1", "Medication")
            .with_priority(1)
            .medical();

        let ordered = prioritize(vec![walk, meds]);
        assert_eq!(ordered[0].id, "med1");
        assert_eq!(ordered[1].id, "t1");
    }

    #[test]
    fn non_medical_sorted_by_priority_descending() {
        let tasks = vec![
            Task::new("t1", "p1", "a").with_priority(3),
            Task::new("t2", "p1", "b").with_priority(5),
            Task::new("t3", "p1", "c").with_priority(1),
        ];
        let ordered = prioritize(tasks);
        let priorities: Vec<u8> = ordered.iter().map(|t| t.priority).collect();
        assert_eq!(priorities, vec![5, 3, 1]);
    }

    #[test]
    fn equal_priority_breaks_ties_by_preferred_time() {
        let tasks = vec![
            Task::new("t3", "p1", "Evening Task")
                .with_priority(3)
                .with_preferred_time(PreferredTime::Evening),
            Task::new("t2", "p1", "Flexible Task")
                .with_priority(3)
                .with_preferred_time(PreferredTime::Flexible),
            Task::new("t1", "p1", "Morning Task")
                .with_priority(3)
                .with_preferred_time(PreferredTime::Morning),
        ];
        let ordered = prioritize(tasks);
        let ids: Vec<&str> = ordered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["t1", "t2", "t3"]);
    }

    #[test]
    fn full_ties_keep_arrival_order() {
        let tasks = vec![
            Task::new("first", "p1", "a").with_priority(4),
            Task::new("second", "p1", "b").with_priority(4),
        ];
        let ordered = prioritize(tasks);
        assert_eq!(ordered[0].id, "first");
        assert_eq!(ordered[1].id, "second");
    }

    #[test]
    fn medical_block_sorted_by_priority_among_itself() {
        let tasks = vec![
            Task::new("m1", "p1", "eye drops").with_priority(2).medical(),
            Task::new("m2", "p1", "insulin").with_priority(5).medical(),
            Task::new("t1", "p1", "walk").with_priority(5),
        ];
        let ordered = prioritize(tasks);
        let ids: Vec<&str> = ordered.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["m2", "m1", "t1"]);
    }
}
