//! Pairwise overlap detection over placed tasks.

use serde::{Deserialize, Serialize};

use crate::schedule::ScheduledTask;

/// A pair of placed tasks whose intervals overlap.
///
/// Holds indices into the schedule's task list rather than copies, so a
/// conflict always refers to the placements the schedule owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    pub first: usize,
    pub second: usize,
}

/// Two placements overlap when each starts before the other ends.
/// Exact touch (one's end equals the other's start) is not an overlap.
pub fn overlaps(a: &ScheduledTask, b: &ScheduledTask) -> bool {
    a.start < b.end && b.start < a.end
}

/// All-pairs scan. Every overlapping pair is reported independently; three
/// mutually overlapping tasks yield three conflicts. Quadratic, which is
/// fine at realistic task counts (tens).
pub fn detect_conflicts(placed: &[ScheduledTask]) -> Vec<Conflict> {
    let mut out = Vec::new();
    for i in 0..placed.len() {
        for j in (i + 1)..placed.len() {
            if overlaps(&placed[i], &placed[j]) {
                out.push(Conflict { first: i, second: j });
            }
        }
    }
    out
}
