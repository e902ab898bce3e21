//! Column ordering.
//!
//! "Prioritized" leads, "Done" trails. `by_status` is deliberately kept as
//! the board has always ordered columns, which is not a total order: for two
//! ordinary columns it answers `Less` in both directions. `sort_columns`
//! therefore cannot go through `slice::sort_by` (which may panic on such
//! comparators) and uses its own insertion sort instead.

use super::Column;
use std::cmp::Ordering;

pub const PRIORITIZED: &str = "Prioritized";
pub const DONE: &str = "Done";

/// Compare two columns by status name.
pub fn by_status(i: &Column, j: &Column) -> Ordering {
    if i.name == PRIORITIZED {
        Ordering::Less
    } else if i.name == DONE {
        Ordering::Greater
    } else if j.name == PRIORITIZED {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

/// `a` goes before `b` only when `by_status` says so one-sidedly.
fn precedes(a: &Column, b: &Column) -> bool {
    by_status(a, b) == Ordering::Less && by_status(b, a) != Ordering::Less
}

/// Order columns for display.
///
/// Contradictory verdicts leave the pair in source order.
pub fn sort_columns(mut columns: Vec<Column>) -> Vec<Column> {
    for i in 1..columns.len() {
        let mut j = i;
        while j > 0 && precedes(&columns[j], &columns[j - 1]) {
            columns.swap(j, j - 1);
            j -= 1;
        }
    }
    columns
}
