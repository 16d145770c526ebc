//! Utilities to compare custom types
//!
//! These can be used to sort results, e.g. with `sort_by`

use std::cmp::Ordering;

use crate::event::Event;
use crate::traits::TimeSpan;

/// Compare events chronologically, by start then end time
pub fn compare_events_chrono(left: &&Event, right: &&Event) -> Ordering {
    left.start().cmp(&right.start())
        .then_with(|| left.end().cmp(&right.end()))
}
