//! Traits shared by the scheduling engine

use chrono::NaiveDateTime;

/// Anything that occupies a closed span of local time
pub trait TimeSpan {
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;

    /// Whether `instant` lies in `[start, end]` (both ends included)
    fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start() && instant <= self.end()
    }

    /// Length of the span, in whole minutes
    fn duration_minutes(&self) -> i64 {
        (self.end() - self.start()).num_minutes()
    }
}

/// A bare `[start, end]` pair, for callers that have no [`Event`](crate::Event) at hand
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }
}

impl TimeSpan for Interval {
    fn start(&self) -> NaiveDateTime { self.start }
    fn end(&self) -> NaiveDateTime { self.end }
}
