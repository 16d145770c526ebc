//! Admission rules for candidate events
//!
//! Rules are checked in this order, and the first failing one is reported:
//! 1. duration between 30 minutes and 3 hours
//! 2. business hours of the weekday the event starts on (nothing on Sundays)
//! 3. at most 30 minutes of overlap with every other event

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};

use crate::error::{RejectReason, ValidationResult};
use crate::event::Event;
use crate::overlap::{intervals_overlap, overlap_minutes};
use crate::traits::TimeSpan;

pub const MIN_DURATION_MINUTES: i64 = 30;
pub const MAX_DURATION_MINUTES: i64 = 180;
pub const OVERLAP_TOLERANCE_MINUTES: i64 = 30;

/// The `(first, last)` hours events may start and end at on a given weekday,
/// or `None` when no event is allowed on that day
pub fn business_hours(weekday: Weekday) -> Option<(u32, u32)> {
    match weekday {
        Weekday::Sun => None,
        Weekday::Sat => Some((8, 15)),
        _ => Some((8, 20)),
    }
}

/// Whether `instant` falls during the business hours of its day.
/// The last hour is excluded: 20:00 on a Tuesday is not "during" business hours anymore.
pub fn is_within_business_hours(instant: NaiveDateTime) -> bool {
    match business_hours(instant.weekday()) {
        None => false,
        Some((first, last)) => instant.hour() >= first && instant.hour() < last,
    }
}

/// The label a daily view shows to remind the user of the allowed hours
pub fn business_hours_label(date: NaiveDate) -> &'static str {
    match date.weekday() {
        Weekday::Sun => "No Events Allowed",
        Weekday::Sat => "Work Hours: 8:00 AM - 3:00 PM",
        _ => "Work Hours: 8:00 AM - 8:00 PM",
    }
}

/// Decide whether `candidate` may join `existing`.
///
/// An event of `existing` that has the same id as the candidate is its previous version, and is skipped.
pub fn validate<'a, I>(candidate: &Event, existing: I) -> ValidationResult
where
    I: IntoIterator<Item = &'a Event>,
{
    check(candidate, existing).into()
}

/// Same as [`validate`], as a `Result` so that it can be chained with `?`
pub fn check<'a, I>(candidate: &Event, existing: I) -> Result<(), RejectReason>
where
    I: IntoIterator<Item = &'a Event>,
{
    check_duration(candidate)?;
    check_business_hours(candidate)?;
    check_overlaps(candidate, existing)
}

fn check_duration(candidate: &Event) -> Result<(), RejectReason> {
    let minutes = candidate.duration_minutes();
    if minutes < MIN_DURATION_MINUTES || minutes > MAX_DURATION_MINUTES {
        return Err(RejectReason::DurationOutOfRange { minutes });
    }
    Ok(())
}

// Only the hour fields are compared: an event ending at 20:45 on a weekday is accepted.
fn check_business_hours(candidate: &Event) -> Result<(), RejectReason> {
    let weekday = candidate.start().weekday();
    match business_hours(weekday) {
        None => Err(RejectReason::DayNotAllowed),
        Some((first, last)) => {
            if candidate.start().hour() < first || candidate.end().hour() > last {
                Err(RejectReason::OutsideBusinessHours { weekday })
            } else {
                Ok(())
            }
        },
    }
}

fn check_overlaps<'a, I>(candidate: &Event, existing: I) -> Result<(), RejectReason>
where
    I: IntoIterator<Item = &'a Event>,
{
    for other in existing {
        if other.id() == candidate.id() {
            continue;
        }
        if intervals_overlap(other, candidate) {
            let minutes = overlap_minutes(other, candidate);
            if minutes > OVERLAP_TOLERANCE_MINUTES {
                return Err(RejectReason::ExcessiveOverlap { other: other.id(), minutes });
            }
        }
    }
    Ok(())
}
