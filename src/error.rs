//! Outcomes of scheduling operations
//!
//! A rejection is an expected answer to bad user input, never a fault: every operation of a
//! [`WeekSchedule`](crate::WeekSchedule) returns one of these as a plain value.

use std::fmt::{Display, Formatter};

use chrono::{NaiveDate, Weekday};

use crate::event::EventId;

/// The text fields of an event
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Location,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            Field::Name => write!(f, "Name"),
            Field::Location => write!(f, "Location"),
        }
    }
}

/// Why a candidate event was not admitted into the schedule
#[derive(Clone, Debug, PartialEq)]
pub enum RejectReason {
    /// The event lasts less than 30 minutes or more than 3 hours
    DurationOutOfRange { minutes: i64 },
    /// The event falls on a Sunday
    DayNotAllowed,
    /// The event starts or ends outside the business hours of its weekday
    OutsideBusinessHours { weekday: Weekday },
    /// The event overlaps `other` by more than the tolerance
    ExcessiveOverlap { other: EventId, minutes: i64 },
    /// A text field is empty or too long (`length` is counted in characters)
    InvalidField { field: Field, length: usize },
    /// No event has this id
    NotFound(EventId),
}

impl Display for RejectReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            RejectReason::DurationOutOfRange { minutes } => write!(f,
                "Event duration must be between 30 minutes minimum and 3 hours maximum (got {} minutes)", minutes),
            RejectReason::DayNotAllowed => write!(f, "No events allowed on Sunday"),
            RejectReason::OutsideBusinessHours { weekday: Weekday::Sat } => write!(f,
                "Saturday events must be between 8 AM and 3 PM"),
            RejectReason::OutsideBusinessHours { .. } => write!(f,
                "Weekday events must be between 8 AM and 8 PM"),
            RejectReason::ExcessiveOverlap { other, minutes } => write!(f,
                "Events cannot overlap by more than 30 minutes ({} minutes with event {})", minutes, other),
            RejectReason::InvalidField { field, length: 0 } => write!(f, "{} is required", field),
            RejectReason::InvalidField { field, length } => write!(f,
                "{} must be 32 characters or less (got {})", field, length),
            RejectReason::NotFound(id) => write!(f, "No event with id {}", id),
        }
    }
}

impl std::error::Error for RejectReason {}

/// The verdict of the validator on a candidate event
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationResult {
    Accepted,
    Rejected(RejectReason),
}

impl ValidationResult {
    pub fn is_accepted(&self) -> bool {
        match self {
            ValidationResult::Accepted => true,
            _ => false,
        }
    }

    pub fn into_result(self) -> Result<(), RejectReason> {
        match self {
            ValidationResult::Accepted => Ok(()),
            ValidationResult::Rejected(reason) => Err(reason),
        }
    }
}

impl From<Result<(), RejectReason>> for ValidationResult {
    fn from(res: Result<(), RejectReason>) -> Self {
        match res {
            Ok(()) => ValidationResult::Accepted,
            Err(reason) => ValidationResult::Rejected(reason),
        }
    }
}

/// Errors that prevent a schedule from being built at all
#[derive(Clone, Debug, PartialEq)]
pub enum ScheduleError {
    /// The week must be anchored on a Monday
    NotAMonday(NaiveDate),
    /// A persisted event breaks the invariants every stored event must hold
    CorruptEvent { id: EventId, reason: RejectReason },
}

impl Display for ScheduleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        match self {
            ScheduleError::NotAMonday(date) => write!(f,
                "{} is a {}, the week must start on a Monday", date, date.format("%A")),
            ScheduleError::CorruptEvent { id, reason } => write!(f, "Invalid stored event {}: {}", id, reason),
        }
    }
}

impl std::error::Error for ScheduleError {}
