//! Scheduled events

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::color::EventColor;
use crate::error::{Field, RejectReason};
use crate::traits::TimeSpan;

/// Names and locations may not be longer than this many characters
pub const MAX_FIELD_LENGTH: usize = 32;


/// A stable identifier, assigned once when an event is created and kept across edits
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId {
    content: Uuid,
}

impl EventId {
    /// Generate a random EventId.
    pub fn random() -> Self {
        Self { content: Uuid::new_v4() }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.content
    }
}

impl From<Uuid> for EventId {
    fn from(uuid: Uuid) -> Self {
        Self { content: uuid }
    }
}

impl FromStr for EventId {
    type Err = uuid::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let u = Uuid::parse_str(s)?;
        Ok(Self::from(u))
    }
}

impl Display for EventId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.content.to_hyphenated())
    }
}


/// A time-boxed event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    id: EventId,
    name: String,
    location: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    color: EventColor,
}

impl Event {
    /// Create a brand new event, with a new (random) id.
    ///
    /// Only the text fields are checked here. Scheduling rules (duration, business hours, overlaps)
    /// are enforced when the event is submitted to a [`WeekSchedule`](crate::WeekSchedule).
    pub fn new(name: &str, location: &str, start: NaiveDateTime, end: NaiveDateTime, color: EventColor) -> Result<Self, RejectReason> {
        Self::new_with_id(EventId::random(), name, location, start, end, color)
    }

    /// Create an event that keeps an existing id, e.g. the revised version of an edited event
    pub fn new_with_id(id: EventId, name: &str, location: &str, start: NaiveDateTime, end: NaiveDateTime, color: EventColor) -> Result<Self, RejectReason> {
        let name = check_field(Field::Name, name)?;
        let location = check_field(Field::Location, location)?;
        Ok(Self { id, name, location, start, end, color })
    }

    pub fn id(&self) -> EventId           { self.id }
    pub fn name(&self) -> &str            { &self.name }
    pub fn location(&self) -> &str        { &self.location }
    pub fn color(&self) -> EventColor     { self.color }
    pub fn date(&self) -> NaiveDate       { self.start.date() }

    /// Whether all the fields but the id are equal
    pub fn has_same_content_as(&self, other: &Event) -> bool {
           self.name == other.name
        && self.location == other.location
        && self.start == other.start
        && self.end == other.end
        && self.color == other.color
    }
}

impl TimeSpan for Event {
    fn start(&self) -> NaiveDateTime { self.start }
    fn end(&self) -> NaiveDateTime { self.end }
}

/// Trim a text field and check it holds 1 to 32 characters
fn check_field(field: Field, value: &str) -> Result<String, RejectReason> {
    let value = value.trim();
    let length = value.chars().count();
    if length == 0 || length > MAX_FIELD_LENGTH {
        return Err(RejectReason::InvalidField { field, length });
    }
    Ok(value.to_string())
}


/// The raw content of an event form: one date, two times of day, and the text fields as typed
#[derive(Clone, Debug, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub location: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub color: EventColor,
}

impl EventDraft {
    /// Pre-fill a form with the content of an existing event
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            location: event.location.clone(),
            date: event.start.date(),
            start_time: event.start.time(),
            end_time: event.end.time(),
            color: event.color,
        }
    }

    pub fn start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    pub fn end(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time)
    }

    /// Build a new candidate event from this form
    pub fn build(&self) -> Result<Event, RejectReason> {
        Event::new(&self.name, &self.location, self.start(), self.end(), self.color)
    }

    /// Build the revised version of the event `id` from this form
    pub fn build_with_id(&self, id: EventId) -> Result<Event, RejectReason> {
        Event::new_with_id(id, &self.name, &self.location, self.start(), self.end(), self.color)
    }
}
