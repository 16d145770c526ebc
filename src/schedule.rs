//! The in-memory schedule, and the only place events are added, edited or removed

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use crate::error::{RejectReason, ScheduleError, ValidationResult};
use crate::event::{Event, EventDraft, EventId};
use crate::geometry::DAYS_SHOWN;
use crate::traits::TimeSpan;
use crate::utils::comparison::compare_events_chrono;
use crate::validator;


/// A week anchored on a Monday, and the events of the user.
///
/// Events may belong to other weeks; they are kept, but never listed by [`WeekSchedule::events_in_week`].
/// Every event went through the [`validator`](crate::validator) against all the others when it was stored.
#[derive(Clone, Debug, PartialEq)]
pub struct WeekSchedule {
    anchor_monday: NaiveDate,
    events: Vec<Event>,
}

impl WeekSchedule {
    /// Create an empty schedule displaying the week of `anchor_monday`
    pub fn new(anchor_monday: NaiveDate) -> Result<Self, ScheduleError> {
        Self::from_parts(anchor_monday, Vec::new())
    }

    /// Rebuild a schedule from persisted content.
    ///
    /// The events are checked for well-formed fields only: they were validated against each other when they were first stored.
    pub fn from_parts(anchor_monday: NaiveDate, events: Vec<Event>) -> Result<Self, ScheduleError> {
        if anchor_monday.weekday() != Weekday::Mon {
            return Err(ScheduleError::NotAMonday(anchor_monday));
        }
        for event in &events {
            if let Err(reason) = Event::new_with_id(event.id(), event.name(), event.location(), event.start(), event.end(), event.color()) {
                return Err(ScheduleError::CorruptEvent { id: event.id(), reason });
            }
            if event.end() <= event.start() {
                return Err(ScheduleError::CorruptEvent {
                    id: event.id(),
                    reason: RejectReason::DurationOutOfRange { minutes: event.duration_minutes() },
                });
            }
        }
        Ok(Self { anchor_monday, events })
    }

    pub fn anchor_monday(&self) -> NaiveDate {
        self.anchor_monday
    }

    /// The seven dates of the displayed week, Monday first
    pub fn week_dates(&self) -> Vec<NaiveDate> {
        (0..DAYS_SHOWN as i64)
            .map(|offset| self.anchor_monday + Duration::days(offset))
            .collect()
    }

    /// Whether `date` lies in the displayed week
    pub fn is_in_week(&self, date: NaiveDate) -> bool {
        let offset = (date - self.anchor_monday).num_days();
        offset >= 0 && offset < DAYS_SHOWN as i64
    }

    /// Every stored event, in insertion order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|ev| ev.id() == id)
    }

    /// Tell whether `candidate` could be added (or, if its id is already known, could replace its stored version)
    pub fn validate(&self, candidate: &Event) -> ValidationResult {
        validator::validate(candidate, &self.events)
    }

    /// Store a new event, if it passes the validation rules.
    /// The schedule is unchanged when it is rejected.
    pub fn add(&mut self, candidate: Event) -> Result<EventId, RejectReason> {
        if self.get(candidate.id()).is_some() {
            log::warn!("Event {} is already stored, it will be updated instead", candidate.id());
        }
        if let Err(reason) = validator::check(&candidate, &self.events) {
            log::warn!("Rejected new event {:?}: {}", candidate.name(), reason);
            return Err(reason);
        }

        let id = candidate.id();
        log::debug!("Adding event {} ({:?})", id, candidate.name());
        match self.position(id) {
            Some(index) => self.events[index] = candidate,
            None => self.events.push(candidate),
        }
        Ok(id)
    }

    /// Replace the event `id` with the content of `revised`.
    ///
    /// The event keeps its id and its position. It is not compared against its own previous version.
    pub fn update(&mut self, id: EventId, revised: &EventDraft) -> Result<(), RejectReason> {
        let index = self.position(id).ok_or(RejectReason::NotFound(id))?;
        let candidate = revised.build_with_id(id)?;

        if let Err(reason) = validator::check(&candidate, &self.events) {
            log::warn!("Rejected changes to event {}: {}", id, reason);
            return Err(reason);
        }

        log::debug!("Updating event {} ({:?})", id, candidate.name());
        self.events[index] = candidate;
        Ok(())
    }

    /// Remove the event `id`. No validation is needed, and no confirmation is asked.
    pub fn remove(&mut self, id: EventId) -> Result<(), RejectReason> {
        match self.position(id) {
            None => Err(RejectReason::NotFound(id)),
            Some(index) => {
                let removed = self.events.remove(index);
                log::debug!("Removed event {} ({:?})", id, removed.name());
                Ok(())
            },
        }
    }

    /// The events starting on `date`, in chronological order
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter()
            .filter(|ev| ev.date() == date)
            .collect();
        events.sort_by(compare_events_chrono);
        events
    }

    /// The events starting in the displayed week, in insertion order
    pub fn events_in_week(&self) -> Vec<&Event> {
        self.events.iter()
            .filter(|ev| self.is_in_week(ev.date()))
            .collect()
    }

    fn position(&self, id: EventId) -> Option<usize> {
        self.events.iter().position(|ev| ev.id() == id)
    }
}
