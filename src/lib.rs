//! This crate is the engine of a single-user weekly scheduler.
//!
//! A [`WeekSchedule`] holds the events of the user, and decides which new events may be admitted,
//! using the rules of the [`validator`] module (duration, business hours, overlap tolerance).
//!
//! The week is rendered on a 7-day × 12-hour grid. The [`geometry`] module maps calendar times to grid pixels and back,
//! and [`hit_test`] tells which event the user clicked on.
//!
//! Schedules can be saved to and loaded from a local file with the [`cache`] module, and exported as iCal files with [`ical`].

pub mod traits;

mod color;
pub use color::{EventColor, UnknownColor};
mod event;
pub use event::{Event, EventDraft, EventId, MAX_FIELD_LENGTH};
pub mod error;
pub use error::{RejectReason, ScheduleError, ValidationResult};
pub mod schedule;
pub use schedule::WeekSchedule;

pub mod overlap;
pub mod validator;
pub mod geometry;
pub use geometry::GridGeometry;
pub mod hit_test;

pub mod cache;
pub mod ical;

pub mod config;
pub mod utils;
