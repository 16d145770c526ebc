//! Some utility functions

pub mod comparison;

use chrono::{NaiveDateTime, Timelike};

use crate::event::Event;
use crate::schedule::WeekSchedule;
use crate::traits::TimeSpan;

/// `HH:MM`
pub fn format_time(dt: NaiveDateTime) -> String {
    format!("{:02}:{:02}", dt.hour(), dt.minute())
}

/// `HH:MM-HH:MM`, as written on event blocks
pub fn format_time_range(event: &Event) -> String {
    format!("{}-{}", format_time(event.start()), format_time(event.end()))
}

/// The lines of the tooltip shown when hovering an event
pub fn tooltip_lines(event: &Event) -> Vec<String> {
    vec![
        event.name().to_string(),
        format!("Location: {}", event.location()),
        format!("Time: {} - {}", format_time(event.start()), format_time(event.end())),
    ]
}

/// An entry of the daily list: `HH:MM-HH:MM: name (location)`
pub fn list_entry(event: &Event) -> String {
    format!("{}: {} ({})", format_time_range(event), event.name(), event.location())
}

/// A debug utility that pretty-prints the displayed week
pub fn print_week(schedule: &WeekSchedule) {
    for date in schedule.week_dates() {
        println!("{} {}", date.format("%a %m/%d"), crate::validator::business_hours_label(date));
        for event in schedule.events_on(date) {
            print_event(event);
        }
    }
}

pub fn print_event(event: &Event) {
    println!("    {}\t{}\t{}", list_entry(event), event.color(), event.id());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::color::EventColor;

    fn standup() -> Event {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        Event::new("Standup", "Room A", day.and_hms_opt(9, 5, 0).unwrap(), day.and_hms_opt(10, 0, 0).unwrap(), EventColor::Blue).unwrap()
    }

    #[test]
    fn formatting() {
        let ev = standup();
        assert_eq!(format_time_range(&ev), "09:05-10:00");
        assert_eq!(list_entry(&ev), "09:05-10:00: Standup (Room A)");
        assert_eq!(tooltip_lines(&ev), vec!["Standup", "Location: Room A", "Time: 09:05 - 10:00"]);
    }
}
