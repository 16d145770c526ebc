//! A module to build ICal files

use std::error::Error;

use chrono::{DateTime, NaiveDateTime, Utc};
use ics::properties::{Categories, DtEnd, DtStart, Location, Summary};
use ics::ICalendar;

use crate::event::Event;
use crate::schedule::WeekSchedule;
use crate::traits::TimeSpan;

/// Create an iCal file holding one `VEVENT` per event.
///
/// Times are written as floating local times (no `TZID`), since the schedule knows a single local calendar only.
pub fn build_from<'a, I>(events: I, dtstamp: DateTime<Utc>) -> Result<String, Box<dyn Error>>
where
    I: IntoIterator<Item = &'a Event>,
{
    let s_dtstamp = format_utc_date_time(&dtstamp);
    let mut calendar = ICalendar::new("2.0", super::default_prod_id());

    for event in events {
        if event.end() <= event.start() {
            return Err(format!("Event {} ends before it starts", event.id()).into());
        }
        let mut vevent = ics::Event::new(event.id().to_string(), s_dtstamp.clone());
        vevent.push(Summary::new(ics::escape_text(event.name().to_string())));
        vevent.push(Location::new(ics::escape_text(event.location().to_string())));
        vevent.push(DtStart::new(format_date_time(&event.start())));
        vevent.push(DtEnd::new(format_date_time(&event.end())));
        vevent.push(Categories::new(event.color().name().to_uppercase()));
        calendar.add_event(vevent);
    }

    Ok(calendar.to_string())
}

/// Create an iCal file holding the events of the displayed week
pub fn build_week(schedule: &WeekSchedule) -> Result<String, Box<dyn Error>> {
    build_from(schedule.events_in_week(), Utc::now())
}

fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format("%Y%m%dT%H%M%S").to_string()
}

fn format_utc_date_time(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%dT%H%M%SZ").to_string()
}


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};
    use crate::color::EventColor;

    #[test]
    fn test_ical_from_event() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        let event = Event::new("Standup, daily", "Room A",
            day.and_hms_opt(9, 0, 0).unwrap(), day.and_hms_opt(10, 0, 0).unwrap(), EventColor::Blue).unwrap();
        let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

        let expected_ical = format!("BEGIN:VCALENDAR\r\n\
            VERSION:2.0\r\n\
            PRODID:{}\r\n\
            BEGIN:VEVENT\r\n\
            UID:{}\r\n\
            DTSTAMP:20240301T120000Z\r\n\
            SUMMARY:Standup\\, daily\r\n\
            LOCATION:Room A\r\n\
            DTSTART:20240305T090000\r\n\
            DTEND:20240305T100000\r\n\
            CATEGORIES:BLUE\r\n\
            END:VEVENT\r\n\
            END:VCALENDAR\r\n", crate::ical::default_prod_id(), event.id());

        let ical = build_from(std::iter::once(&event), stamp);
        assert_eq!(ical.unwrap(), expected_ical);
    }

    #[test]
    fn test_empty_week() {
        let schedule = WeekSchedule::new(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()).unwrap();
        let ical = build_week(&schedule).unwrap();
        assert!(ical.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(!ical.contains("BEGIN:VEVENT"));
    }
}
