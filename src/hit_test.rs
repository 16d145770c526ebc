//! Finding what the user clicked on

use chrono::{Duration, NaiveDate};

use crate::event::Event;
use crate::geometry::GridGeometry;
use crate::schedule::WeekSchedule;
use crate::traits::TimeSpan;

/// The event under the pixel `(x, y)`, if any.
///
/// Clicks outside the rendered hours return `None`.
/// When two (tolerably) overlapping events contain the clicked minute, the one that was stored first wins.
pub fn find_event_at<'a>(x: i32, y: i32, schedule: &'a WeekSchedule, grid: &GridGeometry) -> Option<&'a Event> {
    let grid_time = grid.point_to_time(x, y)?;
    if !grid_time.is_in_band() {
        return None;
    }
    let instant = grid_time.on_week_of(schedule.anchor_monday())?;

    let found = schedule.events_in_week()
        .into_iter()
        .find(|ev| ev.contains(instant));
    match found {
        Some(ev) => log::debug!("Click at ({}, {}) ({}) hits event {}", x, y, instant, ev.id()),
        None => log::debug!("Click at ({}, {}) ({}) hits no event", x, y, instant),
    }
    found
}

/// The date whose header was clicked, used to open its daily view
pub fn find_day_at(x: i32, y: i32, schedule: &WeekSchedule, grid: &GridGeometry) -> Option<NaiveDate> {
    let day = grid.header_day_at(x, y)?;
    Some(schedule.anchor_monday() + Duration::days(day as i64))
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::EventColor;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    fn event(name: &str, day_offset: i64, h1: u32, m1: u32, h2: u32, m2: u32) -> Event {
        let day = monday() + Duration::days(day_offset);
        Event::new(name, "Room A", day.and_hms_opt(h1, m1, 0).unwrap(), day.and_hms_opt(h2, m2, 0).unwrap(), EventColor::Gray).unwrap()
    }

    #[test]
    fn both_ends_are_inclusive() {
        let grid = GridGeometry::default();
        let mut schedule = WeekSchedule::new(monday()).unwrap();
        let id = schedule.add(event("A", 1, 9, 0, 10, 0)).unwrap();

        let (x, y) = grid.time_to_point(1, 9, 0);
        assert_eq!(find_event_at(x + 10, y, &schedule, &grid).map(|ev| ev.id()), Some(id));
        let (x, y) = grid.time_to_point(1, 10, 0);
        assert_eq!(find_event_at(x + 10, y, &schedule, &grid).map(|ev| ev.id()), Some(id));
        let (x, y) = grid.time_to_point(1, 10, 1);
        assert!(find_event_at(x + 10, y, &schedule, &grid).is_none());
        let (x, y) = grid.time_to_point(2, 9, 30);
        assert!(find_event_at(x + 10, y, &schedule, &grid).is_none());
    }

    #[test]
    fn first_stored_event_wins() {
        let grid = GridGeometry::default();
        let mut schedule = WeekSchedule::new(monday()).unwrap();
        let first = schedule.add(event("First", 0, 9, 0, 10, 0)).unwrap();
        schedule.add(event("Second", 0, 9, 40, 10, 40)).unwrap();

        let (x, y) = grid.time_to_point(0, 9, 50);
        assert_eq!(find_event_at(x, y, &schedule, &grid).map(|ev| ev.id()), Some(first));
    }

    #[test]
    fn other_weeks_are_ignored() {
        let grid = GridGeometry::default();
        let mut schedule = WeekSchedule::new(monday()).unwrap();
        schedule.add(event("Next week", 8, 9, 0, 10, 0)).unwrap();

        let (x, y) = grid.time_to_point(1, 9, 30);
        assert!(find_event_at(x, y, &schedule, &grid).is_none());
    }

    #[test]
    fn clicks_off_the_grid() {
        let grid = GridGeometry::default();
        let mut schedule = WeekSchedule::new(monday()).unwrap();
        schedule.add(event("Morning", 0, 8, 0, 9, 0)).unwrap();

        assert!(find_event_at(10, 60, &schedule, &grid).is_none());
        assert!(find_event_at(60, 10, &schedule, &grid).is_none());
        assert!(find_event_at(60, 5000, &schedule, &grid).is_none());
    }

    #[test]
    fn header_clicks() {
        let grid = GridGeometry::default();
        let schedule = WeekSchedule::new(monday()).unwrap();
        assert_eq!(find_day_at(60, 20, &schedule, &grid), Some(monday()));
        assert_eq!(find_day_at(50 + 3 * 150 + 1, 20, &schedule, &grid), Some(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()));
        assert_eq!(find_day_at(60, 60, &schedule, &grid), None);
    }
}
