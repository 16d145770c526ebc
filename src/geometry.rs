//! Mapping between calendar time and the pixels of the week grid
//!
//! The grid has a header band on top (day names), a time column on the left (hour labels),
//! then 7 day columns (Monday to Sunday) by 12 one-hour rows (08:00 to 20:00).
//!
//! Minutes are the finest unit. Pixel offsets inside a row are truncated in both directions, so
//! that a pixel always maps back to the minute that starts at or before it.
//! With an `hour_height` that is a multiple of 60, every minute of the band round-trips exactly.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::traits::TimeSpan;
use crate::validator::is_within_business_hours;

/// The first hour shown by the grid
pub const FIRST_HOUR: u32 = 8;
/// The grid stops at this hour (excluded)
pub const LAST_HOUR: u32 = 20;
/// Number of one-hour rows
pub const HOURS_SHOWN: u32 = LAST_HOUR - FIRST_HOUR;
/// Number of day columns
pub const DAYS_SHOWN: u32 = 7;

/// Horizontal room left on each side of an event block, inside its day column
const BLOCK_MARGIN: i32 = 5;

/// A point of the week, relative to its Monday
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct GridTime {
    /// 0 for Monday, up to 6 for Sunday
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
}

impl GridTime {
    pub fn new(day: u32, hour: u32, minute: u32) -> Self {
        Self { day, hour, minute }
    }

    /// Whether this time lies in the hours the grid renders
    pub fn is_in_band(&self) -> bool {
        self.day < DAYS_SHOWN && self.hour >= FIRST_HOUR && self.hour < LAST_HOUR && self.minute < 60
    }

    /// The calendar date and time this grid time stands for, in the week starting on `monday`.
    /// Returns `None` when the hour does not exist on a clock (e.g. far below the grid)
    pub fn on_week_of(&self, monday: NaiveDate) -> Option<NaiveDateTime> {
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0)?;
        let date = monday.checked_add_signed(Duration::days(self.day as i64))?;
        Some(date.and_time(time))
    }

    /// The grid time of a calendar date and time, whatever its week
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Self {
            day: dt.weekday().num_days_from_monday(),
            hour: dt.hour(),
            minute: dt.minute(),
        }
    }
}

/// A rectangle, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Pixel metrics of the week grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridGeometry {
    pub day_width: i32,
    pub hour_height: i32,
    pub header_height: i32,
    pub time_column_width: i32,
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self {
            day_width: 150,
            hour_height: 60,
            header_height: 50,
            time_column_width: 50,
        }
    }
}

impl GridGeometry {
    /// The `(width, height)` the whole grid needs
    pub fn preferred_size(&self) -> (i32, i32) {
        (
            self.time_column_width + self.day_width * DAYS_SHOWN as i32,
            self.header_height + self.hour_height * HOURS_SHOWN as i32,
        )
    }

    /// Top-left pixel of the given day, hour and minute.
    ///
    /// Hours outside the rendered band are not rejected: they map above or below the grid, and it is up to the renderer to clip them.
    pub fn time_to_point(&self, day: u32, hour: u32, minute: u32) -> (i32, i32) {
        let x = self.time_column_width + day as i32 * self.day_width;
        let y = self.header_height
            + (hour as i32 - FIRST_HOUR as i32) * self.hour_height
            + minute as i32 * self.hour_height / 60;
        (x, y)
    }

    /// The day, hour and minute under a pixel.
    ///
    /// Returns `None` above the header line or left of the time column.
    /// Points right of the last column belong to Sunday. Points below the last row yield hours past the band,
    /// see [`GridTime::is_in_band`].
    pub fn point_to_time(&self, x: i32, y: i32) -> Option<GridTime> {
        if x < self.time_column_width || y < self.header_height {
            return None;
        }
        let day = ((x - self.time_column_width) / self.day_width).min(DAYS_SHOWN as i32 - 1);
        let minutes_from_top = (y - self.header_height) as i64 * 60 / self.hour_height as i64;
        let hour = FIRST_HOUR as i64 + minutes_from_top / 60;
        let minute = minutes_from_top % 60;
        Some(GridTime::new(day as u32, hour as u32, minute as u32))
    }

    /// The day column whose header band contains this pixel, if any
    pub fn header_day_at(&self, x: i32, y: i32) -> Option<u32> {
        if y < 0 || y >= self.header_height || x <= self.time_column_width {
            return None;
        }
        let day = (x - self.time_column_width) / self.day_width;
        if day < DAYS_SHOWN as i32 {
            Some(day as u32)
        } else {
            None
        }
    }

    /// The block an event is painted in, or `None` if it does not start in the week of `monday`
    pub fn event_rect<E: TimeSpan + ?Sized>(&self, event: &E, monday: NaiveDate) -> Option<Rect> {
        let start = event.start();
        let end = event.end();
        let offset = (start.date() - monday).num_days();
        if offset < 0 || offset >= DAYS_SHOWN as i64 {
            return None;
        }

        let (column_x, y) = self.time_to_point(offset as u32, start.hour(), start.minute());
        let hours = end.hour() as i32 - start.hour() as i32;
        let minutes = end.minute() as i32 - start.minute() as i32;
        Some(Rect {
            x: column_x + BLOCK_MARGIN,
            y,
            width: self.day_width - 2 * BLOCK_MARGIN,
            height: hours * self.hour_height + minutes * self.hour_height / 60,
        })
    }

    /// Vertical position of the "current time" line, if `now` falls during business hours
    pub fn now_line_y(&self, now: NaiveDateTime) -> Option<i32> {
        if !is_within_business_hours(now) {
            return None;
        }
        let (_, y) = self.time_to_point(now.weekday().num_days_from_monday(), now.hour(), now.minute());
        Some(y)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Interval;

    fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    #[test]
    fn legacy_metrics() {
        let grid = GridGeometry::default();
        assert_eq!(grid.preferred_size(), (1100, 770));
        assert_eq!(grid.time_to_point(0, 8, 0), (50, 50));
        assert_eq!(grid.time_to_point(1, 9, 30), (200, 140));
        assert_eq!(grid.time_to_point(6, 19, 59), (950, 769));
    }

    #[test]
    fn hours_outside_the_band_are_not_clipped() {
        let grid = GridGeometry::default();
        assert_eq!(grid.time_to_point(2, 7, 0), (350, -10));
        assert_eq!(grid.time_to_point(2, 21, 0), (350, 830));
    }

    #[test]
    fn round_trip_every_minute() {
        for grid in [GridGeometry::default(), GridGeometry { hour_height: 120, ..GridGeometry::default() }].iter() {
            for day in 0..DAYS_SHOWN {
                for hour in FIRST_HOUR..LAST_HOUR {
                    for minute in 0..60 {
                        let (x, y) = grid.time_to_point(day, hour, minute);
                        assert_eq!(grid.point_to_time(x, y), Some(GridTime::new(day, hour, minute)));
                    }
                }
            }
        }
    }

    #[test]
    fn pixels_inside_a_minute_truncate() {
        let grid = GridGeometry { hour_height: 120, ..GridGeometry::default() };
        // 09:30 starts at y = 50 + 120 + 60; the next pixel is still 09:30
        assert_eq!(grid.point_to_time(60, 231), Some(GridTime::new(0, 9, 30)));
        assert_eq!(grid.point_to_time(60, 232), Some(GridTime::new(0, 9, 31)));
        // last pixel of a column
        assert_eq!(grid.point_to_time(199, 50), Some(GridTime::new(0, 8, 0)));
        assert_eq!(grid.point_to_time(200, 50), Some(GridTime::new(1, 8, 0)));
    }

    #[test]
    fn points_off_the_grid() {
        let grid = GridGeometry::default();
        assert_eq!(grid.point_to_time(49, 300), None);
        assert_eq!(grid.point_to_time(300, 49), None);
        // Right of Sunday
        assert_eq!(grid.point_to_time(5000, 50), Some(GridTime::new(6, 8, 0)));
        // Below the last row
        let below = grid.point_to_time(250, 50 + 15 * 60).unwrap();
        assert_eq!(below, GridTime::new(1, 23, 0));
        assert!(!below.is_in_band());
    }

    #[test]
    fn header_clicks() {
        let grid = GridGeometry::default();
        assert_eq!(grid.header_day_at(60, 10), Some(0));
        assert_eq!(grid.header_day_at(1099, 49), Some(6));
        assert_eq!(grid.header_day_at(1100, 10), None);
        assert_eq!(grid.header_day_at(40, 10), None);
        assert_eq!(grid.header_day_at(60, 50), None);
    }

    #[test]
    fn event_blocks() {
        let grid = GridGeometry::default();
        let tuesday = monday().succ_opt().unwrap();
        let ev = Interval::new(tuesday.and_hms_opt(9, 0, 0).unwrap(), tuesday.and_hms_opt(10, 30, 0).unwrap());
        assert_eq!(grid.event_rect(&ev, monday()), Some(Rect { x: 205, y: 110, width: 140, height: 90 }));

        let block = grid.event_rect(&ev, monday()).unwrap();
        assert!(block.contains(205, 110));
        assert!(!block.contains(345, 110));

        let next_week = Interval::new(ev.start + Duration::days(7), ev.end + Duration::days(7));
        assert_eq!(grid.event_rect(&next_week, monday()), None);
    }

    #[test]
    fn now_line() {
        let grid = GridGeometry::default();
        let tuesday = monday().succ_opt().unwrap();
        assert_eq!(grid.now_line_y(tuesday.and_hms_opt(12, 15, 0).unwrap()), Some(305));
        assert_eq!(grid.now_line_y(tuesday.and_hms_opt(20, 0, 0).unwrap()), None);
        let sunday = monday() + Duration::days(6);
        assert_eq!(grid.now_line_y(sunday.and_hms_opt(12, 0, 0).unwrap()), None);
    }

    #[test]
    fn grid_time_to_date() {
        let t = GridTime::new(1, 9, 30);
        assert!(t.is_in_band());
        let dt = t.on_week_of(monday()).unwrap();
        assert_eq!(dt, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(9, 30, 0).unwrap());
        assert_eq!(GridTime::from_datetime(dt), t);
        assert_eq!(GridTime::new(1, 25, 0).on_week_of(monday()), None);
    }
}
