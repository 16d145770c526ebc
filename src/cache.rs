//! This module stores a schedule in a local file

use std::path::PathBuf;
use std::path::Path;
use std::error::Error;

use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

use crate::event::Event;
use crate::schedule::WeekSchedule;


/// A schedule, and the file it is persisted to
#[derive(Debug, PartialEq)]
pub struct ScheduleFile {
    backing_file: PathBuf,
    schedule: WeekSchedule,
}

/// The on-disk shape
#[derive(Debug, Serialize, Deserialize)]
struct StoredData {
    anchor_monday: NaiveDate,
    events: Vec<Event>,
}

impl ScheduleFile {
    /// Get the path to the data file, as set in [`DEFAULT_DATA_FILE`](crate::config::DEFAULT_DATA_FILE)
    pub fn default_file() -> PathBuf {
        PathBuf::from(crate::config::get(&crate::config::DEFAULT_DATA_FILE))
    }

    /// Load a schedule from the content of a valid backing file.
    ///
    /// Returns an error if the file is missing or holds anything invalid. Nothing is recovered from a corrupt file:
    /// the caller is expected to start over from a new anchor date.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn Error>> {
        let data: StoredData = match std::fs::File::open(path) {
            Err(err) => {
                return Err(format!("Unable to open file {:?}: {}", path, err).into());
            },
            Ok(file) => serde_json::from_reader(std::io::BufReader::new(file))?,
        };

        let schedule = WeekSchedule::from_parts(data.anchor_monday, data.events)?;
        log::info!("Loaded {} events from {:?}", schedule.events().len(), path);
        Ok(Self{
            backing_file: PathBuf::from(path),
            schedule,
        })
    }

    /// Start a new, empty schedule, that will be saved to `path`
    pub fn new(path: &Path, anchor_monday: NaiveDate) -> Result<Self, Box<dyn Error>> {
        Ok(Self{
            backing_file: PathBuf::from(path),
            schedule: WeekSchedule::new(anchor_monday)?,
        })
    }

    pub fn path(&self) -> &Path {
        &self.backing_file
    }

    pub fn schedule(&self) -> &WeekSchedule {
        &self.schedule
    }

    /// Mutable access to the schedule. Call [`Self::save_to_file`] after every successful change
    pub fn schedule_mut(&mut self) -> &mut WeekSchedule {
        &mut self.schedule
    }

    /// Store the current schedule to its backing file
    pub fn save_to_file(&self) -> Result<(), Box<dyn Error>> {
        let path = &self.backing_file;
        let file = match std::fs::File::create(path) {
            Err(err) => {
                return Err(format!("Unable to save file {:?}: {}", path, err).into());
            },
            Ok(f) => f,
        };

        let data = StoredData {
            anchor_monday: self.schedule.anchor_monday(),
            events: self.schedule.events().to_vec(),
        };
        serde_json::to_writer_pretty(file, &data)?;
        log::info!("Saved {} events to {:?}", data.events.len(), path);
        Ok(())
    }
}
