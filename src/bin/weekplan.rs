use std::error::Error;
use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

use week_planner::cache::ScheduleFile;
use week_planner::hit_test::{find_day_at, find_event_at};
use week_planner::utils::{print_event, print_week, tooltip_lines};
use week_planner::validator::business_hours_label;
use week_planner::{EventColor, EventDraft, EventId, GridGeometry};

#[derive(Parser)]
#[command(name = "weekplan")]
#[command(about = "Plan the events of a week", long_about = None)]
struct Cli {
    /// The file the schedule is stored in
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start a new schedule for the week of the given Monday (YYYY-MM-DD)
    Init {
        monday: NaiveDate,
    },
    /// Add a new event
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
        #[arg(long)]
        date: NaiveDate,
        /// HH:MM
        #[arg(long, value_parser = parse_time)]
        start: NaiveTime,
        /// HH:MM
        #[arg(long, value_parser = parse_time)]
        end: NaiveTime,
        #[arg(long, default_value = "red")]
        color: EventColor,
    },
    /// Change some fields of an existing event
    Edit {
        id: EventId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        location: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, value_parser = parse_time)]
        start: Option<NaiveTime>,
        #[arg(long, value_parser = parse_time)]
        end: Option<NaiveTime>,
        #[arg(long)]
        color: Option<EventColor>,
    },
    /// Delete an event
    Remove {
        id: EventId,
    },
    /// List the events of the displayed week
    Week,
    /// List the events of a single day
    Day {
        date: NaiveDate,
    },
    /// Tell what lies under a pixel of the week grid
    At {
        x: i32,
        y: i32,
    },
    /// Print the events of the displayed week as an iCal file
    Export,
}

fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M").map_err(|err| format!("invalid time {:?} (expected HH:MM): {}", s, err))
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let path = cli.file.clone().unwrap_or_else(ScheduleFile::default_file);

    if let Err(err) = run(cli.command, path) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

fn run(command: Command, path: PathBuf) -> Result<(), Box<dyn Error>> {
    if let Command::Init { monday } = command {
        let file = ScheduleFile::new(&path, monday)?;
        file.save_to_file()?;
        println!("New schedule for the week of {} saved to {:?}", monday, path);
        return Ok(());
    }

    let mut file = match ScheduleFile::from_file(&path) {
        Ok(file) => file,
        Err(err) => {
            log::warn!("Invalid schedule file: {}", err);
            return Err(format!("No usable schedule in {:?}, run `weekplan init <MONDAY>` first", path).into());
        }
    };
    let grid = GridGeometry::default();

    match command {
        // handled above
        Command::Init { .. } => return Err("The schedule is already initialized".into()),
        Command::Add { name, location, date, start, end, color } => {
            let draft = EventDraft { name, location, date, start_time: start, end_time: end, color };
            let id = file.schedule_mut().add(draft.build()?)?;
            file.save_to_file()?;
            println!("Added event {}", id);
        },
        Command::Edit { id, name, location, date, start, end, color } => {
            let current = file.schedule().get(id).ok_or(week_planner::RejectReason::NotFound(id))?;
            let mut draft = EventDraft::from_event(current);
            if let Some(name) = name { draft.name = name; }
            if let Some(location) = location { draft.location = location; }
            if let Some(date) = date { draft.date = date; }
            if let Some(start) = start { draft.start_time = start; }
            if let Some(end) = end { draft.end_time = end; }
            if let Some(color) = color { draft.color = color; }

            file.schedule_mut().update(id, &draft)?;
            file.save_to_file()?;
            println!("Updated event {}", id);
        },
        Command::Remove { id } => {
            file.schedule_mut().remove(id)?;
            file.save_to_file()?;
            println!("Removed event {}", id);
        },
        Command::Week => {
            print_week(file.schedule());
        },
        Command::Day { date } => {
            println!("{} ({})", date.format("%A, %B %-d, %Y"), business_hours_label(date));
            for event in file.schedule().events_on(date) {
                print_event(event);
            }
        },
        Command::At { x, y } => {
            if let Some(date) = find_day_at(x, y, file.schedule(), &grid) {
                println!("Header of {}", date.format("%A %m/%d"));
            } else if let Some(event) = find_event_at(x, y, file.schedule(), &grid) {
                for line in tooltip_lines(event) {
                    println!("{}", line);
                }
            } else {
                println!("Nothing here");
            }
        },
        Command::Export => {
            print!("{}", week_planner::ical::build_week(file.schedule())?);
        },
    }
    Ok(())
}
