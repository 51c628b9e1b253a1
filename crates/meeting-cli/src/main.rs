//! `meetfind` CLI — find meeting times in a day's schedule from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Resolve the request in a schedule file (stdin → stdout, JSON)
//! meetfind query < schedule.json
//!
//! # Human-readable slots, overriding the requested duration
//! meetfind query -i schedule.json --format text --duration 45
//!
//! # Collapsed busy intervals for two attendees
//! meetfind busy -i schedule.json --attendee alice --attendee bob
//!
//! # Log the resolver's decisions to stderr
//! MEETFIND_LOG=meeting_engine=debug meetfind query -i schedule.json
//! ```
//!
//! The input document has the shape
//! `{"events": [{"title", "when": {"start", "end"}, "attendees"}], "request": {...}}`
//! with all times in minutes since midnight.

use std::collections::HashSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::NaiveTime;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use meeting_engine::{Attendance, Event, MeetingRequest, MeetingTimes, TimeRange, END_OF_DAY};
use serde::Deserialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (`tracing-subscriber` env-filter syntax).
const LOG_ENV: &str = "MEETFIND_LOG";

#[derive(Parser)]
#[command(
    name = "meetfind",
    version,
    about = "Find the windows of a day in which a meeting can be held"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log more detail to stderr (-v debug, -vv trace); MEETFIND_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the schedule's meeting request into candidate slots
    Query {
        /// Input schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Override the request's duration in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: Option<i64>,
    },
    /// Show the collapsed busy intervals of the given attendees
    Busy {
        /// Input schedule file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Attendee whose events count as busy (repeatable)
        #[arg(short, long = "attendee", required = true)]
        attendees: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

/// The input document: a day's events and, for `query`, the meeting request.
#[derive(Deserialize)]
struct Schedule {
    #[serde(default)]
    events: Vec<Event>,
    request: Option<MeetingRequest>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            duration,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let mut request = schedule
                .request
                .context("Schedule has no \"request\" object to resolve")?;
            if let Some(minutes) = duration {
                request.duration = minutes;
            }

            let result = meeting_engine::resolve(&schedule.events, &request);
            debug!(
                slots = result.slots.len(),
                attendance = ?result.attendance,
                "resolved meeting request"
            );

            let rendered = match format {
                Format::Json => to_json(&result)?,
                Format::Text => render_meeting_times(&result)?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            input,
            output,
            format,
            attendees,
        } => {
            let schedule = read_schedule(input.as_deref())?;
            let people: HashSet<String> = attendees.into_iter().collect();
            let busy = meeting_engine::busy_intervals(&schedule.events, &people);

            let rendered = match format {
                Format::Json => to_json(&busy)?,
                Format::Text => render_ranges(&busy, "no busy intervals")?,
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn read_schedule(path: Option<&str>) -> Result<Schedule> {
    let raw = read_input(path)?;
    let schedule: Schedule =
        serde_json::from_str(&raw).context("Failed to parse schedule JSON")?;
    debug!(events = schedule.events.len(), "loaded schedule");
    Ok(schedule)
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

fn render_meeting_times(result: &MeetingTimes) -> Result<String> {
    let mut text = render_ranges(&result.slots, "no meeting time available")?;
    if result.attendance == Attendance::MandatoryOnly && !result.slots.is_empty() {
        text.push_str("note: optional attendees cannot join any of these slots\n");
    }
    Ok(text)
}

/// One `[HH:MM, HH:MM)` line per range, or `empty` when there are none.
fn render_ranges(ranges: &[TimeRange], empty: &str) -> Result<String> {
    if ranges.is_empty() {
        return Ok(format!("{}\n", empty));
    }

    let mut text = String::new();
    for range in ranges {
        text.push_str(&format!(
            "[{}, {})\n",
            clock(range.start())?,
            clock(range.end())?
        ));
    }
    Ok(text)
}

/// Render a minute of the day as `HH:MM`. The exclusive end of day renders as `24:00`.
fn clock(minute: i64) -> Result<String> {
    if minute == END_OF_DAY {
        return Ok("24:00".to_string());
    }
    let seconds = u32::try_from(minute * 60)
        .with_context(|| format!("Minute {} is not a time of day", minute))?;
    let time = NaiveTime::from_num_seconds_from_midnight_opt(seconds, 0)
        .with_context(|| format!("Minute {} is not a time of day", minute))?;
    Ok(time.format("%H:%M").to_string())
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
