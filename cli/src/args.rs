//! CLI argument definitions

use chrono::{NaiveDate, NaiveTime};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for gigmatch
#[derive(Parser, Debug)]
#[command(name = "gigmatch")]
#[command(author, version, about = "Match musical artists to an event")]
#[command(long_about = r#"
Gigmatch finds artists for an event in three stages:

1. Retrieval: performer profiles for the requested genre from the store
2. Filters: availability-window overlap and budget-range overlap
3. Ranking: a completion model picks the 1-3 best fits and explains why

Configuration files are loaded from (in priority order):
1. --config <path>    Explicit config file
2. ./gigmatch.toml    Project-level config
3. ~/.config/gigmatch/config.toml   Global config

Example:
  gigmatch --event-type wedding --genre Jazz --date 2026-09-12 --budget "$500 - $1000"
  gigmatch --event-type "club night" --genre Techno --date 2026-09-12 --start 22:00 --end 02:00
  gigmatch --event-type corporate --seed demo-artists.json
"#)]
pub struct Cli {
    /// Event type label, e.g. "wedding" or "corporate"
    #[arg(long, value_name = "TYPE")]
    pub event_type: String,

    /// Requested genre tag (exact match against stored tags)
    #[arg(short, long, value_name = "GENRE")]
    pub genre: Option<String>,

    /// Event date (YYYY-MM-DD)
    #[arg(short, long, value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Start time of day (HH:MM); requires --end
    #[arg(long, value_name = "TIME", requires = "end", value_parser = parse_time)]
    pub start: Option<NaiveTime>,

    /// End time of day (HH:MM); before or equal to --start means the event
    /// crosses midnight
    #[arg(long, value_name = "TIME", requires = "start", value_parser = parse_time)]
    pub end: Option<NaiveTime>,

    /// Budget descriptor, e.g. "$500 - $1000" or "negotiable"
    #[arg(short, long, value_name = "RANGE")]
    pub budget: Option<String>,

    /// Expected number of guests
    #[arg(long, value_name = "N")]
    pub guests: Option<u32>,

    /// Free-text event details forwarded to the ranking model
    #[arg(long, value_name = "TEXT")]
    pub details: Option<String>,

    /// Use an in-memory store seeded from a JSON file instead of the
    /// configured document store
    #[arg(long, value_name = "PATH")]
    pub seed: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Accept "HH:MM" as well as "HH:MM:SS"
fn parse_time(s: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|e| format!("invalid time {:?}: {}", s, e))
}
