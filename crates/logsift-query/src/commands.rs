//! Command grammar.
//!
//! # Supported commands
//!
//! | Command | Action |
//! |---------|--------|
//! | `count level=LEVEL` | Total entries at LEVEL |
//! | `range DATE START END` | Entries between `DATE START` and `DATE END` (`YYYY-MM-DD HH:MM HH:MM`) |
//! | `list level=LEVEL` | Entries at LEVEL, one per line |
//! | `stats` | Totals, per-level counts, and the overall time range |
//! | `all` | Every entry, one per line |
//!
//! Verbs are case-insensitive. Parsing is driven by [`VERBS`], a static table
//! mapping each verb to its argument shape, usage line, and builder.

use crate::error::QueryError;
use chrono::NaiveDateTime;
use logsift_core::types::parse_timestamp;

const LEVEL_PREFIX: &str = "level=";
const RANGE_LAYOUT: &str = "%Y-%m-%d %H:%M";

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A parsed, validated command ready to run against a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Count { level: String },
    Range { start: NaiveDateTime, end: NaiveDateTime },
    List { level: String },
    Stats,
    All,
}

impl Command {
    /// Parse one command line.
    pub fn parse(input: &str) -> Result<Command, QueryError> {
        let mut words = input.split_whitespace();
        let Some(word) = words.next() else {
            return Err(QueryError::Empty);
        };
        let args: Vec<&str> = words.collect();

        let name = word.to_lowercase();
        let verb = lookup(&name).ok_or(QueryError::UnknownCommand(name))?;

        if args.len() != verb.shape.arity() {
            return Err(QueryError::Usage(verb.usage));
        }
        (verb.build)(&args)
    }
}

// ---------------------------------------------------------------------------
// Dispatch table
// ---------------------------------------------------------------------------

/// Declared argument shape of a verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// No arguments.
    Bare,
    /// A single `level=LEVEL` argument.
    LevelFilter,
    /// `YYYY-MM-DD HH:MM HH:MM`.
    DateWindow,
}

impl ArgShape {
    pub fn arity(self) -> usize {
        match self {
            ArgShape::Bare => 0,
            ArgShape::LevelFilter => 1,
            ArgShape::DateWindow => 3,
        }
    }
}

/// One row of the dispatch table.
pub struct Verb {
    pub name: &'static str,
    pub shape: ArgShape,
    pub usage: &'static str,
    /// Called with exactly `shape.arity()` arguments.
    build: fn(&[&str]) -> Result<Command, QueryError>,
}

impl std::fmt::Debug for Verb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Verb")
            .field("name", &self.name)
            .field("shape", &self.shape)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

const COUNT_USAGE: &str = "Usage: count level=LEVEL";
const LIST_USAGE: &str = "Usage: list level=LEVEL";

pub static VERBS: &[Verb] = &[
    Verb {
        name: "count",
        shape: ArgShape::LevelFilter,
        usage: COUNT_USAGE,
        build: |args| Ok(Command::Count { level: level_arg(args[0], COUNT_USAGE)? }),
    },
    Verb {
        name: "range",
        shape: ArgShape::DateWindow,
        usage: "Usage: range START_DATE START_TIME END_TIME (format: YYYY-MM-DD HH:MM HH:MM)",
        build: |args| {
            let start = date_time(args[0], args[1])?;
            let end = date_time(args[0], args[2])?;
            Ok(Command::Range { start, end })
        },
    },
    Verb {
        name: "list",
        shape: ArgShape::LevelFilter,
        usage: LIST_USAGE,
        build: |args| Ok(Command::List { level: level_arg(args[0], LIST_USAGE)? }),
    },
    Verb {
        name: "stats",
        shape: ArgShape::Bare,
        usage: "Usage: stats",
        build: |_| Ok(Command::Stats),
    },
    Verb {
        name: "all",
        shape: ArgShape::Bare,
        usage: "Usage: all",
        build: |_| Ok(Command::All),
    },
];

/// Find a verb by its lowercase name.
pub fn lookup(name: &str) -> Option<&'static Verb> {
    VERBS.iter().find(|verb| verb.name == name)
}

/// `level=ERROR` gives `ERROR`; anything after a second `=` is dropped.
fn level_arg(arg: &str, usage: &'static str) -> Result<String, QueryError> {
    let rest = arg.strip_prefix(LEVEL_PREFIX).ok_or(QueryError::Usage(usage))?;
    let level = rest.split_once('=').map_or(rest, |(level, _)| level);
    Ok(level.to_string())
}

fn date_time(date: &str, time: &str) -> Result<NaiveDateTime, QueryError> {
    parse_timestamp(&format!("{date} {time}"), RANGE_LAYOUT).ok_or(QueryError::InvalidTime)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
