//! Core types for logsift-core.
//!
//! This module defines the normalised [`Entry`] record every classified line
//! becomes, and the [`LogFormat`] discriminant recording which wire format
//! produced it.

use chrono::{NaiveDateTime, Timelike};
use std::fmt;

/// Timestamp layout used for display and canonical re-encoding.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which wire format produced an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LogFormat {
    /// `[YYYY-MM-DD HH:MM:SS] LEVEL: Message`
    Bracketed,
    /// `LEVEL;YYYY/MM/DD-HH:MM;Message`
    Delimited,
    /// JSON object with `level`, `time`, and `msg`/`message` keys.
    Structured,
    /// No recognizer matched; the entry is the synthesized fallback.
    Unrecognized,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Bracketed => "bracketed",
            LogFormat::Delimited => "delimited",
            LogFormat::Structured => "structured",
            LogFormat::Unrecognized => "unrecognized",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalised log entry.
///
/// Entries are immutable once built: every field is private and only readable
/// through accessors, so a stored entry is always exactly what classification
/// produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    level: String,
    timestamp: NaiveDateTime,
    message: String,
    format: LogFormat,
    raw: String,
}

impl Entry {
    pub fn new(
        level: impl Into<String>,
        timestamp: NaiveDateTime,
        message: impl Into<String>,
        format: LogFormat,
        raw: impl Into<String>,
    ) -> Self {
        Self {
            level: level.into(),
            timestamp,
            message: message.into(),
            format,
            raw: raw.into(),
        }
    }

    /// Level token exactly as it appeared in the source line.
    pub fn level(&self) -> &str {
        &self.level
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn format(&self) -> LogFormat {
        self.format
    }

    /// Raw line as received, before classification.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Case-insensitive level comparison used by every level query.
    pub fn has_level(&self, level: &str) -> bool {
        levels_match(&self.level, level)
    }

    /// Re-encode the entry in the bracketed wire format, the shape the
    /// bracketed recognizer accepts.
    pub fn to_bracketed_line(&self) -> String {
        format!(
            "[{}] {}: {}",
            self.timestamp.format(DISPLAY_TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}

/// Renders `[YYYY-MM-DD HH:MM:SS] LEVEL MESSAGE`.
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} {}",
            self.timestamp.format(DISPLAY_TIMESTAMP_FORMAT),
            self.level,
            self.message
        )
    }
}

/// Parse `text` with `layout`, rejecting what chrono tolerates but a log
/// timestamp must not carry: a leading sign on the year and a leap second.
pub fn parse_timestamp(text: &str, layout: &str) -> Option<NaiveDateTime> {
    if !text.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    NaiveDateTime::parse_from_str(text, layout)
        .ok()
        .filter(|ts| ts.nanosecond() < 1_000_000_000)
}

/// Compare two level tokens ignoring case.
pub fn levels_match(a: &str, b: &str) -> bool {
    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }
    a.to_uppercase() == b.to_uppercase()
}
