//! Test builders: ergonomic constructors for `Entry` and `Collection`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use chrono::{NaiveDate, NaiveDateTime};
use logsift::{Classifier, Collection, Entry, FixedClock, LogFormat};
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Time helpers
// ---------------------------------------------------------------------------

/// `2025-10-01 h:m:s`, the date every fixture corpus uses.
pub fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    ts(2025, 10, 1, h, m, s)
}

pub fn ts(y: i32, mo: u32, d: u32, h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .and_then(|date| date.and_hms_opt(h, m, s))
        .expect("test timestamp must be valid")
}

/// What the frozen clock reports; fallback entries carry this timestamp.
pub fn frozen_now() -> NaiveDateTime {
    at(13, 5, 0)
}

// ---------------------------------------------------------------------------
// EntryBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Entry`] fixtures.
///
/// ```rust
/// let entry = EntryBuilder::new("disk full")
///     .level("ERROR")
///     .ts(at(12, 35, 0))
///     .format(LogFormat::Delimited)
///     .build();
/// ```
pub struct EntryBuilder {
    level: String,
    ts: NaiveDateTime,
    message: String,
    format: LogFormat,
    raw: Option<String>,
}

impl EntryBuilder {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            level: "INFO".to_string(),
            ts: at(12, 0, 0),
            message: message.into(),
            format: LogFormat::Bracketed,
            raw: None,
        }
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn ts(mut self, ts: NaiveDateTime) -> Self {
        self.ts = ts;
        self
    }

    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    pub fn raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    pub fn build(self) -> Entry {
        let raw = self.raw.unwrap_or_else(|| {
            format!(
                "[{}] {}: {}",
                self.ts.format("%Y-%m-%d %H:%M:%S"),
                self.level,
                self.message
            )
        });
        Entry::new(self.level, self.ts, self.message, self.format, raw)
    }
}

// ---------------------------------------------------------------------------
// Collection helpers
// ---------------------------------------------------------------------------

/// A classifier whose fallback timestamp is [`frozen_now`].
pub fn frozen_classifier() -> Classifier {
    Classifier::with_clock(Arc::new(FixedClock(frozen_now())))
}

/// Ingest `lines` into a fresh collection with a frozen clock.
pub fn collection_of<S: AsRef<str>>(lines: &[S]) -> Collection {
    let mut collection = Collection::with_classifier(frozen_classifier());
    collection.append_all(lines);
    collection
}

/// Build `n` bracketed raw lines alternating INFO/WARN/ERROR, one second apart.
pub fn bracketed_lines(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let level = match i % 10 {
                0 => "ERROR",
                1 | 2 => "WARN",
                _ => "INFO",
            };
            let ts = at(0, 0, 0) + chrono::Duration::seconds(i as i64);
            format!("[{}] {level}: log line {i}", ts.format("%Y-%m-%d %H:%M:%S"))
        })
        .collect()
}
