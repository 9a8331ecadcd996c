//! Text-in / text-out command interpreter over a [`Collection`].
//!
//! [`Interpreter::execute`] never fails and never panics past its boundary:
//! usage errors, bad literals, and unexpected failures all come back as a
//! single diagnostic line.

use crate::commands::Command;
use crate::error::QueryError;
use chrono::NaiveDateTime;
use logsift_core::types::DISPLAY_TIMESTAMP_FORMAT;
use logsift_core::{Collection, Entry};
use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

pub const STATS_HEADER: &str = "=== Log Statistics ===";

thread_local! {
    static IN_BOUNDARY: Cell<bool> = const { Cell::new(false) };
}

#[derive(Debug, Clone, Copy)]
pub struct Interpreter<'a> {
    collection: &'a Collection,
}

impl<'a> Interpreter<'a> {
    pub fn new(collection: &'a Collection) -> Self {
        Self { collection }
    }

    /// Run one command line and return its output lines.
    pub fn execute(&self, input: &str) -> Vec<String> {
        tracing::debug!(command = %input.trim(), "executing command");
        guarded(|| self.try_execute(input))
    }

    /// Like [`execute`](Self::execute) but hands diagnostics back as errors.
    pub fn try_execute(&self, input: &str) -> Result<Vec<String>, QueryError> {
        let command = Command::parse(input)?;
        Ok(self.run(&command))
    }

    /// Execute an already-parsed command.
    pub fn run(&self, command: &Command) -> Vec<String> {
        match command {
            Command::Count { level } => self.count(level),
            Command::Range { start, end } => self.range(*start, *end),
            Command::List { level } => self.list(level),
            Command::Stats => self.stats(),
            Command::All => self.all(),
        }
    }

    fn count(&self, level: &str) -> Vec<String> {
        let total: usize = self.collection.count_by_level(Some(level)).values().sum();
        vec![format!("Total {level} entries: {total}")]
    }

    fn range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<String> {
        or_else(
            render(self.collection.filter_by_time_range(start, end)),
            "No entries found in specified range",
        )
    }

    fn list(&self, level: &str) -> Vec<String> {
        let lines = render(self.collection.filter_by_level(level));
        if lines.is_empty() {
            return vec![format!("No {level} entries found")];
        }
        lines
    }

    fn stats(&self) -> Vec<String> {
        let mut out = vec![
            STATS_HEADER.to_string(),
            format!("Total entries: {}", self.collection.len()),
        ];

        // BTreeMap iteration is already sorted by level text.
        out.extend(
            self.collection
                .count_by_level(None)
                .into_iter()
                .map(|(level, count)| format!("{level}: {count}")),
        );

        if let Some((start, end)) = self.collection.time_range() {
            out.push(format!(
                "Time range: {} - {}",
                start.format(DISPLAY_TIMESTAMP_FORMAT),
                end.format(DISPLAY_TIMESTAMP_FORMAT)
            ));
        }
        out
    }

    fn all(&self) -> Vec<String> {
        or_else(render(self.collection.iter()), "No entries")
    }
}

fn render<'e>(entries: impl IntoIterator<Item = &'e Entry>) -> Vec<String> {
    entries.into_iter().map(Entry::to_string).collect()
}

fn or_else(lines: Vec<String>, empty: &str) -> Vec<String> {
    if lines.is_empty() {
        vec![empty.to_string()]
    } else {
        lines
    }
}

/// Dispatch boundary: diagnostics become one line, panics become an
/// execution error. The collection is only ever borrowed immutably, so an
/// unwound handler cannot leave it half-updated.
fn guarded<F>(handler: F) -> Vec<String>
where
    F: FnOnce() -> Result<Vec<String>, QueryError>,
{
    let previous = IN_BOUNDARY.replace(true);
    let outcome = panic::catch_unwind(AssertUnwindSafe(handler));
    IN_BOUNDARY.set(previous);

    match outcome {
        Ok(Ok(lines)) => lines,
        Ok(Err(err)) => vec![err.to_string()],
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown failure".to_string());
            tracing::warn!(%message, "command handler panicked");
            vec![QueryError::Execution(message).to_string()]
        }
    }
}

/// Wrap the current panic hook so panics caught by [`Interpreter::execute`]
/// are not also printed to stderr. Panics anywhere else still reach the
/// previous hook.
pub fn install_panic_hook() {
    let original = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if !inside_boundary() {
            original(info);
        }
    }));
}

fn inside_boundary() -> bool {
    IN_BOUNDARY.get()
}
