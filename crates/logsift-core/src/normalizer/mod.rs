//! Normalizer: classifies raw log lines into [`Entry`](crate::Entry) values.
//!
//! Recognition is attempted in a fixed order: bracketed → delimited →
//! structured. The first recognizer that succeeds wins; order is the
//! tie-break, so a future format that overlaps an existing one must be placed
//! deliberately. When nothing matches, the [`Classifier`] synthesizes an
//! `ERROR` entry carrying the raw line, so no input is ever dropped.

pub mod formats;
pub mod traits;

pub use formats::{BracketedRecognizer, DelimitedRecognizer, StructuredRecognizer};
pub use traits::{Recognition, Recognizer};

use crate::clock::{Clock, SystemClock};
use crate::types::{Entry, LogFormat};
use std::sync::Arc;

/// Level given to lines no recognizer accepts.
pub const FALLBACK_LEVEL: &str = "ERROR";

/// Prefix of the fallback message; the raw line follows verbatim.
pub const FALLBACK_MESSAGE_PREFIX: &str = "Failed to parse log entry: ";

/// Ordered recognizer pipeline with a guaranteed-success fallback.
pub struct Classifier {
    recognizers: Vec<Box<dyn Recognizer>>,
    clock: Arc<dyn Clock>,
}

impl Classifier {
    /// The standard pipeline reading fallback timestamps from the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        let recognizers: Vec<Box<dyn Recognizer>> = vec![
            // Order matters! First success wins.
            Box::new(BracketedRecognizer),
            Box::new(DelimitedRecognizer),
            Box::new(StructuredRecognizer),
        ];

        Self { recognizers, clock }
    }

    /// A pipeline with no recognizers; every line takes the fallback path.
    pub fn empty(clock: Arc<dyn Clock>) -> Self {
        Self {
            recognizers: Vec::new(),
            clock,
        }
    }

    /// Append a recognizer after the existing ones.
    pub fn with_recognizer(mut self, recognizer: impl Recognizer + 'static) -> Self {
        self.recognizers.push(Box::new(recognizer));
        self
    }

    /// Recognizer names in trial order.
    pub fn recognizer_names(&self) -> Vec<&'static str> {
        self.recognizers.iter().map(|r| r.name()).collect()
    }

    /// Classify one raw line. Always returns exactly one entry.
    pub fn classify(&self, raw: &str) -> Entry {
        for recognizer in &self.recognizers {
            match recognizer.recognize(raw) {
                Recognition::Recognized(entry) => {
                    tracing::trace!(recognizer = recognizer.name(), "line recognized");
                    return entry;
                }
                Recognition::Unrecognized => {
                    tracing::trace!(recognizer = recognizer.name(), "line not recognized");
                }
            }
        }

        tracing::debug!(raw = %raw, "no recognizer matched, storing fallback entry");
        self.fallback(raw)
    }

    fn fallback(&self, raw: &str) -> Entry {
        Entry::new(
            FALLBACK_LEVEL,
            self.clock.now(),
            format!("{FALLBACK_MESSAGE_PREFIX}{raw}"),
            LogFormat::Unrecognized,
            raw,
        )
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Classifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Classifier")
            .field("recognizers", &self.recognizer_names())
            .finish_non_exhaustive()
    }
}
