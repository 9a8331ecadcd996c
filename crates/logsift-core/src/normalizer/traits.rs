use crate::types::Entry;

/// Outcome of a single recognizer attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recognition {
    Recognized(Entry),
    /// The line is not in this recognizer's format; try the next one.
    Unrecognized,
}

impl Recognition {
    pub fn into_entry(self) -> Option<Entry> {
        match self {
            Recognition::Recognized(entry) => Some(entry),
            Recognition::Unrecognized => None,
        }
    }
}

impl From<Option<Entry>> for Recognition {
    fn from(entry: Option<Entry>) -> Self {
        entry.map_or(Recognition::Unrecognized, Recognition::Recognized)
    }
}

/// A single wire-format attempt: produce an [`Entry`] from a raw line or
/// report [`Recognition::Unrecognized`]. Implementations never panic on bad
/// input and never report errors for it.
pub trait Recognizer: Send + Sync {
    /// Stable name used in trace output.
    fn name(&self) -> &'static str;

    fn recognize(&self, raw: &str) -> Recognition;
}
