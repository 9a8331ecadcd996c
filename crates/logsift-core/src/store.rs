//! Store: append-only, insertion-ordered collection of [`Entry`](crate::Entry) values.
//!
//! The collection owns its [`Classifier`]: raw lines go in, classified entries
//! come out. Queries borrow the collection immutably and return references in
//! insertion order; an empty result is the "nothing found" signal.

use crate::normalizer::Classifier;
use crate::types::{levels_match, Entry};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
pub struct Collection {
    classifier: Classifier,
    entries: Vec<Entry>,
}

impl Collection {
    /// Empty collection using the standard classifier.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classifier(classifier: Classifier) -> Self {
        Self {
            classifier,
            entries: Vec::new(),
        }
    }

    /// Classify `raw` and store the result.
    pub fn append(&mut self, raw: &str) -> &Entry {
        let entry = self.classifier.classify(raw);
        self.entries.push(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Append every line in order.
    pub fn append_all<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.append(line.as_ref());
        }
    }

    /// Entries whose level equals `level`, ignoring case.
    pub fn filter_by_level(&self, level: &str) -> Vec<&Entry> {
        self.entries.iter().filter(|e| e.has_level(level)).collect()
    }

    /// Entries with `start <= timestamp <= end`.
    pub fn filter_by_time_range(&self, start: NaiveDateTime, end: NaiveDateTime) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|e| (start..=end).contains(&e.timestamp()))
            .collect()
    }

    /// Entry counts keyed by level token as it appeared in the logs.
    ///
    /// With `Some(level)` only keys matching it case-insensitively are kept,
    /// so `INFO` and `info` stay separate keys under a filter of `Info`.
    pub fn count_by_level(&self, level: Option<&str>) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            if level.is_some_and(|wanted| !levels_match(entry.level(), wanted)) {
                continue;
            }
            *counts.entry(entry.level().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Earliest and latest timestamp, or `None` when empty.
    pub fn time_range(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let mut timestamps = self.entries.iter().map(Entry::timestamp);
        let first = timestamps.next()?;
        Some(timestamps.fold((first, first), |(min, max), ts| (min.min(ts), max.max(ts))))
    }

    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> Extend<S> for Collection {
    fn extend<I: IntoIterator<Item = S>>(&mut self, lines: I) {
        self.append_all(lines);
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
