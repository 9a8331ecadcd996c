use crate::normalizer::traits::*;
use crate::types::{parse_timestamp, Entry, LogFormat};
use regex::Regex;
use std::sync::LazyLock;

const TIMESTAMP_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

// `[YYYY-MM-DD HH:MM:SS] LEVEL: Message`, anchored at the start of the line only.
static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\] (\w+): (.+)")
        .expect("bracketed pattern must compile")
});

/// Recognizer for `[2025-10-01 12:34:56] INFO: System started`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketedRecognizer;

impl Recognizer for BracketedRecognizer {
    fn name(&self) -> &'static str {
        "bracketed"
    }

    fn recognize(&self, raw: &str) -> Recognition {
        let Some(caps) = PATTERN.captures(raw) else {
            return Recognition::Unrecognized;
        };

        // The regex only checks digit shape; 2025-13-45 still has to fail here.
        let Some(timestamp) = parse_timestamp(&caps[1], TIMESTAMP_LAYOUT) else {
            return Recognition::Unrecognized;
        };

        Recognition::Recognized(Entry::new(
            &caps[2],
            timestamp,
            &caps[3],
            LogFormat::Bracketed,
            raw,
        ))
    }
}
