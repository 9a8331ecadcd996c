use crate::normalizer::traits::*;
use crate::types::{parse_timestamp, Entry, LogFormat};
use regex::Regex;
use std::sync::LazyLock;

// No seconds field; chrono fills them with zero.
const TIMESTAMP_LAYOUT: &str = "%Y/%m/%d-%H:%M";

static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+);(\d{4}/\d{2}/\d{2}-\d{2}:\d{2});(.+)")
        .expect("delimited pattern must compile")
});

/// Recognizer for `ERROR;2025/10/01-12:35;Disk full`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelimitedRecognizer;

impl Recognizer for DelimitedRecognizer {
    fn name(&self) -> &'static str {
        "delimited"
    }

    fn recognize(&self, raw: &str) -> Recognition {
        let Some(caps) = PATTERN.captures(raw) else {
            return Recognition::Unrecognized;
        };

        let Some(timestamp) = parse_timestamp(&caps[2], TIMESTAMP_LAYOUT) else {
            return Recognition::Unrecognized;
        };

        Recognition::Recognized(Entry::new(
            &caps[1],
            timestamp,
            &caps[3],
            LogFormat::Delimited,
            raw,
        ))
    }
}
