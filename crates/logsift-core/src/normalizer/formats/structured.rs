use crate::normalizer::traits::*;
use crate::types::{parse_timestamp, Entry, LogFormat};
use chrono::NaiveDateTime;
use serde_json::{Map, Value};

/// Time layouts tried in order; the first one that consumes the whole string wins.
const TIME_LAYOUTS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

const LEVEL_KEY: &str = "level";
const TIME_KEY: &str = "time";
const MESSAGE_KEYS: &[&str] = &["msg", "message"];

/// Recognizer for JSON objects such as
/// `{"level":"WARNING","time":"2025-10-01T12:36:00","msg":"High load"}`.
///
/// Missing `level` or message keys become empty text. A missing, non-string,
/// or unparseable `time` rejects the whole record.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuredRecognizer;

impl Recognizer for StructuredRecognizer {
    fn name(&self) -> &'static str {
        "structured"
    }

    fn recognize(&self, raw: &str) -> Recognition {
        // Cheap reject before handing the line to serde.
        if !raw.trim_start().starts_with('{') {
            return Recognition::Unrecognized;
        }

        let Ok(Value::Object(record)) = serde_json::from_str::<Value>(raw) else {
            return Recognition::Unrecognized;
        };

        let Some(timestamp) = record
            .get(TIME_KEY)
            .and_then(Value::as_str)
            .and_then(parse_time)
        else {
            return Recognition::Unrecognized;
        };

        let level = record.get(LEVEL_KEY).map(text_of).unwrap_or_default();

        Recognition::Recognized(Entry::new(
            level,
            timestamp,
            message_of(&record),
            LogFormat::Structured,
            raw,
        ))
    }
}

fn parse_time(value: &str) -> Option<NaiveDateTime> {
    TIME_LAYOUTS
        .iter()
        .find_map(|layout| parse_timestamp(value, layout))
}

/// First non-empty message key wins.
fn message_of(record: &Map<String, Value>) -> String {
    MESSAGE_KEYS
        .iter()
        .filter_map(|key| record.get(*key))
        .map(text_of)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

/// Strings are taken verbatim, `null` is empty, anything else keeps its JSON text.
fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
