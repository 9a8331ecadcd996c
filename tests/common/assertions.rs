//! Domain-specific assertion macros for logsift harnesses.
//!
//! Failures print the raw line the entry came from, so a broken corpus line
//! is easy to find.

use logsift::{Entry, LogFormat};

// ---------------------------------------------------------------------------
// Entry assertions
// ---------------------------------------------------------------------------

/// Assert that an `Entry` has a specific level (exact, case-sensitive).
///
/// ```rust
/// assert_level!(entry, "ERROR");
/// ```
#[macro_export]
macro_rules! assert_level {
    ($entry:expr, $level:expr) => {{
        let entry: &logsift::Entry = &$entry;
        let expected: &str = $level;
        if entry.level() != expected {
            panic!(
                "assert_level! failed:\n  expected: {:?}\n  actual:   {:?}\n  raw: {:?}",
                expected,
                entry.level(),
                entry.raw()
            );
        }
    }};
}

/// Assert which recognizer produced an `Entry`.
///
/// ```rust
/// assert_format!(entry, LogFormat::Delimited);
/// ```
#[macro_export]
macro_rules! assert_format {
    ($entry:expr, $format:expr) => {{
        let entry: &logsift::Entry = &$entry;
        let expected: logsift::LogFormat = $format;
        if entry.format() != expected {
            panic!(
                "assert_format! failed:\n  expected: {:?}\n  actual:   {:?}\n  raw: {:?}",
                expected,
                entry.format(),
                entry.raw()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Result-set assertions
// ---------------------------------------------------------------------------

/// Assert that every entry in a result set satisfies a predicate.
///
/// ```rust
/// assert_results_all!(results, |e| e.has_level("ERROR"));
/// ```
#[macro_export]
macro_rules! assert_results_all {
    ($results:expr, $pred:expr) => {{
        let results: &[&logsift::Entry] = &$results;
        let pred: &dyn Fn(&logsift::Entry) -> bool = &$pred;
        let failing: Vec<&&logsift::Entry> = results.iter().filter(|e| !pred(e)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_results_all! failed: {} of {} entries did not satisfy predicate.\n  first: {:?}",
                failing.len(),
                results.len(),
                failing[0].raw()
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Fallback invariant helpers
// ---------------------------------------------------------------------------

/// Assert that `entry` is the fallback produced for `raw`.
pub fn assert_fallback_for(entry: &Entry, raw: &str) {
    assert_eq!(
        entry.format(),
        LogFormat::Unrecognized,
        "expected a fallback entry for {raw:?}"
    );
    assert_eq!(entry.level(), "ERROR", "fallback level for {raw:?}");
    assert!(
        entry.message().contains(raw),
        "fallback message {:?} must carry the raw line {raw:?}",
        entry.message()
    );
    assert_eq!(entry.raw(), raw);
}
