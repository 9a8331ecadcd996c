//! Static log corpora used across harnesses.
//!
//! Each corpus is a `&'static [&'static str]` of representative log lines.

/// Bracketed-timestamp lines: `[YYYY-MM-DD HH:MM:SS] LEVEL: Message`.
pub const CORPUS_BRACKETED: &[&str] = &[
    "[2025-10-01 12:34:56] INFO: System started",
    "[2025-10-01 12:35:01] DEBUG: Initializing components",
    "[2025-10-01 12:35:30] WARNING: High memory usage",
    "[2025-10-01 23:59:59] CRITICAL: Shutdown: reason=oom [pid 4121]",
];

/// Delimited lines: `LEVEL;YYYY/MM/DD-HH:MM;Message`.
pub const CORPUS_DELIMITED: &[&str] = &[
    "ERROR;2025/10/01-12:35;Disk full",
    "INFO;2025/10/01-12:36;Backup completed",
    "warn;2025/10/01-00:00;Clock skew; resyncing",
];

/// Structured (JSON object) lines.
pub const CORPUS_STRUCTURED: &[&str] = &[
    r#"{"level": "WARNING", "time": "2025-10-01T12:36:00", "msg": "High load"}"#,
    r#"{"level": "INFO", "time": "2025-10-01T12:37:00", "message": "User logged in"}"#,
    r#"{"level":"debug","time":"2025-10-01 12:38:15","msg":"cache warm","extra":{"hits":42}}"#,
    r#"{"time":"2025-10-01T12:39:00"}"#,
];

/// Lines no recognizer accepts.
pub const CORPUS_INVALID: &[&str] = &[
    "INVALID LOG FORMAT",
    "",
    "[2025-10-01 12:34:56] INFO System started",
    "[2025-13-01 12:34:56] INFO: impossible month",
    "[2025-10-01 23:59:60] INFO: leap second",
    "ERROR;2025-10-01-12:35;dashes instead of slashes",
    r#"{"level":"INFO","time":"2025-10-01T12:36:00Z","msg":"zulu suffix"}"#,
    r#"{"level":"INFO","msg":"no time at all"}"#,
    r#"{"level":"INFO","time":"2025-10-01T12:00:60","msg":"leap second"}"#,
    r#"{"level":"INFO","time":"+2025-10-01T12:00:00","msg":"signed year"}"#,
    "[1, 2, 3]",
    "2025-10-01 12:34:56 INFO plain prefix",
];

/// The mixed ingestion set the command scenarios run against.
pub const CORPUS_MIXED: &[&str] = &[
    "[2025-10-01 12:34:56] INFO: System started",
    "[2025-10-01 12:35:01] DEBUG: Initializing components",
    "[2025-10-01 12:35:30] WARNING: High memory usage",
    "ERROR;2025/10/01-12:35;Disk full",
    "INFO;2025/10/01-12:36;Backup completed",
    r#"{"level": "WARNING", "time": "2025-10-01T12:36:00", "msg": "High load"}"#,
    r#"{"level": "INFO", "time": "2025-10-01T12:37:00", "message": "User logged in"}"#,
    "INVALID LOG FORMAT",
];

/// The command set exercised over [`CORPUS_MIXED`].
pub const MIXED_COMMANDS: &[&str] = &[
    "stats",
    "count level=ERROR",
    "count level=WARNING",
    "list level=WARNING",
    "range 2025-10-01 12:30 13:00",
    "list level=INFO",
    "all",
];

/// Generate `n` lines cycling through all three formats plus an invalid line.
pub fn corpus_high_volume(n: usize) -> Vec<String> {
    (0..n)
        .map(|i| {
            let (h, m, s) = (i / 3600 % 24, i / 60 % 60, i % 60);
            match i % 4 {
                0 => format!("[2025-10-01 {h:02}:{m:02}:{s:02}] INFO: line {i}"),
                1 => format!("ERROR;2025/10/01-{h:02}:{m:02};line {i}"),
                2 => format!(
                    r#"{{"level":"WARN","time":"2025-10-01T{h:02}:{m:02}:{s:02}","msg":"line {i}"}}"#
                ),
                _ => format!("garbage line {i}"),
            }
        })
        .collect()
}
