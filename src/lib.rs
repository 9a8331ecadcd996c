//! logsift: classify heterogeneous log lines and query them.
//!
//! This crate re-exports the two library layers so integration tests and
//! benches can import them from one place, and adds the pieces the binary
//! needs around them.
//!
//! # Architecture
//!
//! ```text
//! Source ──► Classifier ──► Collection ──► Interpreter ──► Report
//! ```
//!
//! Everything runs synchronously on the calling thread.

pub mod report;
pub mod source;

pub use logsift_core::{
    clock, config, normalizer, store, types, Classifier, Clock, Collection, Entry, FixedClock,
    LogFormat, Recognition, Recognizer, SystemClock,
};
pub use logsift_query::{commands, install_panic_hook, ArgShape, Command, Interpreter, QueryError};
