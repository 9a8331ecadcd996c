//! logsift-core: entry model, format recognition, and the log collection.
//!
//! # Architecture
//!
//! ```text
//! raw line ──► Classifier ──► Entry ──► Collection ──► queries
//!              (bracketed → delimited → structured → fallback)
//! ```
//!
//! Everything here is synchronous and in-memory. The query language that
//! sits on top of [`Collection`] lives in `logsift-query`.

pub mod clock;
pub mod config;
pub mod normalizer;
pub mod store;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use normalizer::{Classifier, Recognition, Recognizer};
pub use store::Collection;
pub use types::{Entry, LogFormat};
