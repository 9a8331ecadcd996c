//! logsift-query: a small query language over a [`logsift_core::Collection`].
//!
//! One command string in, a list of output lines out. See [`commands`] for the
//! grammar and [`Interpreter`] for execution.

pub mod commands;
pub mod error;
pub mod interpreter;

pub use commands::{ArgShape, Command};
pub use error::QueryError;
pub use interpreter::{install_panic_hook, Interpreter};
