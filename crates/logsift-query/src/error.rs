use thiserror::Error;

/// Every way a command can fail. The `Display` text of each variant is the
/// exact diagnostic line the interpreter prints.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Empty command")]
    Empty,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Wrong argument count or shape for a known verb; carries the usage line.
    #[error("{0}")]
    Usage(&'static str),

    #[error("Invalid time format. Use: YYYY-MM-DD HH:MM HH:MM")]
    InvalidTime,

    #[error("Error executing command: {0}")]
    Execution(String),
}
