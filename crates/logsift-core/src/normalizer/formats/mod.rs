pub mod bracketed;
pub mod delimited;
pub mod structured;

pub use bracketed::BracketedRecognizer;
pub use delimited::DelimitedRecognizer;
pub use structured::StructuredRecognizer;
