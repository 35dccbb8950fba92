//! Top-level extraction error. Aggregates subsystem errors via `From`
//! conversions; any variant aborts the run with no partial output.

use super::error_code::{self, ErrorCode};
use super::{GraphError, ParseError};

/// Errors that can occur across the extraction pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ErrorCode for ExtractError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Graph(e) => e.error_code(),
            Self::Io(_) => error_code::IO_ERROR,
        }
    }
}
