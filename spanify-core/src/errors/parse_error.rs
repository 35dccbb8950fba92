//! Input-stream parse errors. All fatal: the upstream plugin output is
//! well-formed by construction, so any deviation is a contract breach.

use super::error_code::{self, ErrorCode};

/// Errors decoding serialized node records from the input stream.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("line {line}: record does not decode into exactly 6 fields (got {fields})")]
    MalformedRecord { line: usize, fields: usize },

    #[error("line {line}: expected 1 or 2 node records (got {records})")]
    MalformedLine { line: usize, records: usize },

    #[error("line {line}: record is flagged as both deref and data-change")]
    ConflictingKind { line: usize },
}

impl ErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRecord { .. } => error_code::MALFORMED_RECORD,
            Self::MalformedLine { .. } => error_code::MALFORMED_LINE,
            Self::ConflictingKind { .. } => error_code::CONFLICTING_KIND,
        }
    }
}
