//! Structural violations of the dependency-graph contract.

use super::error_code::{self, ErrorCode};

/// Errors raised when the assembled graph breaks a producer invariant.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A deref or boundary node must have at least one outgoing dependency.
    #[error("node `{key}` has no outgoing dependency edge")]
    MissingDependency { key: String },
}

impl ErrorCode for GraphError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingDependency { .. } => error_code::MISSING_DEPENDENCY,
        }
    }
}
