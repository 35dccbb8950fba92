//! spanify-core: shared foundation for the spanification edit extractor.
//!
//! - Errors: one enum per subsystem, `thiserror` only, zero `anyhow`
//! - Types: collection aliases shared by every stage

pub mod errors;
pub mod types;

pub use errors::{ErrorCode, ExtractError, GraphError, ParseError};
