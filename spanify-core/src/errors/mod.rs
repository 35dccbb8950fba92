//! Error handling for the edit extractor.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod error_code;
pub mod extract_error;
pub mod graph_error;
pub mod parse_error;

pub use error_code::ErrorCode;
pub use extract_error::ExtractError;
pub use graph_error::GraphError;
pub use parse_error::ParseError;
