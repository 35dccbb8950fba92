//! Stable error codes, one per failure class.
//!
//! Codes are part of the external contract: driver scripts match on them,
//! so they never change once shipped.

pub const MALFORMED_RECORD: &str = "E_MALFORMED_RECORD";
pub const MALFORMED_LINE: &str = "E_MALFORMED_LINE";
pub const CONFLICTING_KIND: &str = "E_CONFLICTING_KIND";
pub const MISSING_DEPENDENCY: &str = "E_MISSING_DEPENDENCY";
pub const IO_ERROR: &str = "E_IO";

/// Maps an error to its stable code.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}
