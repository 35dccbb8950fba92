//! Serialized node records.
//!
//! One record per program location, produced by the plugin's
//! `Node::ToString()`: six `\,`-separated fields wrapped in braces.

mod parser;
mod types;

pub use parser::parse_record;
pub use types::{Node, NodeKind, SizeInfo, PLACEHOLDER_SENTINEL};
