//! Record codec.
//!
//! Serialized form, fields joined by the two-byte `\,` delimiter and the
//! whole record wrapped in braces:
//!
//! `{is_buffer\,replacement\,include_directive\,size_info_available\,is_deref_node\,is_data_change_node}`
//!
//! Booleans are `0`/`1`. Any other field count is fatal: the plugin
//! output is well-formed by construction, so a short record means the
//! producer/consumer contract is broken.

use spanify_core::errors::ParseError;

use super::types::{Node, NodeKind, SizeInfo};

/// Field separator inside a record (escaped comma, two bytes).
const FIELD_DELIMITER: &str = "\\,";

const FIELD_COUNT: usize = 6;

/// Parse one serialized node record. `line` is the 1-based input line
/// number, used for error reporting only.
pub fn parse_record(raw: &str, line: usize) -> Result<Node, ParseError> {
    let inner = raw
        .strip_prefix('{')
        .and_then(|r| r.strip_suffix('}'))
        .ok_or(ParseError::MalformedRecord { line, fields: 0 })?;

    let fields: Vec<&str> = inner.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(ParseError::MalformedRecord {
            line,
            fields: fields.len(),
        });
    }

    let is_buffer = parse_flag(fields[0]);
    let replacement = fields[1].to_string();
    let include_directive = fields[2].to_string();
    let size_info = if parse_flag(fields[3]) {
        SizeInfo::Available
    } else {
        SizeInfo::Unknown
    };
    let is_deref = parse_flag(fields[4]);
    let is_data_change = parse_flag(fields[5]);

    let kind = match (is_deref, is_data_change) {
        (true, true) => return Err(ParseError::ConflictingKind { line }),
        (true, false) => NodeKind::Deref {
            include: include_directive,
        },
        // The plugin reuses the include slot as the source-side key for
        // data-change nodes.
        (false, true) => NodeKind::Boundary {
            source_key: include_directive,
        },
        (false, false) => NodeKind::Plain {
            include: include_directive,
        },
    };

    Ok(Node {
        is_buffer,
        replacement,
        size_info,
        kind,
    })
}

/// `1` is true, anything else is false (plugin serialization contract).
fn parse_flag(field: &str) -> bool {
    field == "1"
}
