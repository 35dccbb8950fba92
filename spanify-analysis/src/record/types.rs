//! Node model for the dependency graph.

use serde::Serialize;

/// Replacements ending in this marker carry no textual change; they exist
/// only to link graph locations. The serialized replacement embeds a
/// `file:offset:length` prefix, so the check is a suffix match.
pub const PLACEHOLDER_SENTINEL: &str = "<empty>";

/// Whether enough information is reachable to compute a valid extent for
/// a converted buffer. Input records only ever carry `Unknown` (`0`) or
/// `Available` (`1`); `Unavailable` is produced by propagation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeInfo {
    Unknown,
    Available,
    Unavailable,
}

/// Role of a node at its program location.
///
/// The plugin serializes the boundary source key in the include-directive
/// slot; the tagged variant here keeps the two meanings apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum NodeKind {
    /// Ordinary rewrite site: a declaration, parameter, or expression
    /// whose type changes to a span.
    Plain { include: String },
    /// A dereference expression (`*buf`) whose rewritten form (`buf[0]`)
    /// must change in lockstep with its single dependency.
    Deref { include: String },
    /// Seam between a rewritten and a non-rewritten location; rewriting
    /// the destination but not the source requires inserting an explicit
    /// `.data()` accessor. `source_key` identifies the source side.
    Boundary { source_key: String },
}

/// A graph node. Identity is the replacement text: two nodes with equal
/// replacements denote the same program location, and every map and set
/// in the engine keys on that single canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// This location is a pointer/array that is a migration candidate.
    pub is_buffer: bool,
    /// The text to substitute at this location; also the identity key.
    pub replacement: String,
    pub size_info: SizeInfo,
    pub kind: NodeKind,
}

impl Node {
    /// Canonical identity key.
    pub fn key(&self) -> &str {
        &self.replacement
    }

    /// True when this node carries no textual change.
    pub fn is_placeholder(&self) -> bool {
        self.replacement.ends_with(PLACEHOLDER_SENTINEL)
    }

    /// Include directive to add when this node is rewritten, if any.
    /// Boundary nodes have none: their slot holds the source key.
    pub fn include(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Plain { include } | NodeKind::Deref { include } => Some(include),
            NodeKind::Boundary { .. } => None,
        }
    }

    pub fn is_deref(&self) -> bool {
        matches!(self.kind, NodeKind::Deref { .. })
    }

    /// Source-side key for boundary nodes.
    pub fn boundary_source(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Boundary { source_key } => Some(source_key),
            _ => None,
        }
    }
}
