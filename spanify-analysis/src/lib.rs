//! spanify-analysis: the spanification edit-extraction engine.
//!
//! Consumes the serialized node/edge stream emitted by the clang
//! spanification plugin and produces the deduplicated set of textual
//! edits for sites whose buffer size information is recoverable.
//!
//! Stages, in dependency order:
//! - `record`: serialized node codec and the node model
//! - `registry`: per-run node registry with attribute merging
//! - `graph`: dependency graph assembly from the input stream
//! - `propagation`: size-info availability over the dependency chains
//! - `reachability`: DFS edit collection from available buffer roots
//! - `boundary`: deref and span→pointer seam adaptation
//! - `pipeline`: stage orchestration

pub mod boundary;
pub mod graph;
pub mod pipeline;
pub mod propagation;
pub mod reachability;
pub mod record;
pub mod registry;

pub use pipeline::{extract_edits, ExtractOutput, ExtractStats};
pub use record::{Node, NodeKind, SizeInfo};
pub use registry::NodeRegistry;
