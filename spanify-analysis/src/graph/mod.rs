//! Dependency graph over node identity keys.
//!
//! Directed: an edge source → destination means the destination's
//! rewritability/size-availability depends on the source side of an
//! assignment or parameter binding, as emitted by the plugin.

mod builder;
mod types;

pub use builder::GraphBuilder;
pub use types::DepGraph;
