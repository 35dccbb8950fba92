//! Post-passes over the rewritten-node set.
//!
//! Deref adaptation: a dereference expression (`*buf = x;`) must become
//! index form (`buf[0] = x;`) exactly when its single dependency was
//! rewritten to a span.
//!
//! Accessor insertion: at a seam where the destination was rewritten but
//! the source side was not, raw-pointer-expecting code still consumes
//! the value, so an explicit `.data()` call is inserted. The source key
//! is carried on the boundary node itself.
//!
//! Both kinds have exactly one outgoing dependency by construction.
//! Zero edges is fatal; more than one picks the lexicographically
//! smallest key and warns (producer bug observed in the field, tracked
//! upstream).

use petgraph::graph::NodeIndex;
use tracing::warn;

use spanify_core::errors::GraphError;
use spanify_core::types::collections::FxHashSet;

use crate::graph::DepGraph;
use crate::reachability::ChangeSet;
use crate::registry::NodeRegistry;

#[derive(Debug, Default, Clone, Copy)]
pub struct BoundarySummary {
    pub derefs_adapted: usize,
    pub accessors_inserted: usize,
}

/// Run both boundary passes, extending `changes` in place.
pub fn adapt(
    registry: &NodeRegistry,
    graph: &DepGraph,
    visited: &FxHashSet<NodeIndex>,
    changes: &mut ChangeSet,
) -> Result<BoundarySummary, GraphError> {
    let mut summary = BoundarySummary::default();

    for idx in graph.node_indices() {
        let Some(node) = registry.get(graph.key(idx)) else {
            continue;
        };

        if node.is_deref() {
            let dependency = single_dependency(graph, idx)?;
            if visited.contains(&dependency) {
                changes.insert(node.replacement.clone());
                summary.derefs_adapted += 1;
            }
        } else if let Some(source_key) = node.boundary_source() {
            // Source already speaks the span type: no accessor needed.
            let source_rewritten = graph
                .index_of(source_key)
                .is_some_and(|source| visited.contains(&source));
            if source_rewritten {
                continue;
            }
            let destination = single_dependency(graph, idx)?;
            if visited.contains(&destination) {
                changes.insert(node.replacement.clone());
                summary.accessors_inserted += 1;
            }
        }
    }

    Ok(summary)
}

/// The node's one outgoing dependency.
fn single_dependency(graph: &DepGraph, idx: NodeIndex) -> Result<NodeIndex, GraphError> {
    let neighbors = graph.sorted_neighbors(idx);
    match neighbors.as_slice() {
        [] => Err(GraphError::MissingDependency {
            key: graph.key(idx).to_string(),
        }),
        [only] => Ok(*only),
        [first, ..] => {
            warn!(
                node = graph.key(idx),
                neighbors = neighbors.len(),
                picked = graph.key(*first),
                "expected a single dependency; picking the smallest key"
            );
            Ok(*first)
        }
    }
}
