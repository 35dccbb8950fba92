//! Reachable-node collection.
//!
//! Every buffer node whose size info resolved available roots a DFS;
//! one visited set is shared across all roots so overlapping reachable
//! sets are only walked once. Buffers without available size info are
//! never roots, though other roots may still reach their dependents.
//!
//! A visited key in the result set means "this location was selected
//! for rewriting" — the boundary passes consult it afterwards.

use petgraph::graph::NodeIndex;
use tracing::debug;

use spanify_core::types::collections::FxHashSet;

use crate::graph::DepGraph;
use crate::record::SizeInfo;
use crate::registry::NodeRegistry;

use super::change_set::ChangeSet;

#[derive(Debug)]
pub struct CollectResult {
    pub changes: ChangeSet,
    /// Indices of every node selected for rewriting.
    pub visited: FxHashSet<NodeIndex>,
}

/// Walk the graph from every available buffer root, collecting edits.
pub fn collect(registry: &NodeRegistry, graph: &DepGraph) -> CollectResult {
    let mut changes = ChangeSet::new();
    let mut visited: FxHashSet<NodeIndex> = FxHashSet::default();
    let mut stack: Vec<NodeIndex> = Vec::new();

    for root in graph.node_indices() {
        let Some(node) = registry.get(graph.key(root)) else {
            continue;
        };
        if !node.is_buffer || node.size_info != SizeInfo::Available {
            continue;
        }

        stack.push(root);
        while let Some(idx) = stack.pop() {
            if !visited.insert(idx) {
                continue;
            }

            if let Some(node) = registry.get(graph.key(idx)) {
                if !node.is_placeholder() {
                    changes.insert(node.replacement.clone());
                    if let Some(include) = node.include() {
                        changes.insert(include);
                    }
                }
            }

            for neighbor in graph.sorted_neighbors(idx) {
                if !visited.contains(&neighbor) {
                    stack.push(neighbor);
                }
            }
        }
    }

    debug!(
        rewritten = visited.len(),
        edits = changes.len(),
        "reachability collected"
    );

    CollectResult { changes, visited }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Node, NodeKind};

    fn fixture() -> (NodeRegistry, DepGraph) {
        (NodeRegistry::new(), DepGraph::new())
    }

    fn add(
        registry: &mut NodeRegistry,
        graph: &mut DepGraph,
        key: &str,
        is_buffer: bool,
        size_info: SizeInfo,
    ) -> NodeIndex {
        registry.register(Node {
            is_buffer,
            replacement: key.to_string(),
            size_info,
            kind: NodeKind::Plain {
                include: format!("include-{key}"),
            },
        });
        graph.ensure_node(key)
    }

    #[test]
    fn available_root_emits_replacement_and_include() {
        let (mut registry, mut graph) = fixture();
        add(&mut registry, &mut graph, "buf", true, SizeInfo::Available);

        let result = collect(&registry, &graph);
        assert!(result.changes.contains("buf"));
        assert!(result.changes.contains("include-buf"));
        assert_eq!(result.changes.len(), 2);
    }

    #[test]
    fn unavailable_buffer_is_not_a_root() {
        let (mut registry, mut graph) = fixture();
        add(&mut registry, &mut graph, "buf", true, SizeInfo::Unavailable);

        let result = collect(&registry, &graph);
        assert!(result.changes.is_empty());
        assert!(result.visited.is_empty());
    }

    #[test]
    fn traversal_reaches_transitive_dependencies() {
        let (mut registry, mut graph) = fixture();
        let buf = add(&mut registry, &mut graph, "buf", true, SizeInfo::Available);
        let mid = add(&mut registry, &mut graph, "mid", false, SizeInfo::Unknown);
        let end = add(&mut registry, &mut graph, "end", false, SizeInfo::Unknown);
        graph.add_dependency(buf, mid);
        graph.add_dependency(mid, end);

        let result = collect(&registry, &graph);
        assert!(result.changes.contains("mid"));
        assert!(result.changes.contains("end"));
        assert_eq!(result.visited.len(), 3);
    }

    #[test]
    fn placeholder_nodes_are_visited_but_not_emitted() {
        let (mut registry, mut graph) = fixture();
        let buf = add(&mut registry, &mut graph, "buf", true, SizeInfo::Available);
        registry.register(Node {
            is_buffer: false,
            replacement: "r:::a.cc:::1:::0:::<empty>".to_string(),
            size_info: SizeInfo::Unknown,
            kind: NodeKind::Plain {
                include: "phantom-include".to_string(),
            },
        });
        let placeholder = graph.ensure_node("r:::a.cc:::1:::0:::<empty>");
        graph.add_dependency(buf, placeholder);

        let result = collect(&registry, &graph);
        assert!(result.visited.contains(&placeholder));
        assert!(!result.changes.contains("r:::a.cc:::1:::0:::<empty>"));
        // A suppressed node suppresses its include as well.
        assert!(!result.changes.contains("phantom-include"));
    }

    #[test]
    fn shared_subgraph_is_walked_once_and_deduplicated() {
        let (mut registry, mut graph) = fixture();
        let a = add(&mut registry, &mut graph, "a", true, SizeInfo::Available);
        let b = add(&mut registry, &mut graph, "b", true, SizeInfo::Available);
        let shared = add(&mut registry, &mut graph, "shared", false, SizeInfo::Unknown);
        graph.add_dependency(a, shared);
        graph.add_dependency(b, shared);

        let result = collect(&registry, &graph);
        assert_eq!(result.visited.len(), 3);
        assert!(result.changes.contains("shared"));
        // a, b, shared and their three includes.
        assert_eq!(result.changes.len(), 6);
    }

    #[test]
    fn cycles_terminate() {
        let (mut registry, mut graph) = fixture();
        let a = add(&mut registry, &mut graph, "a", true, SizeInfo::Available);
        let b = add(&mut registry, &mut graph, "b", false, SizeInfo::Unknown);
        graph.add_dependency(a, b);
        graph.add_dependency(b, a);

        let result = collect(&registry, &graph);
        assert_eq!(result.visited.len(), 2);
    }
}
