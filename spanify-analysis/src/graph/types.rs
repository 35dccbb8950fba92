//! Graph storage: petgraph `StableDiGraph` plus a key → index side table.

use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableDiGraph;
use petgraph::Direction;

use spanify_core::types::collections::FxHashMap;

/// Directed dependency graph keyed by node identity (replacement text).
/// Node weights are the keys themselves; all attributes live in the
/// `NodeRegistry`. Parallel edges collapse; self-loops are permitted.
#[derive(Debug, Default)]
pub struct DepGraph {
    graph: StableDiGraph<String, ()>,
    indices: FxHashMap<String, NodeIndex>,
}

impl DepGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `key`, inserting an isolated node if absent.
    pub fn ensure_node(&mut self, key: &str) -> NodeIndex {
        if let Some(&idx) = self.indices.get(key) {
            return idx;
        }
        let idx = self.graph.add_node(key.to_string());
        self.indices.insert(key.to_string(), idx);
        idx
    }

    /// Add a directed dependency edge. Duplicates collapse.
    pub fn add_dependency(&mut self, source: NodeIndex, destination: NodeIndex) {
        self.graph.update_edge(source, destination, ());
    }

    pub fn index_of(&self, key: &str) -> Option<NodeIndex> {
        self.indices.get(key).copied()
    }

    pub fn key(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Outgoing neighbors in arbitrary order.
    pub fn neighbors(&self, idx: NodeIndex) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.neighbors_directed(idx, Direction::Outgoing)
    }

    /// Outgoing neighbors in lexicographic key order. Traversals expand
    /// through this so runs are deterministic for identical input.
    pub fn sorted_neighbors(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut out: Vec<NodeIndex> = self.neighbors(idx).collect();
        out.sort_by(|a, b| self.key(*a).cmp(self.key(*b)));
        out
    }

    pub fn out_degree(&self, idx: NodeIndex) -> usize {
        self.neighbors(idx).count()
    }

    /// All node indices in insertion order.
    pub fn node_indices(&self) -> impl Iterator<Item = NodeIndex> + '_ {
        self.graph.node_indices()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
