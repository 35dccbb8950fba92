//! Stage orchestration. Data flows strictly forward: build → propagate
//! → collect → adapt → emit. Everything is materialized in memory for
//! one run and dropped afterwards; no stage loops back.

use std::io::BufRead;

use serde::Serialize;
use tracing::info;

use spanify_core::errors::ExtractError;

use crate::boundary;
use crate::graph::GraphBuilder;
use crate::propagation;
use crate::reachability;

/// Run counters, reported on stderr after a successful run.
#[derive(Debug, Default, Clone, Copy, Serialize)]
pub struct ExtractStats {
    pub nodes: usize,
    pub edges: usize,
    pub buffer_roots: usize,
    pub available_roots: usize,
    pub rewritten_nodes: usize,
    pub derefs_adapted: usize,
    pub accessors_inserted: usize,
    pub edits: usize,
}

#[derive(Debug)]
pub struct ExtractOutput {
    /// Sorted, deduplicated edit directives.
    pub edits: Vec<String>,
    pub stats: ExtractStats,
}

/// Run the full extraction pipeline over one input stream.
///
/// Fatal on any malformed record or structural contract violation; no
/// partial output is ever produced.
pub fn extract_edits(reader: impl BufRead) -> Result<ExtractOutput, ExtractError> {
    let (mut registry, graph) = GraphBuilder::build(reader)?;
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph built"
    );

    let propagation = propagation::propagate(&mut registry, &graph);
    info!(
        buffer_roots = propagation.buffer_roots,
        available_roots = propagation.available_roots,
        "availability propagated"
    );

    let reachability::CollectResult {
        mut changes,
        visited,
    } = reachability::collect(&registry, &graph);

    let boundary = boundary::adapt(&registry, &graph, &visited, &mut changes)?;
    info!(
        rewritten = visited.len(),
        derefs = boundary.derefs_adapted,
        accessors = boundary.accessors_inserted,
        "boundaries adapted"
    );

    let stats = ExtractStats {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        buffer_roots: propagation.buffer_roots,
        available_roots: propagation.available_roots,
        rewritten_nodes: visited.len(),
        derefs_adapted: boundary.derefs_adapted,
        accessors_inserted: boundary.accessors_inserted,
        edits: changes.len(),
    };

    Ok(ExtractOutput {
        edits: changes.into_sorted(),
        stats,
    })
}
