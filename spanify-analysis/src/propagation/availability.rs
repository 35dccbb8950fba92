//! Availability evaluation, one depth-first pass per buffer root.
//!
//! A buffer can only be rewritten to a span if a valid extent is
//! computable, either at the site itself or through the locations its
//! value flows from. Per node:
//! - already `Available` → available, final across all roots;
//! - any dependency unavailable → unavailable (short-circuit);
//! - no dependencies at all → unavailable (no evidence of an extent);
//! - a dependency that cycles back onto the active path is non-blocking
//!   (cycle ⇒ available policy; mutually-assigned buffers resolve
//!   through whichever side carries the size).
//!
//! The traversal is an explicit-stack DFS with three-state marks
//! (unvisited / in-progress / done), fresh per root; recursion depth is
//! bounded only by memory, not the thread stack. Results are cached on
//! the registry node, so later roots reuse `Available` verdicts in O(1).

use petgraph::graph::NodeIndex;
use tracing::debug;

use spanify_core::types::collections::FxHashMap;

use crate::graph::DepGraph;
use crate::record::SizeInfo;
use crate::registry::NodeRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Per-node verdict as seen by the caller's aggregation. A cycle folds
/// into `Available` here; it never becomes a node's cached value on its
/// own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Eval {
    Available,
    Unavailable,
}

/// DFS frame: a node plus its expansion cursor.
struct Frame {
    idx: NodeIndex,
    neighbors: Vec<NodeIndex>,
    next: usize,
    result: Eval,
}

/// What `enter` decided for a node: an immediate verdict, or a pushed
/// frame whose children still need evaluation.
enum Entered {
    Fast(Eval),
    Pushed(Frame),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PropagationSummary {
    pub buffer_roots: usize,
    pub available_roots: usize,
}

/// Determine `size_info` for every buffer node in the graph, caching the
/// verdict on the registry entry.
pub fn propagate(registry: &mut NodeRegistry, graph: &DepGraph) -> PropagationSummary {
    let roots: Vec<NodeIndex> = graph
        .node_indices()
        .filter(|&idx| {
            registry
                .get(graph.key(idx))
                .is_some_and(|node| node.is_buffer)
        })
        .collect();

    let mut summary = PropagationSummary {
        buffer_roots: roots.len(),
        ..Default::default()
    };

    for root in roots {
        let verdict = evaluate_root(registry, graph, root);
        if verdict == Eval::Available {
            summary.available_roots += 1;
        }
        debug!(
            root = graph.key(root),
            available = (verdict == Eval::Available),
            "buffer root evaluated"
        );
    }

    summary
}

/// Evaluate one root with fresh visitation state.
fn evaluate_root(registry: &mut NodeRegistry, graph: &DepGraph, root: NodeIndex) -> Eval {
    let mut marks: FxHashMap<NodeIndex, Mark> = FxHashMap::default();
    let mut stack: Vec<Frame> = Vec::new();
    // Verdict handed back by the most recently completed child (or fast
    // path), consumed by the frame on top of the stack.
    let mut returned: Option<Eval> = None;

    match enter(registry, graph, &mut marks, root) {
        Entered::Fast(verdict) => return verdict,
        Entered::Pushed(frame) => stack.push(frame),
    }

    while let Some(frame) = stack.last_mut() {
        if let Some(verdict) = returned.take() {
            match verdict {
                Eval::Unavailable => {
                    // One unavailable dependency settles it.
                    frame.result = Eval::Unavailable;
                    frame.next = frame.neighbors.len();
                }
                Eval::Available => frame.result = Eval::Available,
            }
        }

        if frame.next < frame.neighbors.len() {
            let child = frame.neighbors[frame.next];
            frame.next += 1;
            match enter(registry, graph, &mut marks, child) {
                Entered::Fast(verdict) => returned = Some(verdict),
                Entered::Pushed(child_frame) => stack.push(child_frame),
            }
        } else {
            let result = frame.result;
            let idx = frame.idx;
            registry.set_size_info(
                graph.key(idx),
                match result {
                    Eval::Available => SizeInfo::Available,
                    Eval::Unavailable => SizeInfo::Unavailable,
                },
            );
            marks.insert(idx, Mark::Done);
            stack.pop();
            returned = Some(result);
        }
    }

    // The root frame always hands back a verdict.
    returned.unwrap_or(Eval::Unavailable)
}

/// Fast paths for a node about to be evaluated, or a fresh frame.
fn enter(
    registry: &NodeRegistry,
    graph: &DepGraph,
    marks: &mut FxHashMap<NodeIndex, Mark>,
    idx: NodeIndex,
) -> Entered {
    // `Available` is final across roots; a previous root's `Unavailable`
    // is re-derived under this root's own cycle structure.
    if registry
        .get(graph.key(idx))
        .is_some_and(|node| node.size_info == SizeInfo::Available)
    {
        return Entered::Fast(Eval::Available);
    }

    match marks.get(&idx) {
        // On the active path: a cycle, non-blocking for the caller.
        Some(Mark::InProgress) => return Entered::Fast(Eval::Available),
        // Done without an `Available` cache means unavailable.
        Some(Mark::Done) => return Entered::Fast(Eval::Unavailable),
        None => {}
    }

    marks.insert(idx, Mark::InProgress);
    Entered::Pushed(Frame {
        idx,
        neighbors: graph.sorted_neighbors(idx),
        next: 0,
        // A node with no size-providing dependency stays unavailable.
        result: Eval::Unavailable,
    })
}
