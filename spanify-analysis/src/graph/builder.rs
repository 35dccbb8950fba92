//! Assembles the registry and dependency graph from the input stream.
//!
//! The stream concatenates the output of every tool invocation across
//! the build, one line per fragment:
//! - `{node}` — a declaration with no known dependency
//! - `{lhs};{rhs}` — a directed edge lhs → rhs
//!
//! Anything else is a fatal input error; the run produces no output.

use std::io::BufRead;

use tracing::debug;

use spanify_core::errors::{ExtractError, ParseError};

use super::types::DepGraph;
use crate::record::parse_record;
use crate::registry::NodeRegistry;

/// Record separator between the two endpoints of an edge line.
const EDGE_DELIMITER: char = ';';

#[derive(Debug, Default)]
pub struct GraphBuilder {
    registry: NodeRegistry,
    graph: DepGraph,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume the whole stream and return the finished registry/graph.
    pub fn build(reader: impl BufRead) -> Result<(NodeRegistry, DepGraph), ExtractError> {
        let mut builder = Self::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            builder.add_line(line.trim_end_matches('\r'), idx + 1)?;
        }
        Ok(builder.finish())
    }

    /// Process one input line. `line_no` is 1-based, for diagnostics.
    pub fn add_line(&mut self, line: &str, line_no: usize) -> Result<(), ParseError> {
        let records: Vec<&str> = line.split(EDGE_DELIMITER).collect();
        match records.as_slice() {
            [single] => {
                let node = parse_record(single, line_no)?;
                let idx = self.graph.ensure_node(node.key());
                self.registry.register(node);
                debug!(line = line_no, node = self.graph.key(idx), "declaration");
            }
            [lhs, rhs] => {
                let lhs = parse_record(lhs, line_no)?;
                let rhs = parse_record(rhs, line_no)?;
                let source = self.graph.ensure_node(lhs.key());
                let destination = self.graph.ensure_node(rhs.key());
                self.registry.register(lhs);
                self.registry.register(rhs);
                self.graph.add_dependency(source, destination);
            }
            _ => {
                return Err(ParseError::MalformedLine {
                    line: line_no,
                    records: records.len(),
                });
            }
        }
        Ok(())
    }

    pub fn finish(self) -> (NodeRegistry, DepGraph) {
        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "graph assembled"
        );
        (self.registry, self.graph)
    }
}
