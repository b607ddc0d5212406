//! Conversions from `Graph` to petgraph and Graphviz DOT.

use std::fmt;

use petgraph::dot::{Config, Dot};
use petgraph::graph::{NodeIndex, UnGraph};

use super::types::{Graph, Group, VertexId};

/// Node weight of an exported graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexInfo {
    pub id: VertexId,
    pub group: Group,
}

impl fmt::Display for VertexInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (group {})", self.id, self.group)
    }
}

/// Copy `graph` into a petgraph `UnGraph`.
///
/// Node index `i` corresponds to vertex `i`; each edge appears once.
pub fn to_petgraph(graph: &Graph) -> UnGraph<VertexInfo, ()> {
    let mut out = UnGraph::with_capacity(graph.vertex_count(), graph.edge_count());
    for id in 0..graph.vertex_count() {
        out.add_node(VertexInfo {
            id,
            group: graph.group(id),
        });
    }
    for (a, b) in graph.edges() {
        out.add_edge(NodeIndex::new(a), NodeIndex::new(b), ());
    }
    out
}

/// Render `graph` as an undirected Graphviz document.
pub fn to_dot(graph: &Graph) -> String {
    let labeled = to_petgraph(graph).map(|_, info| info.to_string(), |_, _| "");
    format!("{}", Dot::with_config(&labeled, &[Config::EdgeNoLabel]))
}

#[cfg(test)]
#[path = "../../tests/rust/test_graph_export.rs"]
mod tests;
