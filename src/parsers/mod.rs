//! Parser registry: detect the document variant and dispatch to its parser.

pub mod adjacency;
pub mod base;
pub mod spatial;

pub use base::Parser;

use crate::error::GraphFormatError;
use crate::graph::Graph;
use adjacency::AdjacencyParser;
use base::EDGES_MARKER;
use spatial::SpatialParser;

/// The two supported document layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// Occupancy grid + edge list + optional groups.
    Spatial,
    /// Square adjacency matrix + mandatory groups.
    Adjacency,
}

/// Detect the document variant.
///
/// Both variants open with a matrix section; only spatial documents carry an
/// edge list, so its marker decides.
pub fn detect_format(src: &str) -> DocumentFormat {
    if src.lines().any(|line| line.trim().starts_with(EDGES_MARKER)) {
        DocumentFormat::Spatial
    } else {
        DocumentFormat::Adjacency
    }
}

/// Parse a graph document of either variant.
pub fn parse(src: &str) -> Result<Graph, GraphFormatError> {
    let format = detect_format(src);
    tracing::debug!(?format, "detected document format");
    match format {
        DocumentFormat::Spatial => SpatialParser.parse(src),
        DocumentFormat::Adjacency => AdjacencyParser.parse(src),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers.rs"]
mod tests;
