//! Layout engine: maps vertex ids to viewport coordinates.
//!
//! Layout is a pure function of the graph, the viewport and the config. Shells
//! call it again whenever either input changes; nothing is patched in place.

pub mod circular;
pub mod grid;
pub mod types;

pub use types::{Coordinates, Point, Viewport};

use crate::config::RenderConfig;
use crate::graph::Graph;

/// Lay out `graph` in `viewport` with the default config.
pub fn layout(graph: &Graph, viewport: Viewport) -> Coordinates {
    layout_with_config(graph, viewport, &RenderConfig::default())
}

/// Lay out `graph` in `viewport`.
///
/// Graphs with a spatial hint use grid placement; others use the circle.
/// A degenerate viewport yields no coordinates.
pub fn layout_with_config(graph: &Graph, viewport: Viewport, config: &RenderConfig) -> Coordinates {
    if viewport.is_degenerate() {
        tracing::debug!(?viewport, "degenerate viewport, skipping layout");
        return Vec::new();
    }
    match graph.spatial_hint() {
        Some(hints) => grid::grid_layout(hints, viewport),
        None => circular::circular_layout(graph.vertex_count(), viewport, config.circle_margin),
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_layout.rs"]
mod tests;
