//! Viewer state for presentation shells.
//!
//! A shell owns one `Viewer`. Loading replaces the displayed graph wholesale
//! and only on success; resizing re-runs layout. Everything runs on the
//! caller's thread.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::config::RenderConfig;
use crate::error::{GraphFormatError, LoadError};
use crate::graph::Graph;
use crate::layout::{self, Coordinates, Viewport};
use crate::parsers;
use crate::renderers::{self, Frame};

// ─── LoadSummary ─────────────────────────────────────────────────────────────

/// What a shell reports after a successful load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub vertices: usize,
    pub edges: usize,
    /// Non-fatal problem worth showing, such as `EmptyGraph`.
    pub warning: Option<GraphFormatError>,
}

impl LoadSummary {
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            warning: graph.ensure_non_empty().err(),
        }
    }
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Loaded: {} vertices, {} edges.",
            self.vertices, self.edges
        )
    }
}

// ─── Viewer ──────────────────────────────────────────────────────────────────

pub struct Viewer {
    config: RenderConfig,
    viewport: Viewport,
    graph: Option<Graph>,
    coordinates: Coordinates,
}

impl Viewer {
    /// An empty viewer sized to the config's initial viewport.
    pub fn new(config: RenderConfig) -> Self {
        let viewport = Viewport::new(config.width, config.height);
        Self {
            config,
            viewport,
            graph: None,
            coordinates: Vec::new(),
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The graph currently on display, if any.
    pub fn graph(&self) -> Option<&Graph> {
        self.graph.as_ref()
    }

    pub fn coordinates(&self) -> &Coordinates {
        &self.coordinates
    }

    /// Parse `src` and display the result.
    ///
    /// On error the previously displayed graph stays untouched.
    pub fn load(&mut self, src: &str) -> Result<LoadSummary, GraphFormatError> {
        let graph = parsers::parse(src)?;
        let summary = LoadSummary::of(&graph);
        match &summary.warning {
            Some(warning) => tracing::warn!(%warning, "loaded graph"),
            None => tracing::info!(
                vertices = summary.vertices,
                edges = summary.edges,
                "loaded graph"
            ),
        }
        self.show(graph);
        Ok(summary)
    }

    /// Read a whole file and load it.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<LoadSummary, LoadError> {
        let text = fs::read_to_string(path)?;
        Ok(self.load(&text)?)
    }

    /// Display `graph`, dropping the previous one.
    pub fn show(&mut self, graph: Graph) {
        self.graph = Some(graph);
        self.relayout();
    }

    /// Report a new viewport size. Returns whether layout was recomputed.
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        let viewport = Viewport::new(width, height);
        if viewport == self.viewport {
            return false;
        }
        self.viewport = viewport;
        self.relayout();
        true
    }

    /// Primitives for the current graph and viewport.
    pub fn frame(&self) -> Frame {
        let primitives = match &self.graph {
            Some(graph) => renderers::render_with_config(graph, &self.coordinates, &self.config),
            None => Vec::new(),
        };
        Frame::new(self.viewport, primitives)
    }

    fn relayout(&mut self) {
        self.coordinates = match &self.graph {
            Some(graph) => layout::layout_with_config(graph, self.viewport, &self.config),
            None => Vec::new(),
        };
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

#[cfg(test)]
#[path = "../tests/rust/test_viewer.rs"]
mod tests;
