//! Render model and renderer back ends.
//!
//! `render()` turns a graph and its coordinates into renderer-agnostic draw
//! primitives; a `Renderer` turns a `Frame` of primitives into output text.

pub mod svg;
pub mod text;

use std::fmt;

pub use svg::SvgRenderer;
pub use text::TextRenderer;

use crate::config::RenderConfig;
use crate::graph::Graph;
use crate::layout::{Coordinates, Point, Viewport};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const DARK_GREEN: Color = Color::rgb(0, 178, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Formats as `#rrggbb`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// ─── DrawPrimitive ───────────────────────────────────────────────────────────

/// One drawing instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawPrimitive {
    /// A line segment between two vertex centres.
    Edge { from: Point, to: Point },
    /// A filled disc with a centred text label.
    Node {
        center: Point,
        radius: f64,
        fill: Color,
        label: String,
    },
}

impl DrawPrimitive {
    pub fn is_edge(&self) -> bool {
        matches!(self, DrawPrimitive::Edge { .. })
    }

    pub fn is_node(&self) -> bool {
        matches!(self, DrawPrimitive::Node { .. })
    }
}

// ─── Frame ───────────────────────────────────────────────────────────────────

/// Everything a back end needs to draw one picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub viewport: Viewport,
    pub primitives: Vec<DrawPrimitive>,
}

impl Frame {
    pub fn new(viewport: Viewport, primitives: Vec<DrawPrimitive>) -> Self {
        Self {
            viewport,
            primitives,
        }
    }

    pub fn edges(&self) -> impl Iterator<Item = &DrawPrimitive> {
        self.primitives.iter().filter(|p| p.is_edge())
    }

    pub fn nodes(&self) -> impl Iterator<Item = &DrawPrimitive> {
        self.primitives.iter().filter(|p| p.is_node())
    }
}

// ─── Render model ────────────────────────────────────────────────────────────

/// Build draw primitives with the default config.
pub fn render(graph: &Graph, coordinates: &Coordinates) -> Vec<DrawPrimitive> {
    render_with_config(graph, coordinates, &RenderConfig::default())
}

/// Build draw primitives: one `Edge` per edge `(i, j)` with `i < j`, then
/// one `Node` per vertex, so discs are drawn over lines.
///
/// Coordinates that do not cover every vertex (a degenerate viewport) produce
/// nothing.
pub fn render_with_config(
    graph: &Graph,
    coordinates: &Coordinates,
    config: &RenderConfig,
) -> Vec<DrawPrimitive> {
    if coordinates.len() != graph.vertex_count() {
        tracing::debug!(
            coordinates = coordinates.len(),
            vertices = graph.vertex_count(),
            "coordinates do not cover the graph, nothing to draw"
        );
        return Vec::new();
    }

    let edges = graph.edges().map(|(i, j)| DrawPrimitive::Edge {
        from: coordinates[i],
        to: coordinates[j],
    });
    let nodes = coordinates
        .iter()
        .enumerate()
        .map(|(i, &center)| DrawPrimitive::Node {
            center,
            radius: config.node_radius,
            fill: config.group_color(graph.group(i)),
            label: i.to_string(),
        });
    edges.chain(nodes).collect()
}

// ─── Renderer trait ──────────────────────────────────────────────────────────

/// Trait for output back ends.
pub trait Renderer {
    /// Render a frame to a string.
    fn render(&self, frame: &Frame) -> String;
}

/// Round to two decimals for compact, stable output.
pub(crate) fn fmt_coord(v: f64) -> String {
    let rounded = (v * 100.0).round() / 100.0;
    if rounded == 0.0 {
        // avoid "-0"
        "0".to_string()
    } else {
        format!("{rounded}")
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers.rs"]
mod tests;
