//! Plain-text renderer: one line per primitive, in drawing order.

use super::{DrawPrimitive, Frame, Renderer, fmt_coord};

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, frame: &Frame) -> String {
        let mut out = format!(
            "viewport {}x{}\n",
            frame.viewport.width, frame.viewport.height
        );
        for primitive in &frame.primitives {
            let line = match primitive {
                DrawPrimitive::Edge { from, to } => format!(
                    "edge ({}, {}) -> ({}, {})",
                    fmt_coord(from.x),
                    fmt_coord(from.y),
                    fmt_coord(to.x),
                    fmt_coord(to.y)
                ),
                DrawPrimitive::Node {
                    center,
                    radius,
                    fill,
                    label,
                } => format!(
                    "node {label} at ({}, {}) r={} fill={fill}",
                    fmt_coord(center.x),
                    fmt_coord(center.y),
                    fmt_coord(*radius)
                ),
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}
