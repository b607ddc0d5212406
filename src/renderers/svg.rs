//! SVG renderer: converts a frame of draw primitives to a standalone SVG
//! document sized to the viewport.

use super::{DrawPrimitive, Frame, Renderer, fmt_coord};
use crate::config::RenderConfig;
use crate::renderers::Color;

// ── Constants ────────────────────────────────────────────────────────────────

const FONT_SIZE: i32 = 12;
const FONT_FAMILY: &str = "sans-serif";
const STROKE_WIDTH: f64 = 1.0;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn font(size: i32) -> String {
    format!(r#"font-family="{FONT_FAMILY}" font-size="{size}""#)
}

// ── SvgRenderer ──────────────────────────────────────────────────────────────

/// Draws edges as lines and nodes as outlined circles with centred labels.
pub struct SvgRenderer {
    pub edge_color: Color,
    pub outline_color: Color,
    pub label_color: Color,
    pub background: Color,
}

impl SvgRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            edge_color: config.edge_color,
            outline_color: config.outline_color,
            label_color: config.label_color,
            background: Color::WHITE,
        }
    }

    fn render_primitive(&self, primitive: &DrawPrimitive) -> String {
        match primitive {
            DrawPrimitive::Edge { from, to } => format!(
                r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{STROKE_WIDTH}"/>"#,
                fmt_coord(from.x),
                fmt_coord(from.y),
                fmt_coord(to.x),
                fmt_coord(to.y),
                self.edge_color,
            ),
            DrawPrimitive::Node {
                center,
                radius,
                fill,
                label,
            } => {
                let cx = fmt_coord(center.x);
                let cy = fmt_coord(center.y);
                let r = fmt_coord(*radius);
                let f = font(FONT_SIZE);
                format!(
                    "<circle cx=\"{cx}\" cy=\"{cy}\" r=\"{r}\" fill=\"{fill}\" stroke=\"{}\" stroke-width=\"{STROKE_WIDTH}\"/>\n\
                     <text x=\"{cx}\" y=\"{cy}\" dominant-baseline=\"central\" text-anchor=\"middle\" {f} fill=\"{}\">{}</text>",
                    self.outline_color,
                    self.label_color,
                    escape(label),
                )
            }
        }
    }
}

impl Default for SvgRenderer {
    fn default() -> Self {
        Self::new(&RenderConfig::default())
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, frame: &Frame) -> String {
        let w = frame.viewport.width.max(0);
        let h = frame.viewport.height.max(0);
        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            format!(
                r#"<rect width="100%" height="100%" fill="{}"/>"#,
                self.background
            ),
        ];
        parts.extend(frame.primitives.iter().map(|p| self.render_primitive(p)));
        parts.push("</svg>".to_string());
        let mut out = parts.join("\n");
        out.push('\n');
        out
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_renderers_svg.rs"]
mod tests;
