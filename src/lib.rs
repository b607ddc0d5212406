//! graph-viewer — loads grouped graph documents and turns them into drawable
//! primitives.
//!
//! Pipeline: text → `parsers::parse` → `Graph` → `layout` → `Coordinates`
//! → `renderers::render` → `DrawPrimitive`s → a `Renderer` back end.
//!
//! Public API: `render_document()` and `Viewer`.

pub mod config;
pub mod error;
pub mod graph;
pub mod layout;
pub mod parsers;
pub mod renderers;
pub mod viewer;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::RenderConfig;
pub use error::{GraphFormatError, LoadError, Section};
pub use graph::{Graph, GridPos};
pub use parsers::parse;
pub use renderers::{DrawPrimitive, Frame, Renderer, SvgRenderer, TextRenderer};
pub use viewer::{LoadSummary, Viewer};

/// Output formats a shell can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    /// Standalone SVG document.
    #[default]
    Svg,
    /// One line per draw primitive.
    Text,
    /// Graphviz DOT (ignores layout).
    Dot,
}

/// Load a graph document and render it in one call.
///
/// Returns the load summary alongside the rendered output.
pub fn render_document(
    src: &str,
    config: &RenderConfig,
    format: OutputFormat,
) -> Result<(LoadSummary, String), GraphFormatError> {
    let mut viewer = Viewer::new(config.clone());
    let summary = viewer.load(src)?;
    let output = match format {
        OutputFormat::Svg => SvgRenderer::new(config).render(&viewer.frame()),
        OutputFormat::Text => TextRenderer.render(&viewer.frame()),
        OutputFormat::Dot => viewer
            .graph()
            .map(graph::export::to_dot)
            .unwrap_or_default(),
    };
    Ok((summary, output))
}
