//! WASM bindings for graph-viewer.
//!
//! Exposes `render` and `renderWithSize` to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::{OutputFormat, RenderConfig, render_document};

/// Render a graph document to SVG at the default viewport size.
#[wasm_bindgen]
pub fn render(src: &str) -> Result<String, JsError> {
    render_with_size(src, RenderConfig::default().width, RenderConfig::default().height)
}

/// Render a graph document to SVG at the given viewport size.
#[wasm_bindgen(js_name = "renderWithSize")]
pub fn render_with_size(src: &str, width: i32, height: i32) -> Result<String, JsError> {
    let config = RenderConfig::default().with_viewport(width, height);
    render_document(src, &config, OutputFormat::Svg)
        .map(|(_, svg)| svg)
        .map_err(|e| JsError::new(&e.to_string()))
}
