//! Grid placement from spatial hints.
//!
//! The viewport is split into `(max_col + 2) × (max_row + 2)` equal cells and
//! a vertex at grid cell `(col, row)` is drawn at the corner shared with cell
//! `(col + 1, row + 1)`. This leaves one empty cell of margin on every side.

use crate::graph::GridPos;

use super::types::{Coordinates, Point, Viewport};

/// Place each hinted vertex on the viewport grid.
///
/// Returns empty coordinates for a degenerate viewport.
pub fn grid_layout(hints: &[GridPos], viewport: Viewport) -> Coordinates {
    if viewport.is_degenerate() || hints.is_empty() {
        return Vec::new();
    }
    let max_col = hints.iter().map(|p| p.col).max().unwrap_or(0);
    let max_row = hints.iter().map(|p| p.row).max().unwrap_or(0);
    let cell_w = f64::from(viewport.width) / (max_col + 2) as f64;
    let cell_h = f64::from(viewport.height) / (max_row + 2) as f64;

    hints
        .iter()
        .map(|p| Point::new((p.col + 1) as f64 * cell_w, (p.row + 1) as f64 * cell_h))
        .collect()
}
