//! Fallback placement on a circle centred in the viewport.

use std::f64::consts::TAU;

use super::types::{Coordinates, Point, Viewport};

/// Radius of the layout circle: half the shorter side minus `margin`,
/// never negative.
pub fn circle_radius(viewport: Viewport, margin: f64) -> f64 {
    let shorter = f64::from(viewport.width.min(viewport.height));
    (shorter / 2.0 - margin).max(0.0)
}

/// Spread `vertex_count` vertices evenly on a circle, vertex `i` at angle
/// `2π·i / vertex_count` measured from the positive x axis.
pub fn circular_layout(vertex_count: usize, viewport: Viewport, margin: f64) -> Coordinates {
    if viewport.is_degenerate() || vertex_count == 0 {
        return Vec::new();
    }
    let center = viewport.center();
    let radius = circle_radius(viewport, margin);
    (0..vertex_count)
        .map(|i| {
            let angle = TAU * i as f64 / vertex_count as f64;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}
