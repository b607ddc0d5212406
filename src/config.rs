//! Configuration for layout and rendering.
//!
//! Every visual constant lives here so shells can override them in one place.

use crate::renderers::Color;

/// Default viewport width in pixels.
pub const DEFAULT_WIDTH: i32 = 800;
/// Default viewport height in pixels.
pub const DEFAULT_HEIGHT: i32 = 600;
/// Node disc radius (half of a 20-unit disc).
pub const NODE_RADIUS: f64 = 10.0;
/// Gap between the fallback circle and the shorter viewport edge.
pub const CIRCLE_MARGIN: f64 = 50.0;

/// Group fill colors, indexed by `group % 3`: red, dark green, blue.
pub const GROUP_PALETTE: [Color; 3] = [Color::RED, Color::DARK_GREEN, Color::BLUE];

/// Visual settings shared by layout, rendering and the viewer.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Initial viewport width.
    pub width: i32,
    /// Initial viewport height.
    pub height: i32,
    pub node_radius: f64,
    /// Margin subtracted from half the shorter viewport side in circular layout.
    pub circle_margin: f64,
    pub palette: [Color; 3],
    pub edge_color: Color,
    pub outline_color: Color,
    pub label_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            node_radius: NODE_RADIUS,
            circle_margin: CIRCLE_MARGIN,
            palette: GROUP_PALETTE,
            edge_color: Color::LIGHT_GRAY,
            outline_color: Color::BLACK,
            label_color: Color::BLACK,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same configuration with a different initial viewport.
    pub fn with_viewport(mut self, width: i32, height: i32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Fill color for a group tag.
    pub fn group_color(&self, group: u8) -> Color {
        self.palette[usize::from(group) % self.palette.len()]
    }
}
