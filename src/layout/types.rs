//! Layout types: Point, Viewport, Coordinates.

// ─── Point ───────────────────────────────────────────────────────────────────

/// A pixel position in the viewport, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

// ─── Viewport ────────────────────────────────────────────────────────────────

/// Size of the drawing surface in pixels.
///
/// Signed because shells report whatever their window toolkit hands them,
/// including zero or negative sizes while a window is being created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when nothing can be drawn: either side is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

// ─── Coordinates ─────────────────────────────────────────────────────────────

/// Position of every vertex, indexed by vertex id.
///
/// Empty when the viewport is degenerate or the graph has no vertices.
pub type Coordinates = Vec<Point>;
