//! Spatial documents: an occupancy grid, an explicit edge list and optional
//! groups.
//!
//! ```text
//! Macierz
//! [1 0]
//! [0 1]
//! Lista polaczen
//! 0 - 1
//! Grupa 0: 0
//! Grupa 1: 1
//! Grupa 2:
//! ```

use crate::error::{GraphFormatError, Section};
use crate::graph::{Graph, GridPos};

use super::base::{EDGES_MARKER, GROUPS_MARKER, LineCursor, MATRIX_MARKER, Parser};

/// Parser for grid-placed graphs.
///
/// Each 1-cell of the grid becomes a vertex, numbered in row-major order, and
/// remembers its cell as a spatial hint.
pub struct SpatialParser;

impl Parser for SpatialParser {
    fn parse(&self, src: &str) -> Result<Graph, GraphFormatError> {
        let mut cursor = LineCursor::new(src);

        cursor.expect_section(MATRIX_MARKER, Section::Matrix)?;
        let rows = cursor.read_matrix()?;
        let cells = occupied_cells(&rows);

        cursor.expect_section(EDGES_MARKER, Section::Edges)?;
        let edges = cursor.read_edges()?;
        let vertex_count = cells.len();
        let graph = Graph::from_grid(cells, &edges)?;

        if !cursor.find_marker(GROUPS_MARKER) {
            tracing::debug!("no groups section, all vertices in group 0");
            return Ok(graph);
        }
        let assignments = cursor.read_groups(vertex_count)?;
        graph.with_groups(&assignments)
    }
}

/// Grid cells holding a 1, in row-major order.
pub fn occupied_cells(rows: &[Vec<bool>]) -> Vec<GridPos> {
    rows.iter()
        .enumerate()
        .flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, occupied)| **occupied)
                .map(move |(col, _)| GridPos::new(col, row))
        })
        .collect()
}
