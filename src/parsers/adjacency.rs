//! Adjacency documents: a square 0/1 matrix followed by mandatory groups.

use crate::error::{GraphFormatError, Section};
use crate::graph::Graph;

use super::base::{GROUPS_MARKER, LineCursor, MATRIX_MARKER, Parser};

/// Parser for abstract graphs given as an adjacency matrix.
///
/// Row `i` lists the neighbours of vertex `i`. No spatial hint is produced.
pub struct AdjacencyParser;

impl Parser for AdjacencyParser {
    fn parse(&self, src: &str) -> Result<Graph, GraphFormatError> {
        let mut cursor = LineCursor::new(src);

        cursor.expect_section(MATRIX_MARKER, Section::Matrix)?;
        let rows = cursor.read_matrix()?;
        let n = rows.len();
        if let Some(row) = rows.iter().position(|r| r.len() != n) {
            return Err(GraphFormatError::NonSquareMatrix(row));
        }

        if !cursor.find_marker(GROUPS_MARKER) {
            return Err(GraphFormatError::MissingSection(Section::Groups));
        }
        let assignments = cursor.read_groups(n)?;
        Graph::from_matrix(&rows).with_groups(&assignments)
    }
}
