//! `Graph`, `GridPos` and the invariants tying them together.
//!
//! A `Graph` is built in one step from fully accumulated parts and never
//! mutated afterwards. Adjacency is stored as a dense symmetric matrix with a
//! cleared diagonal; graphs are small and hand-written, so density is fine.

use crate::error::GraphFormatError;

/// Index of a vertex, in `[0, vertex_count)`.
pub type VertexId = usize;

/// Group tag attached to a vertex: 0, 1 or 2.
pub type Group = u8;

/// Number of group tags a document can assign.
pub const GROUP_COUNT: usize = 3;

// ─── GridPos ─────────────────────────────────────────────────────────────────

/// Spatial hint: the (column, row) cell a vertex occupies in the source grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPos {
    pub col: usize,
    pub row: usize,
}

impl GridPos {
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }
}

// ─── Graph ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<bool>>,
    groups: Vec<Group>,
    spatial_hint: Option<Vec<GridPos>>,
}

impl Graph {
    /// Build a graph of `vertex_count` vertices from an undirected edge list.
    ///
    /// Every endpoint must be below `vertex_count`. Self-loops are dropped.
    /// All vertices start in group 0.
    pub fn from_edges(
        vertex_count: usize,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, GraphFormatError> {
        let mut adjacency = vec![vec![false; vertex_count]; vertex_count];
        for &(a, b) in edges {
            for v in [a, b] {
                if v >= vertex_count {
                    return Err(GraphFormatError::OutOfRange(v));
                }
            }
            if a == b {
                tracing::debug!(vertex = a, "ignoring self-loop");
                continue;
            }
            adjacency[a][b] = true;
            adjacency[b][a] = true;
        }
        Ok(Self {
            adjacency,
            groups: vec![0; vertex_count],
            spatial_hint: None,
        })
    }

    /// Build a graph whose vertices are the given grid cells, in order.
    ///
    /// Vertex `i` gets spatial hint `cells[i]`.
    pub fn from_grid(
        cells: Vec<GridPos>,
        edges: &[(VertexId, VertexId)],
    ) -> Result<Self, GraphFormatError> {
        let mut graph = Self::from_edges(cells.len(), edges)?;
        graph.spatial_hint = Some(cells);
        Ok(graph)
    }

    /// Build a graph from a square 0/1 matrix.
    ///
    /// The matrix is symmetrized (`a[i][j] || a[j][i]`) and its diagonal
    /// ignored. The caller guarantees every row has one entry per row.
    pub(crate) fn from_matrix(rows: &[Vec<bool>]) -> Self {
        let n = rows.len();
        let adjacency = (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| i != j && (rows[i][j] || rows[j][i]))
                    .collect()
            })
            .collect();
        Self {
            adjacency,
            groups: vec![0; n],
            spatial_hint: None,
        }
    }

    /// Return the same graph with the given `(vertex, group)` assignments applied in order.
    ///
    /// Vertices not listed keep their current group. A later assignment to the
    /// same vertex wins.
    pub fn with_groups(
        mut self,
        assignments: &[(VertexId, Group)],
    ) -> Result<Self, GraphFormatError> {
        let n = self.vertex_count();
        if let Some(&(v, _)) = assignments.iter().find(|(v, _)| *v >= n) {
            return Err(GraphFormatError::OutOfRange(v));
        }
        for &(v, g) in assignments {
            self.groups[v] = g;
        }
        Ok(self)
    }

    // ─── Queries ─────────────────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Whether `a` and `b` are joined by an edge. Out-of-range ids and the
    /// diagonal report `false`.
    pub fn has_edge(&self, a: VertexId, b: VertexId) -> bool {
        a != b
            && self
                .adjacency
                .get(a)
                .and_then(|row| row.get(b))
                .copied()
                .unwrap_or(false)
    }

    /// Every edge once, as `(i, j)` with `i < j`, in row-major order.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .skip(i + 1)
                .filter(|(_, connected)| **connected)
                .map(move |(j, _)| (i, j))
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Neighbours of `v` in ascending order; empty when `v` is out of range.
    pub fn neighbors(&self, v: VertexId) -> Vec<VertexId> {
        match self.adjacency.get(v) {
            None => vec![],
            Some(row) => row
                .iter()
                .enumerate()
                .filter(|(_, connected)| **connected)
                .map(|(j, _)| j)
                .collect(),
        }
    }

    /// Group of `v`. Panics if `v` is out of range.
    pub fn group(&self, v: VertexId) -> Group {
        self.groups[v]
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Grid placement of every vertex, when the document carried one.
    pub fn spatial_hint(&self) -> Option<&[GridPos]> {
        self.spatial_hint.as_deref()
    }

    /// `Err(EmptyGraph)` when the graph has no vertices.
    pub fn ensure_non_empty(&self) -> Result<(), GraphFormatError> {
        if self.is_empty() {
            Err(GraphFormatError::EmptyGraph)
        } else {
            Ok(())
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
#[path = "../../tests/rust/test_graph_types.rs"]
mod tests;
