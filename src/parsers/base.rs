//! Parser trait definition and the shared line cursor.
//!
//! Both document variants are line oriented: a section starts at a marker
//! line and runs while its lines keep a given shape. `LineCursor` walks the
//! lines once and never backs up.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{GraphFormatError, Section};
use crate::graph::types::GROUP_COUNT;
use crate::graph::{Graph, Group, VertexId};

// ─── Parser trait ────────────────────────────────────────────────────────────

/// Trait for graph document parsers.
///
/// Each document variant implements this trait. A parser either returns a
/// complete `Graph` or an error; it never exposes a partial graph.
pub trait Parser {
    fn parse(&self, src: &str) -> Result<Graph, GraphFormatError>;
}

// ─── Section markers ─────────────────────────────────────────────────────────

/// Opens the bracketed matrix rows.
pub const MATRIX_MARKER: &str = "Macierz";
/// Opens the `a - b` edge lines.
pub const EDGES_MARKER: &str = "Lista polaczen";
/// Prefix shared by the three group lines.
pub const GROUPS_MARKER: &str = "Grupa";

static EDGE_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s*-\s*(\d+)\s*$").expect("edge line pattern is valid")
});

// ─── LineCursor ──────────────────────────────────────────────────────────────

/// Forward-only cursor over the lines of a document.
pub struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pub pos: usize,
}

impl<'a> LineCursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            lines: src.lines().collect(),
            pos: 0,
        }
    }

    pub fn eof(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// The line under the cursor, untrimmed.
    pub fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Advance to the first line, starting at the cursor, whose trimmed text
    /// starts with `marker`. Leaves the cursor on that line.
    ///
    /// Returns false (cursor at end of input) when no such line exists.
    pub fn find_marker(&mut self, marker: &str) -> bool {
        while let Some(line) = self.peek() {
            if line.trim().starts_with(marker) {
                return true;
            }
            self.pos += 1;
        }
        false
    }

    /// Like `find_marker`, but also consumes the marker line.
    pub fn seek_marker(&mut self, marker: &str) -> bool {
        let found = self.find_marker(marker);
        if found {
            self.pos += 1;
        }
        found
    }

    /// Same as `seek_marker`, failing with `MissingSection` when absent.
    pub fn expect_section(&mut self, marker: &str, section: Section) -> Result<(), GraphFormatError> {
        if self.seek_marker(marker) {
            tracing::debug!(%section, line = self.pos, "section found");
            Ok(())
        } else {
            Err(GraphFormatError::MissingSection(section))
        }
    }

    /// Read matrix rows while the trimmed line starts with `[`.
    ///
    /// Stops on (without consuming) the first other line. Rows may differ in
    /// length; callers decide whether that matters.
    pub fn read_matrix(&mut self) -> Result<Vec<Vec<bool>>, GraphFormatError> {
        let mut rows = Vec::new();
        while let Some(line) = self.peek() {
            let trimmed = line.trim();
            if !trimmed.starts_with('[') {
                break;
            }
            rows.push(parse_matrix_row(trimmed)?);
            self.pos += 1;
        }
        Ok(rows)
    }

    /// Read `a - b` lines while the line contains `-`.
    ///
    /// Stops on (without consuming) the first line without a dash.
    pub fn read_edges(&mut self) -> Result<Vec<(VertexId, VertexId)>, GraphFormatError> {
        let mut edges = Vec::new();
        while let Some(line) = self.peek() {
            if !line.contains('-') {
                break;
            }
            edges.push(parse_edge_line(line)?);
            self.pos += 1;
        }
        Ok(edges)
    }

    /// Read exactly three group lines, `Grupa 0:` to `Grupa 2:`, starting at
    /// the cursor.
    ///
    /// Every listed id must be below `vertex_count`. Returns the assignments in
    /// document order.
    pub fn read_groups(
        &mut self,
        vertex_count: usize,
    ) -> Result<Vec<(VertexId, Group)>, GraphFormatError> {
        let mut assignments = Vec::new();
        for g in 0..GROUP_COUNT {
            let line = self
                .peek()
                .ok_or(GraphFormatError::MalformedGroupHeader(g))?;
            for id in parse_group_line(line, g)? {
                if id >= vertex_count {
                    return Err(GraphFormatError::OutOfRange(id));
                }
                assignments.push((id, g as Group));
            }
            self.pos += 1;
        }
        Ok(assignments)
    }
}

// ─── Line parsers ────────────────────────────────────────────────────────────

/// Parse one bracketed matrix row such as `[1 0 1]`.
///
/// Each whitespace-separated token is stripped of non-digits and must then be
/// exactly `0` or `1`.
pub fn parse_matrix_row(line: &str) -> Result<Vec<bool>, GraphFormatError> {
    let trimmed = line.trim();
    let inner = trimmed.strip_prefix('[').unwrap_or(trimmed);
    let inner = inner.strip_suffix(']').unwrap_or(inner);
    inner
        .split_whitespace()
        .map(|raw| match digits_of(raw).as_str() {
            "0" => Ok(false),
            "1" => Ok(true),
            _ => Err(GraphFormatError::InvalidToken(raw.to_string())),
        })
        .collect()
}

/// Parse an `a - b` edge line.
pub fn parse_edge_line(line: &str) -> Result<(VertexId, VertexId), GraphFormatError> {
    let malformed = || GraphFormatError::MalformedEdge(line.trim().to_string());
    let caps = EDGE_LINE.captures(line).ok_or_else(malformed)?;
    let a = caps[1].parse().map_err(|_| malformed())?;
    let b = caps[2].parse().map_err(|_| malformed())?;
    Ok((a, b))
}

/// Parse a `Grupa <g>: id id ...` line and return the listed ids.
///
/// Ids may be separated by whitespace or commas; stray non-digit characters
/// are dropped and empty tokens skipped.
pub fn parse_group_line(line: &str, group: usize) -> Result<Vec<VertexId>, GraphFormatError> {
    let header = format!("{GROUPS_MARKER} {group}:");
    let rest = line
        .trim()
        .strip_prefix(header.as_str())
        .ok_or(GraphFormatError::MalformedGroupHeader(group))?;
    rest.split(|c: char| c.is_whitespace() || c == ',')
        .filter_map(|raw| {
            let digits = digits_of(raw);
            (!digits.is_empty()).then(|| {
                digits
                    .parse()
                    .map_err(|_| GraphFormatError::InvalidToken(raw.to_string()))
            })
        })
        .collect()
}

fn digits_of(token: &str) -> String {
    token.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
#[path = "../../tests/rust/test_parsers_base.rs"]
mod tests;
