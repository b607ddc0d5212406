//! Error types for graph loading.
//!
//! Every parse failure is a `GraphFormatError`; reading a file from disk can
//! additionally fail with an I/O error, which `LoadError` wraps.

use std::fmt;
use std::io;

use thiserror::Error;

/// A named section of a graph document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Matrix,
    Edges,
    Groups,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Matrix => "matrix",
            Section::Edges => "edges",
            Section::Groups => "groups",
        };
        f.write_str(name)
    }
}

/// Reason a graph document was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphFormatError {
    #[error("missing {0} section")]
    MissingSection(Section),

    #[error("invalid token '{0}'")]
    InvalidToken(String),

    /// Index of the first matrix row whose length differs from the row count.
    #[error("matrix row {0} does not have one entry per row")]
    NonSquareMatrix(usize),

    #[error("vertex id out of range: {0}")]
    OutOfRange(usize),

    /// Carries the group index whose `Grupa <g>:` header was expected.
    #[error("expected 'Grupa {0}:' but not found")]
    MalformedGroupHeader(usize),

    #[error("malformed edge line '{0}'")]
    MalformedEdge(String),

    /// Not returned by the parser; shells surface it as a warning.
    #[error("graph has no vertices")]
    EmptyGraph,
}

/// Failure to load a graph from a file.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read input: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Format(#[from] GraphFormatError),
}
