//! Graph data model: the immutable value produced by a successful load.

pub mod export;
pub mod types;

pub use types::{GridPos, Group, Graph, VertexId};
