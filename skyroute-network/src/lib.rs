//! Airport connectivity graph derived from active flights, and the
//! algorithms that run over it.

pub mod graph;
pub mod path;
pub mod spanning;
pub mod traversal;
mod union_find;

pub use graph::{Link, NetworkGraph};
pub use path::{dijkstra, Route};
pub use spanning::{kruskal, prim, SpanningEdge, SpanningForest};
pub use traversal::{bfs, dfs};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NetworkError {
    #[error("Airport not found: {0}")]
    NotFound(String),
    #[error("No path found between {from} and {to}")]
    Unreachable { from: String, to: String },
}

pub type NetworkResult<T> = Result<T, NetworkError>;
