//! Graph layer — immutable adjacency-list model and BFS queries.

pub mod model;
pub mod traversal;

pub use model::Graph;
