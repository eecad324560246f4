//! WordGraph — adjacency-list graph queries and word-ladder search.
//!
//! Provides an immutable unweighted, undirected graph with BFS-based
//! reachability queries, plus a specialization that derives the graph
//! from a word list (vertices are words, edges connect words one
//! substitution apart).

pub mod cli;
pub mod error;
pub mod graph;
pub mod ladder;
pub mod observability;
pub mod types;
