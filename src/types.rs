//! Core domain types for WordGraph.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

/// Adjacency-list description of a graph: vertex → set of neighbors.
///
/// Ordered containers are deliberate: neighbor iteration order determines
/// BFS tie-breaks, and `BTreeMap`/`BTreeSet` make them reproducible.
pub type AdjacencyList = BTreeMap<String, BTreeSet<String>>;

/// A walk through the graph, start to end inclusive.
pub type VertexPath = Vec<String>;

// ---------------------------------------------------------------------------
// Edge
// ---------------------------------------------------------------------------

/// An unordered pair of adjacent vertices.
///
/// Endpoints are stored in lexicographic order so that `(u, v)` and
/// `(v, u)` compare equal and deduplicate in a set.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Edge {
    a: String,
    b: String,
}

impl Edge {
    /// Build the canonical edge between two vertices.
    pub fn new(u: &str, v: &str) -> Self {
        if u <= v {
            Self {
                a: u.to_string(),
                b: v.to_string(),
            }
        } else {
            Self {
                a: v.to_string(),
                b: u.to_string(),
            }
        }
    }

    /// Both endpoints, in canonical order.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }

    /// Whether `vertex` is one of the endpoints.
    pub fn touches(&self, vertex: &str) -> bool {
        self.a == vertex || self.b == vertex
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -- {}", self.a, self.b)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
