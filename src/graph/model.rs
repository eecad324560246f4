//! Graph construction and accessors.
//!
//! A [`Graph`] is built once from an adjacency list and is read-only
//! afterwards; there is no mutation API. The input is not required to be
//! symmetric: if `a` lists `b` as a neighbor but `b`'s entry omits `a`,
//! then `b` is reachable from `a` but not the other way around. The edge
//! set is always canonical unordered pairs, so it symmetrizes implicitly.

use std::collections::BTreeSet;

use crate::error::{Result, WordGraphError};
use crate::types::{AdjacencyList, Edge};

/// Immutable unweighted, undirected adjacency-list graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: AdjacencyList,
    vertices: BTreeSet<String>,
    edges: BTreeSet<Edge>,
}

impl Graph {
    /// Build a graph from an adjacency list.
    ///
    /// The vertex set is the map's key set. A name that appears only inside
    /// someone else's neighbor set is not a vertex and has no neighbors of
    /// its own. The edge set is derived here, once, by scanning every
    /// (vertex, neighbor) pair.
    pub fn new(adjacency: AdjacencyList) -> Self {
        let vertices: BTreeSet<String> = adjacency.keys().cloned().collect();
        let mut edges = BTreeSet::new();
        for (vertex, neighbors) in &adjacency {
            for neighbor in neighbors {
                edges.insert(Edge::new(vertex, neighbor));
            }
        }
        Self {
            adjacency,
            vertices,
            edges,
        }
    }

    /// Parse a graph from a JSON object of vertex → neighbor array.
    ///
    /// Anything that is not a map of string to collection-of-strings is
    /// rejected as [`WordGraphError::InvalidInput`].
    pub fn from_json_str(input: &str) -> Result<Self> {
        let adjacency: AdjacencyList = serde_json::from_str(input).map_err(|e| {
            WordGraphError::InvalidInput(format!(
                "expected a JSON object of vertex to neighbor list: {e}"
            ))
        })?;
        Ok(Self::new(adjacency))
    }

    /// All vertices, sorted.
    pub fn vertices(&self) -> &BTreeSet<String> {
        &self.vertices
    }

    /// All edges as canonical unordered pairs, sorted.
    pub fn edges(&self) -> &BTreeSet<Edge> {
        &self.edges
    }

    /// The underlying adjacency list.
    pub fn adjacency(&self) -> &AdjacencyList {
        &self.adjacency
    }

    /// Whether `vertex` is present in the graph.
    pub fn is_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains(vertex)
    }

    /// The neighbor set of `vertex`, or empty if `vertex` is unknown.
    ///
    /// Also returns empty on a vertex-set/map mismatch rather than
    /// panicking.
    pub fn neighbors(&self, vertex: &str) -> BTreeSet<String> {
        if !self.vertices.contains(vertex) {
            return BTreeSet::new();
        }
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    /// Borrowing neighbor iterator for traversal internals. Yields nothing
    /// for names that are not adjacency keys, which is what lets BFS treat
    /// neighbor-only names as dead ends.
    pub(crate) fn adjacent<'g>(&'g self, vertex: &str) -> impl Iterator<Item = &'g String> {
        self.adjacency.get(vertex).into_iter().flatten()
    }

    /// Whether `path` can actually be walked on the graph.
    ///
    /// A path is valid iff it is non-empty, every element is a known
    /// vertex, and every consecutive pair is adjacent. A single known
    /// vertex is a valid zero-edge path.
    pub fn is_valid_path<S: AsRef<str>>(&self, path: &[S]) -> bool {
        if path.is_empty() {
            return false;
        }
        if !path.iter().all(|v| self.is_vertex(v.as_ref())) {
            return false;
        }
        path.windows(2).all(|pair| {
            self.adjacency
                .get(pair[0].as_ref())
                .is_some_and(|neighbors| neighbors.contains(pair[1].as_ref()))
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
