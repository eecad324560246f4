//! BFS query operations over [`Graph`].
//!
//! All three queries run breadth-first search over a queue of partial
//! paths. The revisit check is per-path, not a global visited set: a
//! vertex may reappear in sibling branches, which is required for
//! enumerating every shortest path and is harmless (only costlier) for
//! the single-path query.
//!
//! Determinism: adjacency lives in ordered containers, so neighbors are
//! expanded in lexicographic order and the single-path query returns the
//! lexicographically first among the equally short paths. Only the LENGTH
//! of the result is part of the contract; callers relying on a specific
//! tie-break should use [`Graph::all_shortest_paths`].

use std::collections::{BTreeSet, VecDeque};

use tracing::trace;

use crate::graph::Graph;
use crate::types::VertexPath;

impl Graph {
    // -------------------------------------------------------------------
    // shortest_path
    // -------------------------------------------------------------------

    /// Find a shortest path (by edge count) from `start` to `target`.
    ///
    /// Returns the empty path when `target` is unreachable, when `start`
    /// is not a vertex, and when `start == target`: the search only yields
    /// paths that append a neighbor, so a one-vertex self-path is never
    /// produced.
    pub fn shortest_path(&self, start: &str, target: &str) -> VertexPath {
        trace!(%start, %target, "bfs shortest path");
        let mut queue: VecDeque<VertexPath> = VecDeque::new();
        queue.push_back(vec![start.to_string()]);

        while let Some(path) = queue.pop_front() {
            let last = &path[path.len() - 1];
            for neighbor in self.adjacent(last) {
                if path.contains(neighbor) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                if neighbor == target {
                    // FIFO order guarantees this is minimal by edge count.
                    return extended;
                }
                queue.push_back(extended);
            }
        }

        Vec::new()
    }

    // -------------------------------------------------------------------
    // shortest_path_len
    // -------------------------------------------------------------------

    /// Edge count of [`Graph::shortest_path`], or 0 when no path exists.
    pub fn shortest_path_len(&self, start: &str, target: &str) -> usize {
        let path = self.shortest_path(start, target);
        if path.is_empty() {
            0
        } else {
            path.len() - 1
        }
    }

    // -------------------------------------------------------------------
    // all_shortest_paths
    // -------------------------------------------------------------------

    /// Find every shortest path from `start` to `target`.
    ///
    /// Unlike [`Graph::shortest_path`] this does not stop at the first
    /// hit: the whole frontier at the minimal depth is explored, a running
    /// minimum is kept (`<=` so ties accumulate), and the final filter
    /// drops any earlier path that a strictly shorter one obsoleted.
    pub fn all_shortest_paths(&self, start: &str, target: &str) -> BTreeSet<VertexPath> {
        trace!(%start, %target, "bfs all shortest paths");
        let mut results: BTreeSet<VertexPath> = BTreeSet::new();
        let mut min_len = usize::MAX;
        let mut queue: VecDeque<VertexPath> = VecDeque::new();
        queue.push_back(vec![start.to_string()]);

        while let Some(path) = queue.pop_front() {
            // A hit extending this path would have path.len() + 1 vertices;
            // once that can no longer tie the minimum, stop exploring it.
            if path.len() >= min_len {
                continue;
            }
            let last = &path[path.len() - 1];
            for neighbor in self.adjacent(last) {
                if path.contains(neighbor) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                if neighbor == target {
                    if extended.len() <= min_len {
                        min_len = extended.len();
                        results.insert(extended);
                    }
                } else {
                    queue.push_back(extended);
                }
            }
        }

        results.retain(|path| path.len() == min_len);
        results
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
