//! Exhaustive ladder enumeration, depth-first with an explicit stack.
//!
//! Unlike the BFS queries this walks every simple path, so it is
//! exponential in the branching factor and only intended for small
//! graphs and tight bounds. The bound is a required parameter; the
//! unbounded variant exists as a deliberate opt-in and is internally
//! capped at the vertex count, the longest possible simple path.

use std::collections::BTreeSet;

use tracing::debug;

use crate::ladder::WordLadderGraph;
use crate::types::VertexPath;

impl WordLadderGraph {
    /// Every simple ladder from `start` to `target` with at most
    /// `max_rungs + 1` words.
    ///
    /// Empty when either endpoint is unknown. When `start == target` the
    /// one-word ladder `[start]` is included: the walk reaches the target
    /// before taking a step.
    pub fn all_ladders(&self, start: &str, target: &str, max_rungs: usize) -> BTreeSet<VertexPath> {
        self.enumerate_ladders(start, target, max_rungs.saturating_add(1))
    }

    /// [`WordLadderGraph::all_ladders`] without a rung bound.
    ///
    /// Opt-in escape hatch for small dictionaries: runtime and result
    /// count grow exponentially with the graph's branching factor. A
    /// simple path can never have more vertices than the graph, so the
    /// walk still terminates.
    pub fn all_ladders_unbounded(&self, start: &str, target: &str) -> BTreeSet<VertexPath> {
        self.enumerate_ladders(start, target, self.graph().vertices().len())
    }

    fn enumerate_ladders(
        &self,
        start: &str,
        target: &str,
        max_vertices: usize,
    ) -> BTreeSet<VertexPath> {
        let (start, target) = (start.to_lowercase(), target.to_lowercase());
        let mut ladders = BTreeSet::new();
        if !self.graph().is_vertex(&start) || !self.graph().is_vertex(&target) {
            return ladders;
        }

        let mut stack: Vec<VertexPath> = vec![vec![start]];
        while let Some(path) = stack.pop() {
            let last = &path[path.len() - 1];
            if *last == target {
                ladders.insert(path);
                continue;
            }
            if path.len() >= max_vertices {
                continue;
            }
            for neighbor in self.graph().adjacent(last) {
                if path.contains(neighbor) {
                    continue;
                }
                let mut extended = path.clone();
                extended.push(neighbor.clone());
                stack.push(extended);
            }
        }

        debug!(
            %target,
            max_vertices,
            found = ladders.len(),
            "enumerated ladders"
        );
        ladders
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
