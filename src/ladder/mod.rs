//! Word-ladder graph: vertices are words, edges connect words one
//! substitution apart.
//!
//! [`WordLadderGraph`] owns a [`Graph`] built from a word list and wraps
//! the BFS queries with word-domain conveniences (case folding, endpoint
//! guards, rung counting). Words of different lengths are never adjacent:
//! a ladder rung is exactly one substitution, never an insertion or
//! deletion.

pub mod enumerate;

use std::collections::BTreeSet;

use tracing::debug;

use crate::graph::Graph;
use crate::types::{AdjacencyList, VertexPath};

// ---------------------------------------------------------------------------
// Hamming distance
// ---------------------------------------------------------------------------

/// Count of differing character positions, compared up to the shorter
/// word's length.
///
/// This is a raw distance, not an adjacency test: trailing characters of
/// the longer word are ignored, so `hamming_distance("pale", "pales")`
/// is 0. Adjacency additionally requires equal length — see
/// [`words_adjacent`].
pub fn hamming_distance(a: &str, b: &str) -> usize {
    a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
}

/// Whether two words are one ladder rung apart: same character count and
/// Hamming distance exactly 1.
pub(crate) fn words_adjacent(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count() && hamming_distance(a, b) == 1
}

// ---------------------------------------------------------------------------
// WordLadderGraph
// ---------------------------------------------------------------------------

/// A graph derived from a word list, queried in word-ladder terms.
#[derive(Debug, Clone)]
pub struct WordLadderGraph {
    graph: Graph,
}

impl WordLadderGraph {
    /// Build the graph from a word list.
    ///
    /// Words are lowercased and deduplicated; adjacency is the pairwise
    /// one-substitution relation. O(n²·L) over n words of length L.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();

        let mut adjacency = AdjacencyList::new();
        for word in &words {
            let neighbors = words
                .iter()
                .filter(|other| *other != word && words_adjacent(word, other))
                .cloned()
                .collect();
            adjacency.insert(word.clone(), neighbors);
        }

        let graph = Graph::new(adjacency);
        debug!(
            words = graph.vertices().len(),
            edges = graph.edges().len(),
            "built word ladder graph"
        );
        Self { graph }
    }

    /// The underlying graph, for raw BFS queries.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// All words in the graph, lowercased and sorted.
    pub fn words(&self) -> &BTreeSet<String> {
        self.graph.vertices()
    }

    /// Whether `word` is in the graph (case-insensitive).
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.graph.is_vertex(&word.to_lowercase())
    }

    /// The words one substitution away from `word` (case-insensitive).
    pub fn neighbors(&self, word: &str) -> BTreeSet<String> {
        self.graph.neighbors(&word.to_lowercase())
    }

    /// Whether `ladder` is a walkable word ladder: at least two words,
    /// every consecutive pair one substitution apart.
    ///
    /// This re-derives adjacency from the words themselves rather than
    /// consulting the graph, so it also accepts ladders over words that
    /// were never in the word list.
    pub fn is_valid_ladder<S: AsRef<str>>(&self, ladder: &[S]) -> bool {
        if ladder.len() < 2 {
            return false;
        }
        ladder.windows(2).all(|pair| {
            words_adjacent(
                &pair[0].as_ref().to_lowercase(),
                &pair[1].as_ref().to_lowercase(),
            )
        })
    }

    /// Number of rungs in a valid ladder (word count minus two, excluding
    /// the endpoints), or -1 for an invalid ladder.
    pub fn rung_length<S: AsRef<str>>(&self, ladder: &[S]) -> i64 {
        if !self.is_valid_ladder(ladder) {
            return -1;
        }
        ladder.len() as i64 - 2
    }

    /// A shortest ladder from `start` to `target`, or empty when either
    /// endpoint is unknown or no ladder exists.
    pub fn shortest_ladder(&self, start: &str, target: &str) -> VertexPath {
        let (start, target) = (start.to_lowercase(), target.to_lowercase());
        if !self.graph.is_vertex(&start) || !self.graph.is_vertex(&target) {
            return Vec::new();
        }
        self.graph.shortest_path(&start, &target)
    }

    /// Every shortest ladder from `start` to `target`; empty when either
    /// endpoint is unknown or no ladder exists.
    pub fn all_shortest_ladders(&self, start: &str, target: &str) -> BTreeSet<VertexPath> {
        let (start, target) = (start.to_lowercase(), target.to_lowercase());
        if !self.graph.is_vertex(&start) || !self.graph.is_vertex(&target) {
            return BTreeSet::new();
        }
        self.graph.all_shortest_paths(&start, &target)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    /// The 15-word dictionary used throughout the crate's tests.
    fn small_dictionary() -> WordLadderGraph {
        WordLadderGraph::new([
            "foul", "fool", "cool", "pool", "poll", "pole", "pope", "pale", "sale", "sage",
            "page", "pall", "fall", "fail", "foil",
        ])
    }

    // -- hamming_distance ---------------------------------------------------

    #[test_case("fool", "fool", 0)]
    #[test_case("fool", "foul", 1)]
    #[test_case("pool", "pall", 2)]
    #[test_case("cold", "ward", 3)]
    #[test_case("abcd", "wxyz", 4)]
    fn hamming_counts_differing_positions(a: &str, b: &str, expected: usize) {
        assert_eq!(hamming_distance(a, b), expected);
        assert_eq!(hamming_distance(b, a), expected);
    }

    #[test]
    fn hamming_truncates_to_shorter_word() {
        // The raw distance ignores the trailing "s" entirely.
        assert_eq!(hamming_distance("pale", "pales"), 0);
        assert_eq!(hamming_distance("pale", "tales"), 1);
    }

    #[test]
    fn unequal_length_words_are_never_adjacent() {
        assert!(!words_adjacent("pale", "pales"));
        assert!(!words_adjacent("pales", "pale"));
        assert!(words_adjacent("pale", "tale"));
    }

    // -- construction -------------------------------------------------------

    #[test]
    fn derived_neighbors_match_hamming_adjacency() {
        let ladder = small_dictionary();
        // foil is one substitution from fail, fool, and foul.
        let expected: BTreeSet<String> = ["fail", "fool", "foul"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(ladder.neighbors("foil"), expected);
    }

    #[test]
    fn construction_lowercases_and_deduplicates() {
        let ladder = WordLadderGraph::new(["Cat", "CAT", "cot", "cat"]);
        assert_eq!(ladder.words().len(), 2);
        assert!(ladder.is_valid_word("CAT"));
        assert!(ladder.neighbors("CAT").contains("cot"));
    }

    #[test]
    fn derived_adjacency_is_symmetric() {
        let ladder = small_dictionary();
        for (word, neighbors) in ladder.graph().adjacency() {
            for neighbor in neighbors {
                assert!(
                    ladder.neighbors(neighbor).contains(word),
                    "{word} -> {neighbor} has no reverse entry"
                );
            }
        }
    }

    #[test]
    fn no_word_is_its_own_neighbor() {
        let ladder = small_dictionary();
        for (word, neighbors) in ladder.graph().adjacency() {
            assert!(!neighbors.contains(word));
        }
    }

    #[test]
    fn mixed_length_word_list_splits_by_length() {
        let ladder = WordLadderGraph::new(["cat", "cats", "bat", "bats"]);
        assert!(ladder.neighbors("cat").contains("bat"));
        assert!(!ladder.neighbors("cat").contains("cats"));
        assert!(ladder.neighbors("cats").contains("bats"));
    }

    // -- is_valid_word ------------------------------------------------------

    #[test]
    fn valid_word_is_case_insensitive() {
        let ladder = small_dictionary();
        assert!(ladder.is_valid_word("foil"));
        assert!(ladder.is_valid_word("FOIL"));
        assert!(!ladder.is_valid_word("ffff"));
    }

    // -- is_valid_ladder / rung_length --------------------------------------

    #[test]
    fn seven_word_ladder_is_valid_with_five_rungs() {
        let ladder = small_dictionary();
        let good = ["fool", "pool", "poll", "pall", "pale", "page", "sage"];
        assert!(ladder.is_valid_ladder(&good));
        assert_eq!(ladder.rung_length(&good), 5);
    }

    #[test]
    fn ladder_with_a_two_letter_jump_is_invalid() {
        let ladder = small_dictionary();
        // pool -> pall differs in two positions.
        let bad = ["fool", "pool", "pall", "pale", "page", "sage"];
        assert!(!ladder.is_valid_ladder(&bad));
        assert_eq!(ladder.rung_length(&bad), -1);
    }

    #[test_case(&[]; "empty")]
    #[test_case(&["fool"]; "single word")]
    fn short_ladders_are_invalid(ladder: &[&str]) {
        let graph = small_dictionary();
        assert!(!graph.is_valid_ladder(ladder));
        assert_eq!(graph.rung_length(ladder), -1);
    }

    #[test]
    fn two_word_ladder_has_zero_rungs() {
        let ladder = small_dictionary();
        assert_eq!(ladder.rung_length(&["fool", "foul"]), 0);
    }

    #[test]
    fn ladder_validity_ignores_case() {
        let ladder = small_dictionary();
        assert!(ladder.is_valid_ladder(&["FOOL", "Foul"]));
    }

    #[test]
    fn ladder_over_unknown_words_is_still_checked_pairwise() {
        // is_valid_ladder re-derives adjacency; graph membership is not
        // required.
        let ladder = small_dictionary();
        assert!(ladder.is_valid_ladder(&["cold", "cord", "word"]));
    }

    #[test]
    fn ladder_with_length_change_is_invalid() {
        let ladder = small_dictionary();
        assert!(!ladder.is_valid_ladder(&["pale", "pales"]));
        assert_eq!(ladder.rung_length(&["pale", "pales"]), -1);
    }

    // -- shortest_ladder / all_shortest_ladders -----------------------------

    #[test]
    fn shortest_ladder_agrees_with_graph_length() {
        let ladder = small_dictionary();
        let path = ladder.shortest_ladder("foul", "sage");
        assert!(!path.is_empty());
        assert_eq!(
            path.len() - 1,
            ladder.graph().shortest_path_len("foul", "sage")
        );
    }

    #[test]
    fn shortest_ladder_guards_unknown_endpoints() {
        let ladder = small_dictionary();
        assert!(ladder.shortest_ladder("foul", "zzzz").is_empty());
        assert!(ladder.shortest_ladder("zzzz", "sage").is_empty());
        assert!(ladder.all_shortest_ladders("foul", "zzzz").is_empty());
    }

    #[test]
    fn shortest_ladder_folds_case() {
        let ladder = small_dictionary();
        assert_eq!(
            ladder.shortest_ladder("FOUL", "Sage"),
            ladder.shortest_ladder("foul", "sage")
        );
    }

    #[test]
    fn all_shortest_ladders_share_the_minimal_length() {
        let ladder = small_dictionary();
        let all = ladder.all_shortest_ladders("foul", "sage");
        let min = ladder.graph().shortest_path_len("foul", "sage");
        assert!(!all.is_empty());
        for path in &all {
            assert_eq!(path.len() - 1, min);
            assert!(ladder.is_valid_ladder(path));
        }
    }
}
