//! Bounded Levenshtein search over a [`Trie`].
//!
//! The walk carries one row of the edit-distance matrix per trie depth: the
//! row for a node is computed from its parent's row and the code point on the
//! connecting edge, so the cost of a shared prefix is paid once for every
//! dictionary entry below it. A subtree is skipped as soon as every cell of
//! its row exceeds the bound, because descending can only add edits.
//!
//! ```
//! use levtrie::trie::Trie;
//! use levtrie::search::QueryResult;
//!
//! let trie: Trie = ["accidia", "accidie", "accident"].into_iter().collect();
//! let results = trie.search("accidia", 1).unwrap();
//! assert_eq!(
//!     results,
//!     vec![QueryResult::new("accidia", 0), QueryResult::new("accidie", 1)]
//! );
//! ```

pub mod config;
pub mod result;

use std::rc::Rc;

use log::trace;

use crate::error::{LevTrieError, Result};
use crate::trie::{Trie, TrieNode};

pub use config::SearchConfig;
pub use result::QueryResult;

impl Trie {
    /// Every entry within `max_distance` edits of `query`, closest first and
    /// ties ordered by value.
    ///
    /// Fails with [`LevTrieError::InvalidArgument`] when `max_distance` is
    /// negative.
    pub fn search(&self, query: &str, max_distance: i64) -> Result<Vec<QueryResult>> {
        Ok(self.search_within(query, distance_bound(max_distance)?))
    }

    /// Search using a [`SearchConfig`], truncating to its limit.
    pub fn search_with_config(&self, query: &str, config: &SearchConfig) -> Vec<QueryResult> {
        let mut results = self.search_within(query, config.max_distance);
        if let Some(limit) = config.limit {
            results.truncate(limit);
        }
        results
    }

    /// Every entry within `max_distance` edits of `query`, closest first and
    /// ties ordered by value.
    pub fn search_within(&self, query: &str, max_distance: usize) -> Vec<QueryResult> {
        let query: Vec<char> = query.chars().collect();
        let first_row: Vec<usize> = (0..=query.len()).collect();

        let mut walk = LevenshteinWalk::new(&query, max_distance);

        // Only reachable when the empty string was inserted.
        if let Some(value) = self.root().value() {
            walk.accept(value, query.len());
        }
        walk.run(self.root(), first_row);

        trace!(
            "levenshtein search: query_len={} max_distance={} visited={} pruned={} matches={}",
            query.len(),
            max_distance,
            walk.visited,
            walk.pruned,
            walk.results.len()
        );

        let mut results = walk.results;
        results.sort();
        results
    }
}

/// Validate a signed edit distance bound.
///
/// Fails with [`LevTrieError::InvalidArgument`] when `max_distance` is
/// negative.
pub fn distance_bound(max_distance: i64) -> Result<usize> {
    usize::try_from(max_distance).map_err(|_| {
        LevTrieError::invalid_argument(format!(
            "max distance must be non-negative, got {max_distance}"
        ))
    })
}

/// State of one search: the decoded query plus what has been found so far.
struct LevenshteinWalk<'a> {
    query: &'a [char],
    max_distance: usize,
    results: Vec<QueryResult>,
    visited: usize,
    pruned: usize,
}

impl<'a> LevenshteinWalk<'a> {
    fn new(query: &'a [char], max_distance: usize) -> Self {
        LevenshteinWalk {
            query,
            max_distance,
            results: Vec::new(),
            visited: 0,
            pruned: 0,
        }
    }

    fn accept(&mut self, value: &str, distance: usize) {
        if distance <= self.max_distance {
            self.results.push(QueryResult::new(value, distance));
        }
    }

    /// Walk every child subtree of `root`, starting from the row of the
    /// empty path.
    ///
    /// Pending nodes sit on an explicit stack together with their parent's
    /// row, so depth is bounded by memory rather than by the call stack.
    /// Siblings share one parent row.
    fn run(&mut self, root: &TrieNode, first_row: Vec<usize>) {
        let first_row = Rc::new(first_row);
        let mut stack: Vec<(&TrieNode, char, Rc<Vec<usize>>)> = root
            .children()
            .map(|(symbol, child)| (child, symbol, Rc::clone(&first_row)))
            .collect();

        while let Some((node, symbol, prev_row)) = stack.pop() {
            self.visited += 1;

            let row = self.next_row(symbol, &prev_row);
            let distance = row[row.len() - 1];

            if let Some(value) = node.value() {
                self.accept(value, distance);
            }

            let best = row.iter().copied().min().unwrap_or(distance);
            if best > self.max_distance {
                if node.num_children() > 0 {
                    self.pruned += 1;
                }
                continue;
            }

            let row = Rc::new(row);
            stack.extend(
                node.children()
                    .map(|(next_symbol, child)| (child, next_symbol, Rc::clone(&row))),
            );
        }
    }

    /// Edit-distance row for the path extended by `symbol`.
    fn next_row(&self, symbol: char, prev_row: &[usize]) -> Vec<usize> {
        let mut row = Vec::with_capacity(prev_row.len());
        row.push(prev_row[0] + 1);

        for col in 1..prev_row.len() {
            let insert_cost = row[col - 1] + 1;
            let delete_cost = prev_row[col] + 1;
            let replace_cost = prev_row[col - 1] + usize::from(self.query[col - 1] != symbol);
            row.push(insert_cost.min(delete_cost).min(replace_cost));
        }

        row
    }
}
