//! Fuzzy search result type.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A dictionary entry matched by a fuzzy search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryResult {
    /// The matched dictionary string.
    pub value: String,
    /// Edit distance from the query.
    pub distance: usize,
}

impl QueryResult {
    /// Create a new result.
    pub fn new<S: Into<String>>(value: S, distance: usize) -> Self {
        QueryResult {
            value: value.into(),
            distance,
        }
    }
}

impl Ord for QueryResult {
    fn cmp(&self, other: &Self) -> Ordering {
        // Closest first, ties broken by the matched string
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for QueryResult {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Val: {}, Dist: {}", self.value, self.distance)
    }
}
