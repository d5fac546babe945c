//! Configuration for fuzzy search.

use serde::{Deserialize, Serialize};

/// Configuration for [`Trie::search_with_config`](crate::trie::Trie::search_with_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Maximum edit distance to accept.
    pub max_distance: usize,
    /// Maximum number of results to return, closest first.
    pub limit: Option<usize>,
}

impl SearchConfig {
    /// Create a configuration with the given distance bound and no limit.
    pub fn new(max_distance: usize) -> Self {
        SearchConfig {
            max_distance,
            limit: None,
        }
    }

    /// Keep at most `limit` results.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            max_distance: 2,
            limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.max_distance, 2);
        assert_eq!(config.limit, None);
    }

    #[test]
    fn test_partial_json() {
        let config: SearchConfig = serde_json::from_str(r#"{"limit": 3}"#).unwrap();
        assert_eq!(config, SearchConfig::new(2).with_limit(3));
    }
}
