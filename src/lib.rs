//! # levtrie
//!
//! An in-memory prefix tree for spell-checking, autocomplete and fuzzy search
//! boxes.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Prefix completion over `char` code points
//! - Bounded Levenshtein search that prunes unreachable subtrees
//! - Line-oriented word list loading
//!
//! ```
//! use levtrie::prelude::*;
//!
//! let trie: Trie = ["accidia", "accidie", "accident"].into_iter().collect();
//! assert_eq!(trie.suffix("accid").len(), 3);
//! assert_eq!(trie.search("accidia", 1).unwrap().len(), 2);
//! ```

pub mod cli;
pub mod dictionary;
pub mod distance;
pub mod error;
pub mod search;
pub mod trie;

pub mod prelude {
    pub use crate::error::{LevTrieError, Result};
    pub use crate::search::{QueryResult, SearchConfig};
    pub use crate::trie::{Trie, TrieNode};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
