//! Prefix tree over a dictionary of strings.
//!
//! Strings are decoded into `char`s and stored one node per code point. A
//! [`Trie`] only grows: nodes are created lazily on insert and are never
//! removed.
//!
//! ```
//! use levtrie::trie::Trie;
//!
//! let trie: Trie = ["zygote", "zygotes", "zygoma"].into_iter().collect();
//! assert_eq!(trie.suffix("zygot"), vec!["zygote", "zygotes"]);
//! ```

pub mod node;

use log::debug;

pub use node::TrieNode;

/// A prefix tree owning every inserted string through its root.
#[derive(Debug, PartialEq, Eq)]
pub struct Trie {
    root: TrieNode,
    /// Distinct inserted strings.
    len: usize,
    /// Nodes including the root.
    node_count: usize,
}

impl Trie {
    /// Create an empty trie holding only the root.
    pub fn new() -> Self {
        Trie {
            root: TrieNode::root(),
            len: 0,
            node_count: 1,
        }
    }

    /// Insert `text`, creating one node per novel code point along its path.
    ///
    /// Re-inserting a string is a no-op. The empty string marks the root
    /// terminal with an empty value.
    pub fn insert(&mut self, text: &str) {
        if text.is_empty() {
            debug!("inserting the empty string at the root");
        }

        let mut node = &mut self.root;
        for symbol in text.chars() {
            let (child, created) = node.child_or_insert(symbol);
            if created {
                self.node_count += 1;
            }
            node = child;
        }

        if node.mark_terminal(text) {
            self.len += 1;
        }
    }

    /// Exact membership test.
    pub fn contains(&self, text: &str) -> bool {
        self.find(text).is_some_and(TrieNode::is_terminal)
    }

    /// Every inserted string that has `prefix` as a literal prefix, including
    /// `prefix` itself when it was inserted.
    ///
    /// Results come out in ascending code point order. An absent prefix yields
    /// an empty vector.
    pub fn suffix(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.find(prefix) {
            node.collect_values(&mut out);
        }
        out
    }

    /// Every inserted string, in ascending code point order.
    pub fn words(&self) -> Vec<String> {
        self.suffix("")
    }

    /// The root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct inserted strings.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes, counting the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Walk from the root along the code points of `path`.
    fn find(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(&self.root, |node, symbol| node.child(symbol))
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for text in iter {
            self.insert(text.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut trie = Trie::new();
        trie.extend(iter);
        trie
    }
}
