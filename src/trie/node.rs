//! Trie node representation.

use std::collections::BTreeMap;
use std::fmt;
use std::mem;

/// One code point position along some inserted string(s).
///
/// Children are kept in a [`BTreeMap`] so every traversal visits them in
/// ascending code point order. Nothing here recurses per level: a single
/// entry may be arbitrarily long, so traversal, comparison and drop all run
/// on an explicit stack.
#[derive(Default)]
pub struct TrieNode {
    /// The code point on the edge leading here. `None` for the root.
    symbol: Option<char>,
    /// Exclusively owned children keyed by code point.
    children: BTreeMap<char, TrieNode>,
    /// The inserted string ending here, if any.
    value: Option<String>,
}

impl TrieNode {
    /// Create the root node of an empty trie.
    pub(crate) fn root() -> Self {
        TrieNode::default()
    }

    fn with_symbol(symbol: char) -> Self {
        TrieNode {
            symbol: Some(symbol),
            children: BTreeMap::new(),
            value: None,
        }
    }

    /// The code point this node represents, or `None` for the root.
    pub fn symbol(&self) -> Option<char> {
        self.symbol
    }

    /// Whether some inserted string ends exactly at this node.
    pub fn is_terminal(&self) -> bool {
        self.value.is_some()
    }

    /// The inserted string that terminates here.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Iterate over `(code point, child)` pairs in ascending code point order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> {
        self.children.iter().map(|(&symbol, child)| (symbol, child))
    }

    /// Look up the child reached by `symbol`.
    pub fn child(&self, symbol: char) -> Option<&TrieNode> {
        self.children.get(&symbol)
    }

    /// Number of direct children.
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns the child for `symbol`, creating it if absent. The flag is true
    /// when a new node was allocated.
    pub(crate) fn child_or_insert(&mut self, symbol: char) -> (&mut TrieNode, bool) {
        let mut created = false;
        let child = self.children.entry(symbol).or_insert_with(|| {
            created = true;
            TrieNode::with_symbol(symbol)
        });
        (child, created)
    }

    /// Mark this node terminal for `text`. Returns true if the node was not
    /// terminal before.
    ///
    /// The path to a node spells its value, so an existing value always equals
    /// `text` and is left untouched.
    pub(crate) fn mark_terminal(&mut self, text: &str) -> bool {
        if self.value.is_some() {
            return false;
        }
        self.value = Some(text.to_string());
        true
    }

    /// Push the value of every terminal node in this subtree onto `out`, in
    /// pre-order.
    pub(crate) fn collect_values(&self, out: &mut Vec<String>) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if let Some(value) = &node.value {
                out.push(value.clone());
            }
            // Reversed so the smallest code point is popped first.
            stack.extend(node.children.values().rev());
        }
    }
}

impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode> = mem::take(&mut self.children).into_values().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(mem::take(&mut node.children).into_values());
        }
    }
}

impl PartialEq for TrieNode {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((left, right)) = stack.pop() {
            if left.symbol != right.symbol
                || left.value != right.value
                || left.children.len() != right.children.len()
            {
                return false;
            }
            for ((left_symbol, left_child), (right_symbol, right_child)) in
                left.children.iter().zip(&right.children)
            {
                if left_symbol != right_symbol {
                    return false;
                }
                stack.push((left_child, right_child));
            }
        }
        true
    }
}

impl Eq for TrieNode {}

impl fmt::Debug for TrieNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrieNode")
            .field("symbol", &self.symbol)
            .field("value", &self.value)
            .field("children", &self.children.len())
            .finish()
    }
}
