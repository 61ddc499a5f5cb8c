// crates/exercise-gate-catalog/src/structures/trie.rs
// ============================================================================
// Module: Counting Trie
// Description: Prefix tree with word and prefix multiplicities.
// Purpose: Back the `trie` topic with iterative and recursive walks.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Nodes live in an arena and link to children by index. Each node tracks
//! how many inserted words end at it and how many pass through it, so
//! `erase` only decrements counters; a prefix whose pass-through count drops
//! to zero no longer matches even though its nodes remain allocated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

// ============================================================================
// SECTION: Types
// ============================================================================

/// How the trie walks from the root to a node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Walk {
    /// Loop over the characters.
    #[default]
    Iterative,
    /// Recurse one character at a time.
    Recursive,
}

/// Arena node.
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child index per character.
    children: BTreeMap<char, usize>,
    /// Words ending at this node.
    ends: usize,
    /// Words passing through this node.
    passes: usize,
}

/// Prefix tree over `char` sequences.
#[derive(Debug, Clone)]
pub struct Trie {
    /// Node arena; index 0 is the root.
    nodes: Vec<TrieNode>,
    /// Walk strategy.
    walk: Walk,
}

/// Arena index of the root node.
const ROOT: usize = 0;

impl Trie {
    /// Creates an empty trie using iterative walks.
    #[must_use]
    pub fn new() -> Self {
        Self::with_walk(Walk::Iterative)
    }

    /// Creates an empty trie using the given walk strategy.
    #[must_use]
    pub fn with_walk(walk: Walk) -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            walk,
        }
    }

    /// Inserts one occurrence of `word`.
    pub fn insert(&mut self, word: &str) {
        match self.walk {
            Walk::Iterative => {
                let mut node = ROOT;
                self.nodes[node].passes += 1;
                for ch in word.chars() {
                    node = self.child_or_insert(node, ch);
                    self.nodes[node].passes += 1;
                }
                self.nodes[node].ends += 1;
            }
            Walk::Recursive => {
                let chars: Vec<char> = word.chars().collect();
                self.insert_from(ROOT, &chars);
            }
        }
    }

    /// Returns true when `word` was inserted and not fully erased.
    #[must_use]
    pub fn search(&self, word: &str) -> bool {
        self.count_words_equal_to(word) > 0
    }

    /// Returns true when some stored word starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.count_words_starting_with(prefix) > 0
    }

    /// Number of stored occurrences of `word`.
    #[must_use]
    pub fn count_words_equal_to(&self, word: &str) -> usize {
        self.find(word).map_or(0, |node| self.nodes[node].ends)
    }

    /// Number of stored words starting with `prefix`.
    #[must_use]
    pub fn count_words_starting_with(&self, prefix: &str) -> usize {
        self.find(prefix).map_or(0, |node| self.nodes[node].passes)
    }

    /// Removes one occurrence of `word`; absent words are ignored.
    pub fn erase(&mut self, word: &str) {
        if !self.search(word) {
            return;
        }
        match self.walk {
            Walk::Iterative => {
                let mut node = ROOT;
                self.nodes[node].passes -= 1;
                for ch in word.chars() {
                    let Some(&next) = self.nodes[node].children.get(&ch) else {
                        return;
                    };
                    node = next;
                    self.nodes[node].passes -= 1;
                }
                self.nodes[node].ends -= 1;
            }
            Walk::Recursive => {
                let chars: Vec<char> = word.chars().collect();
                self.erase_from(ROOT, &chars);
            }
        }
    }

    // ========================================================================
    // SECTION: Walks
    // ========================================================================

    /// Node reached by `key`, if every character has a child.
    fn find(&self, key: &str) -> Option<usize> {
        match self.walk {
            Walk::Iterative => key
                .chars()
                .try_fold(ROOT, |node, ch| self.nodes[node].children.get(&ch).copied()),
            Walk::Recursive => {
                let chars: Vec<char> = key.chars().collect();
                self.find_from(ROOT, &chars)
            }
        }
    }

    /// Recursive lookup below `node`.
    fn find_from(&self, node: usize, rest: &[char]) -> Option<usize> {
        match rest.split_first() {
            None => Some(node),
            Some((ch, tail)) => {
                let child = *self.nodes[node].children.get(ch)?;
                self.find_from(child, tail)
            }
        }
    }

    /// Recursive insertion below `node`.
    fn insert_from(&mut self, node: usize, rest: &[char]) {
        self.nodes[node].passes += 1;
        match rest.split_first() {
            None => self.nodes[node].ends += 1,
            Some((&ch, tail)) => {
                let child = self.child_or_insert(node, ch);
                self.insert_from(child, tail);
            }
        }
    }

    /// Recursive erase below `node`; the caller guarantees the word exists.
    fn erase_from(&mut self, node: usize, rest: &[char]) {
        self.nodes[node].passes -= 1;
        match rest.split_first() {
            None => self.nodes[node].ends -= 1,
            Some((ch, tail)) => {
                if let Some(&child) = self.nodes[node].children.get(ch) {
                    self.erase_from(child, tail);
                }
            }
        }
    }

    /// Child of `node` for `ch`, allocating it when missing.
    fn child_or_insert(&mut self, node: usize, ch: char) -> usize {
        if let Some(&child) = self.nodes[node].children.get(&ch) {
            return child;
        }
        let child = self.nodes.len();
        self.nodes.push(TrieNode::default());
        self.nodes[node].children.insert(ch, child);
        child
    }
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}
