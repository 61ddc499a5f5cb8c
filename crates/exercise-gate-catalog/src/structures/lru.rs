// crates/exercise-gate-catalog/src/structures/lru.rs
// ============================================================================
// Module: LRU Cache
// Description: Fixed-capacity key/value cache with least-recently-used eviction.
// Purpose: Back the `lru-cache` topic.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Entries sit in a slab and are threaded into a doubly linked recency list
//! by index; a hash map resolves keys to slab slots. `get` and `put` are
//! O(1). When full, `put` of a new key reuses the slot of the least recently
//! used entry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::hash::Hash;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Slab entry of the recency list.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    /// Cached key.
    key: K,
    /// Cached value.
    value: V,
    /// More recently used neighbour.
    prev: Option<usize>,
    /// Less recently used neighbour.
    next: Option<usize>,
}

/// Least-recently-used cache.
#[derive(Debug, Clone)]
pub struct LruCache<K, V> {
    /// Maximum number of entries.
    capacity: usize,
    /// Key to slab slot.
    index: HashMap<K, usize>,
    /// Entry slab.
    entries: Vec<Entry<K, V>>,
    /// Most recently used slot.
    head: Option<usize>,
    /// Least recently used slot.
    tail: Option<usize>,
}

impl<K: Eq + Hash + Clone, V> LruCache<K, V> {
    /// Creates an empty cache holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            index: HashMap::with_capacity(capacity),
            entries: Vec::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the value for `key` and marks it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.promote(slot);
        Some(&self.entries[slot].value)
    }

    /// Inserts or updates `key`, evicting the least recently used entry when full.
    pub fn put(&mut self, key: K, value: V) {
        if self.capacity == 0 {
            return;
        }
        if let Some(&slot) = self.index.get(&key) {
            self.entries[slot].value = value;
            self.promote(slot);
            return;
        }
        let slot = if self.entries.len() < self.capacity {
            self.entries.push(Entry {
                key: key.clone(),
                value,
                prev: None,
                next: None,
            });
            self.entries.len() - 1
        } else {
            let Some(lru) = self.tail else {
                return;
            };
            self.unlink(lru);
            let entry = &mut self.entries[lru];
            self.index.remove(&entry.key);
            entry.key = key.clone();
            entry.value = value;
            lru
        };
        self.index.insert(key, slot);
        self.push_front(slot);
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns true when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // ========================================================================
    // SECTION: Recency List
    // ========================================================================

    /// Moves `slot` to the front of the recency list.
    fn promote(&mut self, slot: usize) {
        if self.head != Some(slot) {
            self.unlink(slot);
            self.push_front(slot);
        }
    }

    /// Detaches `slot` from the recency list.
    fn unlink(&mut self, slot: usize) {
        let (prev, next) = (self.entries[slot].prev, self.entries[slot].next);
        match prev {
            Some(prev) => self.entries[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.entries[next].prev = prev,
            None => self.tail = prev,
        }
        self.entries[slot].prev = None;
        self.entries[slot].next = None;
    }

    /// Attaches a detached `slot` as most recently used.
    fn push_front(&mut self, slot: usize) {
        self.entries[slot].next = self.head;
        if let Some(head) = self.head {
            self.entries[head].prev = Some(slot);
        }
        self.head = Some(slot);
        if self.tail.is_none() {
            self.tail = Some(slot);
        }
    }
}
