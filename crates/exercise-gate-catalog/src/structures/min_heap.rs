// crates/exercise-gate-catalog/src/structures/min_heap.rs
// ============================================================================
// Module: Min Heap
// Description: Array-backed binary min-heap with selectable sift strategy.
// Purpose: Back the `min-heap` topic and the Dijkstra frontier.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Elements live in a vector laid out as a complete binary tree: the
//! children of slot `i` are `2i + 1` and `2i + 2`. Both sift strategies
//! produce identical layouts; they differ only in whether the sift walks
//! the tree with a loop or by recursion.

// ============================================================================
// SECTION: Types
// ============================================================================

/// How elements are moved to restore heap order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Sift {
    /// Loop-driven sift.
    #[default]
    Iterative,
    /// Recursive sift.
    Recursive,
}

/// Binary min-heap.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    /// Heap-ordered elements.
    items: Vec<T>,
    /// Sift strategy.
    sift: Sift,
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap using iterative sifts.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_sift(Sift::Iterative)
    }

    /// Creates an empty heap using the given sift strategy.
    #[must_use]
    pub const fn with_sift(sift: Sift) -> Self {
        Self {
            items: Vec::new(),
            sift,
        }
    }

    /// Inserts an element.
    pub fn insert(&mut self, value: T) {
        self.items.push(value);
        let last = self.items.len() - 1;
        match self.sift {
            Sift::Iterative => self.sift_up_iterative(last),
            Sift::Recursive => self.sift_up_recursive(last),
        }
    }

    /// Removes and returns the smallest element.
    pub fn extract_min(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let min = self.items.swap_remove(0);
        if !self.items.is_empty() {
            match self.sift {
                Sift::Iterative => self.sift_down_iterative(0),
                Sift::Recursive => self.sift_down_recursive(0),
            }
        }
        Some(min)
    }

    /// Returns the smallest element.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the heap holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ========================================================================
    // SECTION: Sifting
    // ========================================================================

    /// Moves the element at `index` up until its parent is not larger.
    fn sift_up_iterative(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index] >= self.items[parent] {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    /// Recursive form of [`Self::sift_up_iterative`].
    fn sift_up_recursive(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let parent = (index - 1) / 2;
        if self.items[index] < self.items[parent] {
            self.items.swap(index, parent);
            self.sift_up_recursive(parent);
        }
    }

    /// Moves the element at `index` down until no child is smaller.
    fn sift_down_iterative(&mut self, mut index: usize) {
        while let Some(child) = self.smaller_child(index) {
            if self.items[child] >= self.items[index] {
                break;
            }
            self.items.swap(index, child);
            index = child;
        }
    }

    /// Recursive form of [`Self::sift_down_iterative`].
    fn sift_down_recursive(&mut self, index: usize) {
        if let Some(child) = self.smaller_child(index)
            && self.items[child] < self.items[index]
        {
            self.items.swap(index, child);
            self.sift_down_recursive(child);
        }
    }

    /// Index of the smaller child of `index`, if any.
    fn smaller_child(&self, index: usize) -> Option<usize> {
        let left = 2 * index + 1;
        let right = left + 1;
        if left >= self.items.len() {
            None
        } else if right < self.items.len() && self.items[right] < self.items[left] {
            Some(right)
        } else {
            Some(left)
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}
