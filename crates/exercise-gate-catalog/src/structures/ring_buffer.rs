// crates/exercise-gate-catalog/src/structures/ring_buffer.rs
// ============================================================================
// Module: Ring Buffer
// Description: Fixed-capacity circular buffer that overwrites its oldest entry.
// Purpose: Back the `ring-buffer` topic.
// Dependencies: none
// ============================================================================

//! ## Overview
//! A fixed slot array with a read index and a count. Writes never fail: once
//! the buffer is full the oldest element is evicted and handed back.

/// Circular FIFO buffer; writing to a full buffer evicts the oldest element.
#[derive(Debug, Clone)]
pub struct RingBuffer<T> {
    /// Slots; `None` marks a free slot.
    slots: Vec<Option<T>>,
    /// Index of the oldest element.
    read: usize,
    /// Number of stored elements.
    count: usize,
}

impl<T> RingBuffer<T> {
    /// Creates an empty buffer with `capacity` slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            read: 0,
            count: 0,
        }
    }

    /// Writes an element, returning the evicted oldest element when full.
    ///
    /// A zero-capacity buffer evicts every element immediately.
    pub fn enqueue(&mut self, value: T) -> Option<T> {
        let capacity = self.slots.len();
        if capacity == 0 {
            return Some(value);
        }
        if self.count == capacity {
            let evicted = self.slots[self.read].replace(value);
            self.read = (self.read + 1) % capacity;
            return evicted;
        }
        let write = (self.read + self.count) % capacity;
        self.slots[write] = Some(value);
        self.count += 1;
        None
    }

    /// Removes and returns the oldest element.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.count == 0 {
            return None;
        }
        let value = self.slots[self.read].take();
        self.read = (self.read + 1) % self.slots.len();
        self.count -= 1;
        value
    }

    /// Number of stored elements.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Returns true when no elements are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns true when every slot is occupied.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count == self.slots.len()
    }
}
