// crates/exercise-gate-catalog/src/structures/queue.rs
// ============================================================================
// Module: Bounded Queues
// Description: FIFO queues with a fixed capacity.
// Purpose: Provide the array and linked-list variants of the `queue` topic.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Both queues refuse elements once `capacity` is reached and hand the
//! refused element back to the caller. [`Queue`] is a circular array;
//! [`LinkedQueue`] threads nodes through an index slab so that nodes freed
//! by `dequeue` are reused by later `enqueue` calls.

// ============================================================================
// SECTION: Array Queue
// ============================================================================

/// Circular-array FIFO queue with a fixed capacity.
#[derive(Debug, Clone)]
pub struct Queue<T> {
    /// Slots; `None` marks a free slot.
    slots: Vec<Option<T>>,
    /// Index of the front element.
    head: usize,
    /// Number of stored elements.
    len: usize,
}

impl<T> Queue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    /// Appends an element at the back.
    ///
    /// # Errors
    ///
    /// Returns the element back when the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let tail = (self.head + self.len) % self.slots.len();
        self.slots[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.slots.len();
        self.len -= 1;
        value
    }

    /// Returns the front element.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 { None } else { self.slots[self.head].as_ref() }
    }

    /// Number of stored elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true when no elements are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true when the queue is at capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }
}

// ============================================================================
// SECTION: Linked Queue
// ============================================================================

/// Slab node of a [`LinkedQueue`].
#[derive(Debug, Clone)]
struct Node<T> {
    /// Stored element; `None` while the node is on the free list.
    value: Option<T>,
    /// Next node toward the back, or next free node.
    next: Option<usize>,
}

/// Singly linked FIFO queue with a fixed capacity.
#[derive(Debug, Clone)]
pub struct LinkedQueue<T> {
    /// Node slab.
    nodes: Vec<Node<T>>,
    /// Front node.
    head: Option<usize>,
    /// Back node.
    tail: Option<usize>,
    /// Head of the free list.
    free: Option<usize>,
    /// Number of stored elements.
    len: usize,
    /// Maximum number of elements.
    capacity: usize,
}

impl<T> LinkedQueue<T> {
    /// Creates an empty queue holding at most `capacity` elements.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::new(),
            head: None,
            tail: None,
            free: None,
            len: 0,
            capacity,
        }
    }

    /// Appends an element at the back.
    ///
    /// # Errors
    ///
    /// Returns the element back when the queue is full.
    pub fn enqueue(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }
        let node = Node {
            value: Some(value),
            next: None,
        };
        let index = match self.free {
            Some(index) => {
                self.free = self.nodes[index].next;
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element.
    pub fn dequeue(&mut self) -> Option<T> {
        let index = self.head?;
        let node = &mut self.nodes[index];
        let value = node.value.take();
        self.head = node.next;
        node.next = self.free;
        self.free = Some(index);
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        value
    }

    /// Returns the front element.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.head.and_then(|index| self.nodes[index].value.as_ref())
    }

    /// Number of stored elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true when no elements are stored.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true when the queue is at capacity.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.len >= self.capacity
    }
}
