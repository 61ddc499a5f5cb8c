// crates/exercise-gate-catalog/src/structures/stack.rs
// ============================================================================
// Module: Stacks
// Description: LIFO stacks backed by a vector and by a singly linked list.
// Purpose: Provide the two stack variants exercised by the `stack` topic.
// Dependencies: none
// ============================================================================

//! Vector-backed and linked-list stacks with the same LIFO interface.

// ============================================================================
// SECTION: Vector Stack
// ============================================================================

/// Vector-backed LIFO stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    /// Elements, top last.
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
        }
    }

    /// Pushes an element on top.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns the top element.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true when the stack holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// SECTION: Linked Stack
// ============================================================================

/// Link to the next node of a [`LinkedStack`].
type Link<T> = Option<Box<Node<T>>>;

/// Linked stack node.
#[derive(Debug)]
struct Node<T> {
    /// Stored element.
    value: T,
    /// Node below this one.
    next: Link<T>,
}

/// Singly linked LIFO stack.
#[derive(Debug)]
pub struct LinkedStack<T> {
    /// Top node.
    head: Link<T>,
    /// Number of nodes.
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            len: 0,
        }
    }

    /// Pushes an element on top.
    pub fn push(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(Node {
            value,
            next,
        }));
        self.len += 1;
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let node = *node;
            self.head = node.next;
            self.len -= 1;
            node.value
        })
    }

    /// Returns the top element.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.head.as_deref().map(|node| &node.value)
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true when the stack holds no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.head.is_none()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedStack<T> {
    // Unlinks iteratively so long stacks do not recurse on drop.
    fn drop(&mut self) {
        let mut link = self.head.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}
