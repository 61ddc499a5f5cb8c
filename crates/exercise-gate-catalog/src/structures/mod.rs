// crates/exercise-gate-catalog/src/structures/mod.rs
// ============================================================================
// Module: Data Structures
// Description: Generic containers used by the stateful topics.
// Purpose: Keep container logic independent of harness adapters.
// Dependencies: none
// ============================================================================

//! ## Overview
//! Plain generic containers with no knowledge of fixtures or semantic
//! values. Topic modules wrap them in sessions that decode operations and
//! map empty or full conditions to rejections.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod lru;
pub mod min_heap;
pub mod queue;
pub mod ring_buffer;
pub mod stack;
pub mod trie;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use lru::LruCache;
pub use min_heap::MinHeap;
pub use min_heap::Sift;
pub use queue::LinkedQueue;
pub use queue::Queue;
pub use ring_buffer::RingBuffer;
pub use stack::LinkedStack;
pub use stack::Stack;
pub use trie::Trie;
pub use trie::Walk;
