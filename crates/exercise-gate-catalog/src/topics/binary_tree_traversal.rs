// crates/exercise-gate-catalog/src/topics/binary_tree_traversal.rs
// ============================================================================
// Module: Binary Tree Traversal
// Description: In-, pre-, and post-order walks of a binary tree.
// Purpose: Provide the `binary-tree-traversal` topic.
// Dependencies: exercise-gate-core, serde_json
// ============================================================================

//! ## Overview
//! `(tree: seq<int?>, order: text) -> seq<int>`. The tree arrives in level
//! order with `null` marking absent children; only present nodes contribute
//! child slots. `order` is one of `in`, `pre`, or `post`.

use std::collections::VecDeque;

use exercise_gate_core::Callable;
use exercise_gate_core::Contract;
use exercise_gate_core::Expected;
use exercise_gate_core::Fixture;
use exercise_gate_core::RejectionKind;
use exercise_gate_core::ValueShape;
use serde_json::json;

use super::TopicDefinition;
use super::call;
use super::sentinel;
use super::within_depth;

/// Topic definition.
pub const DEFINITION: TopicDefinition = TopicDefinition {
    id: "binary-tree-traversal",
    contract,
    fixtures,
    stub,
    solutions: &[("recursive", recursive_candidate), ("iterative", iterative_candidate)],
};

// ============================================================================
// SECTION: Tree
// ============================================================================

/// Visit order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    /// Left, node, right.
    In,
    /// Node, left, right.
    Pre,
    /// Left, right, node.
    Post,
}

impl Order {
    /// Parses `in`, `pre`, or `post`.
    ///
    /// # Errors
    ///
    /// Returns [`RejectionKind::InvalidInput`] for any other label.
    pub fn parse(label: &str) -> Result<Self, RejectionKind> {
        match label {
            "in" => Ok(Self::In),
            "pre" => Ok(Self::Pre),
            "post" => Ok(Self::Post),
            _ => Err(RejectionKind::InvalidInput),
        }
    }
}

/// Arena node.
#[derive(Debug, Clone, Copy)]
struct Node {
    /// Stored value.
    value: i64,
    /// Left child slot.
    left: Option<usize>,
    /// Right child slot.
    right: Option<usize>,
}

/// Arena-backed binary tree; node 0 is the root.
#[derive(Debug, Clone, Default)]
pub struct Tree {
    /// Nodes in level order.
    nodes: Vec<Node>,
}

impl Tree {
    /// Builds a tree from its level-order encoding.
    #[must_use]
    pub fn from_level_order(levels: &[Option<i64>]) -> Self {
        let mut tree = Self::default();
        let mut slots = levels.iter().copied();
        let Some(Some(root)) = slots.next() else {
            return tree;
        };
        tree.push(root);
        let mut parents = VecDeque::from([0]);
        while let Some(parent) = parents.pop_front() {
            let Some(left) = slots.next() else {
                break;
            };
            if let Some(value) = left {
                let child = tree.push(value);
                tree.nodes[parent].left = Some(child);
                parents.push_back(child);
            }
            let Some(right) = slots.next() else {
                break;
            };
            if let Some(value) = right {
                let child = tree.push(value);
                tree.nodes[parent].right = Some(child);
                parents.push_back(child);
            }
        }
        tree
    }

    /// Appends a leaf and returns its slot.
    fn push(&mut self, value: i64) -> usize {
        self.nodes.push(Node {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    /// Root slot, if any.
    fn root(&self) -> Option<usize> {
        (!self.nodes.is_empty()).then_some(0)
    }
}

// ============================================================================
// SECTION: Algorithms
// ============================================================================

/// Recursive traversal.
#[must_use]
pub fn recursive(tree: &Tree, order: Order) -> Vec<i64> {
    let mut out = Vec::with_capacity(tree.nodes.len());
    walk(tree, tree.root(), order, &mut out);
    out
}

/// Recursive step.
fn walk(tree: &Tree, slot: Option<usize>, order: Order, out: &mut Vec<i64>) {
    let Some(node) = slot.map(|slot| tree.nodes[slot]) else {
        return;
    };
    if order == Order::Pre {
        out.push(node.value);
    }
    walk(tree, node.left, order, out);
    if order == Order::In {
        out.push(node.value);
    }
    walk(tree, node.right, order, out);
    if order == Order::Post {
        out.push(node.value);
    }
}

/// Explicit-stack traversal.
#[must_use]
pub fn iterative(tree: &Tree, order: Order) -> Vec<i64> {
    match order {
        Order::In => in_order(tree),
        Order::Pre => pre_order(tree),
        Order::Post => post_order(tree),
    }
}

/// In-order: descend left, emit, step right.
fn in_order(tree: &Tree) -> Vec<i64> {
    let mut out = Vec::with_capacity(tree.nodes.len());
    let mut stack = Vec::new();
    let mut current = tree.root();
    loop {
        while let Some(slot) = current {
            stack.push(slot);
            current = tree.nodes[slot].left;
        }
        let Some(slot) = stack.pop() else {
            break;
        };
        out.push(tree.nodes[slot].value);
        current = tree.nodes[slot].right;
    }
    out
}

/// Pre-order: emit on pop, push right before left.
fn pre_order(tree: &Tree) -> Vec<i64> {
    let mut out = Vec::with_capacity(tree.nodes.len());
    let mut stack: Vec<usize> = tree.root().into_iter().collect();
    while let Some(slot) = stack.pop() {
        let node = tree.nodes[slot];
        out.push(node.value);
        stack.extend(node.right);
        stack.extend(node.left);
    }
    out
}

/// Post-order: reversed node-right-left walk.
fn post_order(tree: &Tree) -> Vec<i64> {
    let mut out = Vec::with_capacity(tree.nodes.len());
    let mut stack: Vec<usize> = tree.root().into_iter().collect();
    while let Some(slot) = stack.pop() {
        let node = tree.nodes[slot];
        out.push(node.value);
        stack.extend(node.left);
        stack.extend(node.right);
    }
    out.reverse();
    out
}

// ============================================================================
// SECTION: Candidates
// ============================================================================

/// Topic contract.
fn contract() -> Contract {
    Contract::pure(
        DEFINITION.id,
        vec![ValueShape::seq(ValueShape::optional(ValueShape::Int)), ValueShape::Text],
        ValueShape::seq(ValueShape::Int),
    )
}

/// Stub that visits nothing.
fn stub() -> Callable {
    sentinel(json!([]))
}

/// Recursive variant.
fn recursive_candidate() -> Callable {
    Callable::typed(|(levels, order): (Vec<Option<i64>>, String)| {
        let order = Order::parse(&order)?;
        within_depth(levels.iter().flatten().count())?;
        Ok::<_, RejectionKind>(recursive(&Tree::from_level_order(&levels), order))
    })
}

/// Iterative variant.
fn iterative_candidate() -> Callable {
    Callable::typed(|(levels, order): (Vec<Option<i64>>, String)| {
        let order = Order::parse(&order)?;
        Ok::<_, RejectionKind>(iterative(&Tree::from_level_order(&levels), order))
    })
}

// ============================================================================
// SECTION: Fixtures
// ============================================================================

/// Built-in fixtures.
fn fixtures() -> Vec<Fixture> {
    let sample = json!([1, 2, 3, 4, 5, null, 6]);
    let skewed = json!([1, null, 2, null, 3]);
    vec![
        call(json!([sample, "in"]), Expected::value(json!([4, 2, 5, 1, 3, 6]))),
        call(json!([sample, "pre"]), Expected::value(json!([1, 2, 4, 5, 3, 6]))),
        call(json!([sample, "post"]), Expected::value(json!([4, 5, 2, 6, 3, 1]))),
        call(json!([skewed, "in"]), Expected::value(json!([1, 2, 3]))),
        call(json!([skewed, "post"]), Expected::value(json!([3, 2, 1]))),
        call(json!([[], "in"]), Expected::value(json!([]))),
        call(json!([[7], "pre"]), Expected::value(json!([7]))),
        call(json!([sample, "level"]), Expected::Rejected(RejectionKind::InvalidInput)),
    ]
}
