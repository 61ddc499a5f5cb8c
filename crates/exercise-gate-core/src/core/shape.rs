// crates/exercise-gate-core/src/core/shape.rs
// ============================================================================
// Module: Exercise Gate Value Shapes
// Description: Structural shapes describing candidate inputs and outputs.
// Purpose: Let contracts reject malformed fixtures before any candidate runs.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! A [`ValueShape`] is a small structural type language over JSON values. It
//! is deliberately coarse: integers, floats, text, sequences, string-keyed
//! maps, fixed tuples, and optional values. `Float` accepts any JSON number so
//! that `240` and `240.0` are both valid float fixtures.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Value Shape
// ============================================================================

/// Structural description of a semantic value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "of", rename_all = "snake_case")]
pub enum ValueShape {
    /// Any JSON value.
    Any,
    /// Boolean value.
    Bool,
    /// Integer number.
    Int,
    /// Any number (integers are accepted).
    Float,
    /// UTF-8 string.
    Text,
    /// Homogeneous sequence.
    Seq(Box<Self>),
    /// String-keyed map with homogeneous values.
    Map(Box<Self>),
    /// Fixed-arity heterogeneous sequence.
    Tuple(Vec<Self>),
    /// Value or `null`.
    Optional(Box<Self>),
}

impl ValueShape {
    /// Sequence of `inner`.
    #[must_use]
    pub fn seq(inner: Self) -> Self {
        Self::Seq(Box::new(inner))
    }

    /// Map with `inner` values.
    #[must_use]
    pub fn map(inner: Self) -> Self {
        Self::Map(Box::new(inner))
    }

    /// Tuple of the given element shapes.
    #[must_use]
    pub fn tuple(items: impl IntoIterator<Item = Self>) -> Self {
        Self::Tuple(items.into_iter().collect())
    }

    /// `inner` or `null`.
    #[must_use]
    pub fn optional(inner: Self) -> Self {
        Self::Optional(Box::new(inner))
    }

    /// Returns true when `value` structurally conforms to this shape.
    #[must_use]
    pub fn conforms(&self, value: &Value) -> bool {
        match self {
            Self::Any => true,
            Self::Bool => value.is_boolean(),
            Self::Int => value.is_i64() || value.is_u64(),
            Self::Float => value.is_number(),
            Self::Text => value.is_string(),
            Self::Seq(inner) => {
                value.as_array().is_some_and(|items| items.iter().all(|item| inner.conforms(item)))
            }
            Self::Map(inner) => value
                .as_object()
                .is_some_and(|entries| entries.values().all(|item| inner.conforms(item))),
            Self::Tuple(shapes) => value.as_array().is_some_and(|items| {
                items.len() == shapes.len()
                    && shapes.iter().zip(items).all(|(shape, item)| shape.conforms(item))
            }),
            Self::Optional(inner) => value.is_null() || inner.conforms(value),
        }
    }
}

impl fmt::Display for ValueShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Bool => f.write_str("bool"),
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Text => f.write_str("text"),
            Self::Seq(inner) => write!(f, "seq<{inner}>"),
            Self::Map(inner) => write!(f, "map<{inner}>"),
            Self::Tuple(items) => {
                f.write_str("(")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
            Self::Optional(inner) => write!(f, "{inner}?"),
        }
    }
}
