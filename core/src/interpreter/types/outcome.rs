//! Result of executing a frame

use super::super::values::StackLocal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What a frame produced once it stopped
///
/// `Trapped` is its own variant, so no legitimate value can ever be mistaken
/// for the trap signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum Outcome {
    /// Top of the value stack when the code ran out
    Value(StackLocal),
    /// The code ran out with an empty value stack
    Empty,
    /// A `trap` executed in this frame or in one of its children
    Trapped,
}

impl Outcome {
    pub fn is_trapped(&self) -> bool {
        matches!(self, Outcome::Trapped)
    }

    pub fn value(&self) -> Option<StackLocal> {
        match self {
            Outcome::Value(v) => Some(*v),
            Outcome::Empty | Outcome::Trapped => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Value(v) => write!(f, "value: {}", v),
            Outcome::Empty => write!(f, "empty"),
            Outcome::Trapped => write!(f, "trapped"),
        }
    }
}
