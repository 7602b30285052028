//! Fatal execution errors
//!
//! Everything in here is an internal-consistency failure: the instruction
//! stream (or the frame its creator built) was never valid. These unwind the
//! whole call chain. A trap is not an error; it travels back to the caller as
//! [`Outcome::Trapped`](super::types::Outcome::Trapped).

use super::values::{BinOp, ValType};
use thiserror::Error;

/* ===================== Error Codes ===================== */

pub const MISSING_OPERAND: &str = "MISSING_OPERAND";
pub const STACK_UNDERFLOW: &str = "STACK_UNDERFLOW";
pub const UNPOPULATED_LOCAL: &str = "UNPOPULATED_LOCAL";
pub const LOCAL_OUT_OF_RANGE: &str = "LOCAL_OUT_OF_RANGE";
pub const UNKNOWN_INSTRUCTION: &str = "UNKNOWN_INSTRUCTION";
pub const EMPTY_INITIALIZER: &str = "EMPTY_INITIALIZER";
pub const DEPTH_EXCEEDED: &str = "DEPTH_EXCEEDED";
pub const VALUE_OUT_OF_RANGE: &str = "VALUE_OUT_OF_RANGE";
pub const TYPE_MISMATCH: &str = "TYPE_MISMATCH";
pub const UNSUPPORTED_OPERATOR: &str = "UNSUPPORTED_OPERATOR";

/* ===================== ExecError ===================== */

/// Unrecoverable execution failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecError {
    #[error("{op} requires {operand}, none given")]
    MissingOperand {
        op: &'static str,
        operand: &'static str,
    },

    #[error("{op} expected {expected} value(s) on the stack, found {found}")]
    StackUnderflow {
        op: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("no local value at index {index}")]
    UnpopulatedLocal { index: usize },

    #[error("local index {index} is out of range for {len} slot(s)")]
    LocalOutOfRange { index: usize, len: usize },

    #[error("unknown operation")]
    UnknownInstruction,

    #[error("set_local {index}: initializer produced no value")]
    EmptyInitializer { index: usize },

    /// Nesting went past the configured limit. This is a resource limit, not a
    /// malformed program.
    #[error("maximum nesting depth of {limit} exceeded")]
    DepthExceeded { limit: usize },

    #[error("{value} is not representable as {ty}")]
    ValueOutOfRange { value: i64, ty: ValType },

    #[error("operand types do not match: {lhs} {op} {rhs}")]
    TypeMismatch {
        op: BinOp,
        lhs: ValType,
        rhs: ValType,
    },

    #[error("unsupported operator '{symbol}'")]
    UnsupportedOperator { symbol: String },
}

impl ExecError {
    /// Stable code for this error, suitable for matching in tests and tooling
    pub fn code(&self) -> &'static str {
        match self {
            ExecError::MissingOperand { .. } => MISSING_OPERAND,
            ExecError::StackUnderflow { .. } => STACK_UNDERFLOW,
            ExecError::UnpopulatedLocal { .. } => UNPOPULATED_LOCAL,
            ExecError::LocalOutOfRange { .. } => LOCAL_OUT_OF_RANGE,
            ExecError::UnknownInstruction => UNKNOWN_INSTRUCTION,
            ExecError::EmptyInitializer { .. } => EMPTY_INITIALIZER,
            ExecError::DepthExceeded { .. } => DEPTH_EXCEEDED,
            ExecError::ValueOutOfRange { .. } => VALUE_OUT_OF_RANGE,
            ExecError::TypeMismatch { .. } => TYPE_MISMATCH,
            ExecError::UnsupportedOperator { .. } => UNSUPPORTED_OPERATOR,
        }
    }

    /// True for errors caused by execution limits rather than bad input
    pub fn is_resource_limit(&self) -> bool {
        matches!(self, ExecError::DepthExceeded { .. })
    }
}
