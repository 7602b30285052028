//! Runtime values
//!
//! A [`StackLocal`] is an immutable tagged integer. Arithmetic never mutates an
//! operand; every operation produces a fresh value.

pub mod int32;
pub mod int64;

use super::errors::ExecError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/* ===================== Value Types ===================== */

/// Numeric subtype tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValType {
    I32,
    I64,
}

impl ValType {
    /// Zero value of this type, used for declared locals
    pub fn zero(self) -> StackLocal {
        match self {
            ValType::I32 => StackLocal::I32(0),
            ValType::I64 => int64::create_value(0),
        }
    }
}

impl fmt::Display for ValType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValType::I32 => write!(f, "i32"),
            ValType::I64 => write!(f, "i64"),
        }
    }
}

/* ===================== StackLocal ===================== */

/// Tagged numeric value living on a value stack or in a local slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v", rename_all = "lowercase")]
pub enum StackLocal {
    I32(i32),
    I64(i64),
}

impl StackLocal {
    pub fn ty(&self) -> ValType {
        match self {
            StackLocal::I32(_) => ValType::I32,
            StackLocal::I64(_) => ValType::I64,
        }
    }

    /// Payload widened to `i64`
    pub fn as_i64(&self) -> i64 {
        match self {
            StackLocal::I32(v) => i64::from(*v),
            StackLocal::I64(v) => *v,
        }
    }
}

impl fmt::Display for StackLocal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty(), self.as_i64())
    }
}

/* ===================== Binary Operators ===================== */

/// Arithmetic operator understood by [`binop`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
}

impl BinOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for BinOp {
    type Err = ExecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(BinOp::Add),
            "-" => Ok(BinOp::Sub),
            "*" => Ok(BinOp::Mul),
            other => Err(ExecError::UnsupportedOperator {
                symbol: other.to_string(),
            }),
        }
    }
}

/* ===================== Evaluator ===================== */

/// Apply `op` to two values of the same type
///
/// Operands are passed in the order they come off the value stack: `rhs` is
/// the value that was on top (pushed last), `lhs` the one beneath it. The
/// result is `lhs op rhs`, so `5 3 -` yields `2`.
pub fn binop(rhs: StackLocal, lhs: StackLocal, op: BinOp) -> Result<StackLocal, ExecError> {
    match (lhs, rhs) {
        (StackLocal::I32(l), StackLocal::I32(r)) => Ok(int32::binop(l, r, op)),
        (StackLocal::I64(l), StackLocal::I64(r)) => Ok(int64::binop(l, r, op)),
        (l, r) => Err(ExecError::TypeMismatch {
            op,
            lhs: l.ty(),
            rhs: r.ty(),
        }),
    }
}
