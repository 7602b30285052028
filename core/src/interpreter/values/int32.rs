//! `i32` value factory and arithmetic

use super::{BinOp, StackLocal, ValType};
use crate::interpreter::errors::ExecError;

/// Build an `i32` value, rejecting anything that does not fit
pub fn create_value(n: i64) -> Result<StackLocal, ExecError> {
    i32::try_from(n)
        .map(StackLocal::I32)
        .map_err(|_| ExecError::ValueOutOfRange {
            value: n,
            ty: ValType::I32,
        })
}

/// Integer arithmetic is modulo 2^32.
pub fn binop(lhs: i32, rhs: i32, op: BinOp) -> StackLocal {
    let result = match op {
        BinOp::Add => lhs.wrapping_add(rhs),
        BinOp::Sub => lhs.wrapping_sub(rhs),
        BinOp::Mul => lhs.wrapping_mul(rhs),
    };
    StackLocal::I32(result)
}
