//! `i64` value factory and arithmetic

use super::{BinOp, StackLocal};

pub fn create_value(n: i64) -> StackLocal {
    StackLocal::I64(n)
}

/// Integer arithmetic is modulo 2^64.
pub fn binop(lhs: i64, rhs: i64, op: BinOp) -> StackLocal {
    let result = match op {
        BinOp::Add => lhs.wrapping_add(rhs),
        BinOp::Sub => lhs.wrapping_sub(rhs),
        BinOp::Mul => lhs.wrapping_mul(rhs),
    };
    StackLocal::I64(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i64_arithmetic() {
        assert_eq!(binop(10, 4, BinOp::Sub), create_value(6));
        assert_eq!(binop(i64::MAX, 1, BinOp::Add), create_value(i64::MIN));
        assert_eq!(binop(-3, 7, BinOp::Mul), create_value(-21));
    }
}
