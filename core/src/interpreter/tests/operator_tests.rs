//! Tests for i32.add / i32.sub / i32.mul and the binary evaluator

use super::helpers::{i32v, run, run_with};
use crate::interpreter::{
    binop, errors, BinOp, ExecError, Instruction, Locals, Outcome, StackLocal, ValType,
};

/* ===================== Arithmetic ===================== */

#[test]
fn test_add_basic() {
    let code = vec![
        Instruction::i32_const(10),
        Instruction::i32_const(5),
        Instruction::Add,
    ];
    assert_eq!(run(&code), Ok(Outcome::Value(i32v(15))));
}

#[test]
fn test_sub_operand_order() {
    // Pushed first is the left-hand side: 5 - 3
    let code = vec![
        Instruction::i32_const(5),
        Instruction::i32_const(3),
        Instruction::Sub,
    ];
    assert_eq!(run(&code), Ok(Outcome::Value(i32v(2))));
}

#[test]
fn test_sub_negative_result() {
    let code = vec![
        Instruction::i32_const(3),
        Instruction::i32_const(5),
        Instruction::Sub,
    ];
    assert_eq!(run(&code), Ok(Outcome::Value(i32v(-2))));
}

#[test]
fn test_mul_basic() {
    let code = vec![
        Instruction::i32_const(2),
        Instruction::i32_const(4),
        Instruction::Mul,
    ];
    assert_eq!(run(&code), Ok(Outcome::Value(i32v(8))));
}

#[test]
fn test_arithmetic_chain() {
    // 2 + (3 * 4)
    let code = vec![
        Instruction::i32_const(2),
        Instruction::i32_const(3),
        Instruction::i32_const(4),
        Instruction::Mul,
        Instruction::Add,
    ];
    assert_eq!(run(&code), Ok(Outcome::Value(i32v(14))));
}

#[test]
fn test_sub_with_locals() {
    let code = vec![
        Instruction::get_local(0),
        Instruction::get_local(1),
        Instruction::Sub,
    ];
    let mut locals = Locals::from_values([i32v(10), i32v(4)]);
    assert_eq!(run_with(&code, &mut locals), Ok(Outcome::Value(i32v(6))));
}

#[test]
fn test_add_wraps_on_overflow() {
    let code = vec![
        Instruction::i32_const(i64::from(i32::MAX)),
        Instruction::i32_const(1),
        Instruction::Add,
    ];
    assert_eq!(run(&code), Ok(Outcome::Value(i32v(i32::MIN))));
}

#[test]
fn test_i64_operands_from_locals() {
    let code = vec![
        Instruction::get_local(0),
        Instruction::get_local(1),
        Instruction::Mul,
    ];
    let mut locals = Locals::from_values([StackLocal::I64(6), StackLocal::I64(7)]);
    assert_eq!(
        run_with(&code, &mut locals),
        Ok(Outcome::Value(StackLocal::I64(42)))
    );
}

/* ===================== Fatal Paths ===================== */

#[test]
fn test_add_on_empty_stack_is_fatal() {
    let err = run(&[Instruction::Add]).unwrap_err();
    assert_eq!(
        err,
        ExecError::StackUnderflow {
            op: "i32.add",
            expected: 2,
            found: 0
        }
    );
    assert_eq!(err.code(), errors::STACK_UNDERFLOW);
}

#[test]
fn test_add_on_single_value_is_fatal() {
    let code = vec![Instruction::i32_const(1), Instruction::Add];
    let err = run(&code).unwrap_err();
    assert_eq!(
        err.to_string(),
        "i32.add expected 2 value(s) on the stack, found 1"
    );
}

#[test]
fn test_sub_and_mul_underflow() {
    for op in [Instruction::Sub, Instruction::Mul] {
        let code = vec![Instruction::i32_const(1), op];
        assert_eq!(run(&code).unwrap_err().code(), errors::STACK_UNDERFLOW);
    }
}

#[test]
fn test_mismatched_types_are_fatal() {
    let code = vec![
        Instruction::get_local(0),
        Instruction::get_local(1),
        Instruction::Add,
    ];
    let mut locals = Locals::from_values([StackLocal::I64(1), i32v(2)]);

    let err = run_with(&code, &mut locals).unwrap_err();
    assert_eq!(
        err,
        ExecError::TypeMismatch {
            op: BinOp::Add,
            lhs: ValType::I64,
            rhs: ValType::I32
        }
    );
    assert_eq!(err.to_string(), "operand types do not match: i64 + i32");
}

/* ===================== Evaluator ===================== */

#[test]
fn test_binop_takes_top_of_stack_first() {
    assert_eq!(binop(i32v(3), i32v(5), BinOp::Sub), Ok(i32v(2)));
    assert_eq!(binop(i32v(5), i32v(3), BinOp::Sub), Ok(i32v(-2)));
}

#[test]
fn test_binop_never_mutates_operands() {
    let a = i32v(6);
    let b = i32v(7);
    let product = binop(a, b, BinOp::Mul).unwrap();
    assert_eq!((a, b, product), (i32v(6), i32v(7), i32v(42)));
}

#[test]
fn test_operator_symbols() {
    assert_eq!("+".parse::<BinOp>(), Ok(BinOp::Add));
    assert_eq!("-".parse::<BinOp>(), Ok(BinOp::Sub));
    assert_eq!("*".parse::<BinOp>(), Ok(BinOp::Mul));
    assert_eq!(BinOp::Mul.to_string(), "*");

    let err = "/".parse::<BinOp>().unwrap_err();
    assert_eq!(
        err,
        ExecError::UnsupportedOperator {
            symbol: "/".to_string()
        }
    );
    assert_eq!(err.code(), errors::UNSUPPORTED_OPERATOR);
}
