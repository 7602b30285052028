//! Test helpers for interpreter tests
//!
//! Common utilities for decoding instruction sequences and running them

use crate::interpreter::{execute, ExecError, Instruction, Locals, Outcome, StackFrame, StackLocal};

/// Decode a JSON instruction array and round-trip it through serde
///
/// The round-trip catches instructions that decode but do not serialize back
/// to the same shape.
pub fn parse_code(json: &str) -> Vec<Instruction> {
    let code: Vec<Instruction> = serde_json::from_str(json).expect("Decode instructions failed");
    let encoded = serde_json::to_string(&code).expect("Instruction serialization failed");
    let decoded: Vec<Instruction> =
        serde_json::from_str(&encoded).expect("Instruction deserialization failed");
    assert_eq!(code, decoded, "serde round-trip changed the instructions");
    decoded
}

/// Execute `code` as a root frame over `locals`
pub fn run_with(code: &[Instruction], locals: &mut Locals) -> Result<Outcome, ExecError> {
    let mut frame = StackFrame::new(code, locals);
    execute(&mut frame, 0)
}

/// Execute `code` with four unpopulated local slots
pub fn run(code: &[Instruction]) -> Result<Outcome, ExecError> {
    run_with(code, &mut Locals::new(4))
}

pub fn i32v(n: i32) -> StackLocal {
    StackLocal::I32(n)
}
