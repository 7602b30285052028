//! Execution engine
//!
//! `execute()` interprets one frame's code from pc 0 to the end. Nested
//! sequences (a `loop` body, a `set_local` initializer) run in child frames
//! through a recursive call, one level deeper. Two things stop a frame early:
//!
//! 1. A trap: returned as `Outcome::Trapped`. Every frame checks the outcome of
//!    each child and stops right away, so nothing after the trap point runs.
//! 2. An `ExecError`: propagated with `?` through the entire call chain.

use super::errors::ExecError;
use super::frame::{Locals, StackFrame};
use super::trace::TraceHook;
use super::types::{Instruction, Outcome};
use super::values::{self, int32, BinOp, StackLocal};

/* ===================== Limits ===================== */

/// Execution limits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest child frame allowed. The root frame runs at depth 0.
    pub max_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_depth: 512 }
    }
}

/* ===================== Engine ===================== */

#[derive(Debug, Clone, Default)]
pub struct Engine {
    limits: Limits,
}

/// Execute a frame with default limits
pub fn execute(frame: &mut StackFrame<'_>, depth: usize) -> Result<Outcome, ExecError> {
    Engine::default().execute(frame, depth)
}

impl Engine {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Build a root frame over `code` and execute it at depth 0
    pub fn run<'a>(
        &self,
        code: &'a [Instruction],
        locals: &'a mut Locals,
        trace: Option<&'a dyn TraceHook>,
    ) -> Result<Outcome, ExecError> {
        let mut frame = StackFrame::new(code, locals);
        if let Some(trace) = trace {
            frame = frame.with_trace(trace);
        }
        self.execute(&mut frame, 0)
    }

    /// Interpret `frame.code` to completion
    ///
    /// Returns the top of the value stack, `Empty` if the stack is empty at the
    /// end, or `Trapped` if this frame or any child trapped.
    pub fn execute(&self, frame: &mut StackFrame<'_>, depth: usize) -> Result<Outcome, ExecError> {
        if depth > self.limits.max_depth {
            return Err(ExecError::DepthExceeded {
                limit: self.limits.max_depth,
            });
        }

        let code = frame.code;
        let mut pc = 0;

        while let Some(instruction) = code.get(pc) {
            match instruction {
                Instruction::Const { value } => {
                    let n = value.ok_or(ExecError::MissingOperand {
                        op: "i32.const",
                        operand: "value",
                    })?;
                    frame.values.push(int32::create_value(n)?);
                }

                Instruction::Nop => {}

                Instruction::Loop { body } => {
                    if !body.is_empty() {
                        let outcome = {
                            let mut child = frame.child(body);
                            self.execute(&mut child, depth + 1)?
                        };

                        if outcome.is_trapped() {
                            return Ok(Outcome::Trapped);
                        }
                    }
                }

                Instruction::Trap => return Ok(Outcome::Trapped),

                Instruction::GetLocal { index } => {
                    let index = index.ok_or(ExecError::MissingOperand {
                        op: "get_local",
                        operand: "index",
                    })?;
                    let local = frame.locals.get(index)?;
                    frame.values.push(local);
                }

                Instruction::SetLocal { index, init } => {
                    let index = index.ok_or(ExecError::MissingOperand {
                        op: "set_local",
                        operand: "index",
                    })?;
                    let init = init.as_deref().ok_or(ExecError::MissingOperand {
                        op: "set_local",
                        operand: "initializer",
                    })?;

                    let outcome = {
                        let mut child = frame.child(std::slice::from_ref(init));
                        self.execute(&mut child, depth + 1)?
                    };

                    match outcome {
                        Outcome::Value(value) => frame.locals.set(index, value)?,
                        Outcome::Empty => return Err(ExecError::EmptyInitializer { index }),
                        Outcome::Trapped => return Ok(Outcome::Trapped),
                    }
                }

                Instruction::Add => binary(frame, "i32.add", BinOp::Add)?,
                Instruction::Sub => binary(frame, "i32.sub", BinOp::Sub)?,
                Instruction::Mul => binary(frame, "i32.mul", BinOp::Mul)?,

                Instruction::Unknown => return Err(ExecError::UnknownInstruction),
            }

            if let Some(trace) = frame.trace {
                trace.on_instruction(depth, pc, instruction);
            }

            pc += 1;
        }

        Ok(match frame.values.pop() {
            Some(value) => Outcome::Value(value),
            None => Outcome::Empty,
        })
    }
}

/* ===================== Stack Helpers ===================== */

/// Pop two operands and push `lhs op rhs`
fn binary(frame: &mut StackFrame<'_>, name: &'static str, op: BinOp) -> Result<(), ExecError> {
    let (lhs, rhs) = pop2(&mut frame.values, name)?;
    frame.values.push(values::binop(rhs, lhs, op)?);
    Ok(())
}

/// Returns `(below, top)`
fn pop2(
    stack: &mut Vec<StackLocal>,
    name: &'static str,
) -> Result<(StackLocal, StackLocal), ExecError> {
    let at = stack
        .len()
        .checked_sub(2)
        .ok_or(ExecError::StackUnderflow {
            op: name,
            expected: 2,
            found: stack.len(),
        })?;
    let pair = stack.split_off(at);
    Ok((pair[0], pair[1]))
}
