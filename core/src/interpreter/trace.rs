//! Trace hooks
//!
//! A hook observes each instruction after it executed successfully. It only
//! receives the depth, the program counter and the instruction, so it has no
//! way to reach frame state.

use super::types::Instruction;
use std::cell::RefCell;

/// Observer called after every successfully executed instruction
pub trait TraceHook {
    /// - `depth`: nesting depth of the frame (root is 0)
    /// - `pc`: index of the instruction within that frame's code
    fn on_instruction(&self, depth: usize, pc: usize, instruction: &Instruction);
}

impl<F> TraceHook for F
where
    F: Fn(usize, usize, &Instruction),
{
    fn on_instruction(&self, depth: usize, pc: usize, instruction: &Instruction) {
        self(depth, pc, instruction)
    }
}

/* ===================== Built-in Hooks ===================== */

/// Emits one `tracing` event per instruction at TRACE level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingHook;

impl TraceHook for TracingHook {
    fn on_instruction(&self, depth: usize, pc: usize, instruction: &Instruction) {
        tracing::trace!(depth, pc, instr = %instruction, "executed");
    }
}

/// A recorded trace entry
#[derive(Debug, Clone, PartialEq)]
pub struct TraceEvent {
    pub depth: usize,
    pub pc: usize,
    pub instruction: Instruction,
}

/// Collects every event in execution order
#[derive(Debug, Default)]
pub struct TraceLog {
    events: RefCell<Vec<TraceEvent>>,
}

impl TraceLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_events(self) -> Vec<TraceEvent> {
        self.events.into_inner()
    }
}

impl TraceHook for TraceLog {
    fn on_instruction(&self, depth: usize, pc: usize, instruction: &Instruction) {
        self.events.borrow_mut().push(TraceEvent {
            depth,
            pc,
            instruction: instruction.clone(),
        });
    }
}
