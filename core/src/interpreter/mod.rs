//! # Interpreter - Recursive Stack-Frame Executor
//!
//! Executes an already-decoded instruction sequence against a private value
//! stack and a locals store shared across one activation.
//!
//! ## Core Principles
//!
//! 1. **Recursion for nesting**: `loop` bodies and `set_local` initializers
//!    run in child frames through a recursive `execute()` call, bounded by
//!    [`Limits::max_depth`]
//! 2. **One locals store per activation**: child frames reborrow the root
//!    frame's [`Locals`], never copy them
//! 3. **Traps are outcomes, not errors**: [`Outcome::Trapped`] propagates
//!    cooperatively; [`ExecError`] is reserved for malformed input
//! 4. **Pure executor**: no I/O and no logging of its own; diagnostics go
//!    through an optional [`TraceHook`]

pub mod engine;
pub mod errors;
pub mod frame;
pub mod trace;
pub mod types;
pub mod values;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use engine::{execute, Engine, Limits};
pub use errors::ExecError;
pub use frame::{Locals, StackFrame};
pub use trace::{TraceEvent, TraceHook, TraceLog, TracingHook};
pub use types::{Instruction, Outcome};
pub use values::{binop, BinOp, StackLocal, ValType};
