pub mod cli;
pub mod config;
pub mod interpreter;
pub mod program;

// Re-export main types
pub use interpreter::{
    execute, Engine, ExecError, Instruction, Limits, Locals, Outcome, StackFrame, StackLocal,
    TraceHook, ValType,
};
