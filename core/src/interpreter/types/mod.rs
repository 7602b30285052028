//! Type definitions for the interpreter
//!
//! - Instructions (Instruction)
//! - Execution results (Outcome)

pub mod instr;
pub mod outcome;

pub use instr::Instruction;
pub use outcome::Outcome;
