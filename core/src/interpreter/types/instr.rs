//! Instruction set
//!
//! Instructions arrive already decoded, usually from JSON. Operands the
//! decoder may have left out are `Option`s; the engine rejects a missing one
//! as a fatal error instead of guessing a default.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One decoded instruction, tagged by its text-format operation name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "id")]
pub enum Instruction {
    #[serde(rename = "i32.const")]
    Const {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        value: Option<i64>,
    },

    #[serde(rename = "nop")]
    Nop,

    /// Runs `body` once in a child frame. There are no branch targets, so the
    /// body never repeats.
    #[serde(rename = "loop")]
    Loop {
        #[serde(default)]
        body: Vec<Instruction>,
    },

    #[serde(rename = "trap")]
    Trap,

    #[serde(rename = "get_local")]
    GetLocal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
    },

    /// Evaluates `init` in a child frame and stores its value
    #[serde(rename = "set_local")]
    SetLocal {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        init: Option<Box<Instruction>>,
    },

    #[serde(rename = "i32.add")]
    Add,

    #[serde(rename = "i32.sub")]
    Sub,

    #[serde(rename = "i32.mul")]
    Mul,

    /// Any operation name this instruction set does not know
    #[serde(other)]
    Unknown,
}

impl Instruction {
    pub fn i32_const(value: i64) -> Self {
        Instruction::Const { value: Some(value) }
    }

    pub fn loop_block(body: Vec<Instruction>) -> Self {
        Instruction::Loop { body }
    }

    pub fn get_local(index: usize) -> Self {
        Instruction::GetLocal { index: Some(index) }
    }

    pub fn set_local(index: usize, init: Instruction) -> Self {
        Instruction::SetLocal {
            index: Some(index),
            init: Some(Box::new(init)),
        }
    }

    /// Operation name as it appears in the text format
    pub fn name(&self) -> &'static str {
        match self {
            Instruction::Const { .. } => "i32.const",
            Instruction::Nop => "nop",
            Instruction::Loop { .. } => "loop",
            Instruction::Trap => "trap",
            Instruction::GetLocal { .. } => "get_local",
            Instruction::SetLocal { .. } => "set_local",
            Instruction::Add => "i32.add",
            Instruction::Sub => "i32.sub",
            Instruction::Mul => "i32.mul",
            Instruction::Unknown => "unknown",
        }
    }

    /// Number of instructions in this tree, counting nested ones
    pub fn size(&self) -> usize {
        match self {
            Instruction::Loop { body } => 1 + body.iter().map(Instruction::size).sum::<usize>(),
            Instruction::SetLocal {
                init: Some(init), ..
            } => 1 + init.size(),
            _ => 1,
        }
    }
}

/* ===================== Text Rendering ===================== */

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Const { value: Some(v) } => write!(f, "i32.const {}", v),
            Instruction::GetLocal { index: Some(i) } => write!(f, "get_local {}", i),
            Instruction::Loop { body } => {
                f.write_str("(loop")?;
                for instr in body {
                    write!(f, " {}", instr)?;
                }
                f.write_str(")")
            }
            Instruction::SetLocal { index, init } => {
                f.write_str("(set_local")?;
                if let Some(i) = index {
                    write!(f, " {}", i)?;
                }
                match init.as_deref() {
                    Some(instr @ Instruction::Loop { .. })
                    | Some(instr @ Instruction::SetLocal { .. }) => write!(f, " {}", instr)?,
                    Some(instr) => write!(f, " ({})", instr)?,
                    None => {}
                }
                f.write_str(")")
            }
            other => f.write_str(other.name()),
        }
    }
}
