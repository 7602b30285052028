//! Function bodies on disk
//!
//! A function body is stored as JSON:
//!
//! ```json
//! {
//!   "params": [{ "t": "i32", "v": 10 }],
//!   "locals": ["i32"],
//!   "code": [
//!     { "id": "get_local", "index": 0 },
//!     { "id": "i32.const", "value": 5 },
//!     { "id": "i32.add" }
//!   ]
//! }
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::interpreter::{Instruction, Locals, StackLocal, ValType};

/// A decoded function body plus the values its locals start with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionBody {
    /// Argument values, stored in the first local slots
    #[serde(default)]
    pub params: Vec<StackLocal>,

    /// Declared locals, zero-initialized after the params
    #[serde(default)]
    pub locals: Vec<ValType>,

    pub code: Vec<Instruction>,
}

impl FunctionBody {
    pub fn from_json(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("Failed to parse function body")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_json(&source).with_context(|| format!("Invalid function body in {}", path.display()))
    }

    /// Build the locals store for one activation of this body
    pub fn locals_store(&self) -> Locals {
        Locals::from_values(
            self.params
                .iter()
                .copied()
                .chain(self.locals.iter().map(|ty| ty.zero())),
        )
    }

    /// Instruction count including nested instructions
    pub fn instruction_count(&self) -> usize {
        self.code.iter().map(Instruction::size).sum()
    }
}
