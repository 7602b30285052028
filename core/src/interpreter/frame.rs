//! Stack frames and the locals store
//!
//! A frame is one activation of an instruction sequence: its code, a private
//! value stack, and a mutable borrow of the locals store. Child frames spawned
//! for nested blocks reborrow the same store, so a `set_local` inside a block
//! is visible to the enclosing frame once the block returns.

use super::errors::ExecError;
use super::trace::TraceHook;
use super::types::Instruction;
use super::values::StackLocal;
use std::fmt;

/* ===================== Locals ===================== */

/// Index-addressed local slots for one activation
///
/// Slots are sized and populated by whoever creates the root frame. Reading a
/// slot that was never populated is a fatal error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locals {
    slots: Vec<Option<StackLocal>>,
}

impl Locals {
    /// `size` unpopulated slots
    pub fn new(size: usize) -> Self {
        Self {
            slots: vec![None; size],
        }
    }

    /// One populated slot per value, in order
    pub fn from_values(values: impl IntoIterator<Item = StackLocal>) -> Self {
        Self {
            slots: values.into_iter().map(Some).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<StackLocal, ExecError> {
        match self.slots.get(index) {
            Some(Some(value)) => Ok(*value),
            Some(None) => Err(ExecError::UnpopulatedLocal { index }),
            None => Err(ExecError::LocalOutOfRange {
                index,
                len: self.slots.len(),
            }),
        }
    }

    /// Overwrite slot `index`
    pub fn set(&mut self, index: usize, value: StackLocal) -> Result<(), ExecError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(ExecError::LocalOutOfRange { index, len })?;
        *slot = Some(value);
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<StackLocal>> + '_ {
        self.slots.iter().copied()
    }
}

/* ===================== StackFrame ===================== */

/// One activation record
///
/// `code` and the `locals` borrow are fixed at construction; only the contents
/// of the locals store and the value stack change while the frame runs.
pub struct StackFrame<'a> {
    pub(crate) code: &'a [Instruction],
    pub(crate) locals: &'a mut Locals,
    pub(crate) values: Vec<StackLocal>,
    pub(crate) trace: Option<&'a dyn TraceHook>,
}

impl<'a> StackFrame<'a> {
    /// New frame over `code` with an empty value stack and no trace hook
    pub fn new(code: &'a [Instruction], locals: &'a mut Locals) -> Self {
        Self {
            code,
            locals,
            values: Vec::new(),
            trace: None,
        }
    }

    pub fn with_trace(mut self, trace: &'a dyn TraceHook) -> Self {
        self.trace = Some(trace);
        self
    }

    pub fn code(&self) -> &[Instruction] {
        self.code
    }

    pub fn locals(&self) -> &Locals {
        self.locals
    }

    /// Current value stack, bottom first
    pub fn values(&self) -> &[StackLocal] {
        &self.values
    }

    /// Frame for a nested sequence of the same activation
    ///
    /// Shares this frame's locals and trace hook; gets its own value stack.
    pub(crate) fn child<'b>(&'b mut self, code: &'b [Instruction]) -> StackFrame<'b> {
        StackFrame {
            code,
            locals: &mut *self.locals,
            values: Vec::new(),
            trace: self.trace,
        }
    }
}

impl fmt::Debug for StackFrame<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StackFrame")
            .field("code", &self.code)
            .field("locals", &self.locals)
            .field("values", &self.values)
            .field("traced", &self.trace.is_some())
            .finish()
    }
}
