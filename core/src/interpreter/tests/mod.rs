//! Tests for the interpreter
//!
//! Organized by feature area

mod helpers;
mod operator_tests;
mod trace_tests;
