//! Tests for trace hooks

use super::helpers::{i32v, run_with};
use crate::interpreter::{
    execute, Engine, Instruction, Locals, Outcome, StackFrame, TraceEvent, TraceLog,
    TracingHook,
};
use maplit::hashmap;
use std::cell::RefCell;
use std::collections::HashMap;

fn event(depth: usize, pc: usize, instruction: Instruction) -> TraceEvent {
    TraceEvent {
        depth,
        pc,
        instruction,
    }
}

/// Run `code` with a recording hook and return the outcome and events
fn traced(code: &[Instruction], locals: &mut Locals) -> (Outcome, Vec<TraceEvent>) {
    let log = TraceLog::new();
    let outcome = Engine::default()
        .run(code, locals, Some(&log))
        .expect("Execution failed");
    (outcome, log.into_events())
}

#[test]
fn test_child_events_come_before_parent_instruction() {
    let body = vec![Instruction::i32_const(1), Instruction::Nop];
    let code = vec![
        Instruction::loop_block(body.clone()),
        Instruction::i32_const(2),
    ];

    let (outcome, events) = traced(&code, &mut Locals::new(0));

    assert_eq!(outcome, Outcome::Value(i32v(2)));
    assert_eq!(
        events,
        vec![
            event(1, 0, Instruction::i32_const(1)),
            event(1, 1, Instruction::Nop),
            event(0, 0, Instruction::loop_block(body)),
            event(0, 1, Instruction::i32_const(2)),
        ]
    );
}

#[test]
fn test_set_local_initializer_is_traced_one_level_down() {
    let code = vec![
        Instruction::set_local(0, Instruction::i32_const(9)),
        Instruction::get_local(0),
    ];

    let (_, events) = traced(&code, &mut Locals::new(1));

    assert_eq!(
        events,
        vec![
            event(1, 0, Instruction::i32_const(9)),
            event(0, 0, Instruction::set_local(0, Instruction::i32_const(9))),
            event(0, 1, Instruction::get_local(0)),
        ]
    );
}

#[test]
fn test_trap_and_later_instructions_are_not_traced() {
    let code = vec![
        Instruction::i32_const(3),
        Instruction::loop_block(vec![
            Instruction::Nop,
            Instruction::Trap,
            Instruction::i32_const(1),
        ]),
        Instruction::i32_const(1),
    ];

    let (outcome, events) = traced(&code, &mut Locals::new(0));

    assert_eq!(outcome, Outcome::Trapped);
    assert_eq!(
        events,
        vec![
            event(0, 0, Instruction::i32_const(3)),
            event(1, 0, Instruction::Nop),
        ]
    );
}

#[test]
fn test_failing_instruction_is_not_traced() {
    let code = vec![Instruction::i32_const(1), Instruction::Add];
    let log = TraceLog::new();
    let mut locals = Locals::new(0);

    let result = Engine::default().run(&code, &mut locals, Some(&log));

    assert!(result.is_err());
    assert_eq!(log.into_events(), vec![event(0, 0, Instruction::i32_const(1))]);
}

#[test]
fn test_closure_hook_sees_every_depth() {
    let code = vec![
        Instruction::Nop,
        Instruction::loop_block(vec![
            Instruction::Nop,
            Instruction::loop_block(vec![Instruction::Nop]),
        ]),
        Instruction::Nop,
    ];
    let counts = RefCell::new(HashMap::new());
    let hook = |depth: usize, _pc: usize, _instr: &Instruction| {
        *counts.borrow_mut().entry(depth).or_insert(0) += 1;
    };

    let mut locals = Locals::new(0);
    let mut frame = StackFrame::new(&code, &mut locals).with_trace(&hook);
    assert_eq!(execute(&mut frame, 0), Ok(Outcome::Empty));

    assert_eq!(counts.into_inner(), hashmap! { 0 => 3, 1 => 2, 2 => 1 });
}

#[test]
fn test_tracing_hook_does_not_change_outcome() {
    let code = vec![
        Instruction::set_local(0, Instruction::i32_const(4)),
        Instruction::get_local(0),
        Instruction::i32_const(5),
        Instruction::Mul,
    ];
    let mut traced_locals = Locals::new(1);
    let mut plain_locals = Locals::new(1);

    let with_hook = Engine::default().run(&code, &mut traced_locals, Some(&TracingHook));
    let without_hook = run_with(&code, &mut plain_locals);

    assert_eq!(with_hook, Ok(Outcome::Value(i32v(20))));
    assert_eq!(with_hook, without_hook);
    assert_eq!(traced_locals, plain_locals);
}
