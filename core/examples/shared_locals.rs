//! Run a small function body against a locals store owned by the caller
//!
//! ```bash
//! cargo run --example shared_locals
//! ```

use kernel_core::interpreter::{Engine, Instruction, Limits, Locals, StackLocal, TraceLog};

fn main() {
    // locals[1] = locals[0] * 3, computed inside a nested block
    let code = vec![
        Instruction::loop_block(vec![Instruction::set_local(1, Instruction::get_local(0))]),
        Instruction::get_local(1),
        Instruction::i32_const(3),
        Instruction::Mul,
    ];

    let mut locals = Locals::from_values([StackLocal::I32(14), StackLocal::I32(0)]);
    let log = TraceLog::new();
    let engine = Engine::new(Limits { max_depth: 8 });

    match engine.run(&code, &mut locals, Some(&log)) {
        Ok(outcome) => println!("{}", outcome),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    for event in log.into_events() {
        println!("  [depth {}] {:>3}: {}", event.depth, event.pc, event.instruction);
    }
    println!("locals: {:?}", locals.iter().collect::<Vec<_>>());
}
