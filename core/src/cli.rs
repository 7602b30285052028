use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::interpreter::{Engine, ExecError, Outcome, TraceEvent, TraceHook, TraceLog, TracingHook};
use crate::program::FunctionBody;

#[derive(Parser)]
#[command(name = "kernel")]
#[command(about = "Kernel - run stack-machine function bodies", long_about = None)]
pub struct Cli {
    /// Path to config file (overrides default search)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Execute a function body (JSON) and print its outcome
    Run {
        /// Function body file
        file: PathBuf,

        /// Print every executed instruction after the outcome
        #[arg(long)]
        trace: bool,

        /// Maximum nesting depth (overrides config)
        #[arg(long)]
        max_depth: Option<usize>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a function body in text form
    Show {
        /// Function body file
        file: PathBuf,
    },

    /// Print the effective configuration as TOML
    Config,
}

/// Outcome of one run plus the instructions it executed
#[derive(Debug)]
pub struct RunReport {
    pub outcome: Outcome,
    pub trace: Vec<TraceEvent>,
}

/// Run the CLI by parsing process arguments
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    run_cli_with_args(cli)
}

/// Run the CLI with provided arguments
pub fn run_cli_from_args(args: Vec<String>) -> Result<()> {
    let cli = Cli::parse_from(args);
    run_cli_with_args(cli)
}

fn run_cli_with_args(cli: Cli) -> Result<()> {
    let config_path = cli.config.map(PathBuf::from);

    match cli.command {
        Commands::Run {
            file,
            trace,
            max_depth,
            json,
        } => {
            let config = Config::builder()
                .config_path(config_path)
                .max_depth(max_depth)
                .build()
                .context("Failed to load configuration")?;

            let body = FunctionBody::load(&file)?;
            tracing::info!(
                file = %file.display(),
                instructions = body.instruction_count(),
                max_depth = config.engine.max_depth,
                "running function body"
            );

            let report = run_body(&body, &config, trace)
                .with_context(|| format!("Execution of {} failed", file.display()))?;
            tracing::debug!(outcome = %report.outcome, "run finished");

            if json {
                println!("{}", serde_json::to_string(&report.outcome)?);
            } else {
                println!("{}", report.outcome);
            }

            if trace {
                for event in &report.trace {
                    println!(
                        "  [depth {}] {:>3}: {}",
                        event.depth, event.pc, event.instruction
                    );
                }
            }
        }

        Commands::Show { file } => {
            let body = FunctionBody::load(&file)?;
            for (pc, instruction) in body.code.iter().enumerate() {
                println!("{:>3}: {}", pc, instruction);
            }
        }

        Commands::Config => {
            let config = Config::builder()
                .config_path(config_path)
                .build()
                .context("Failed to load configuration")?;
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

/// Execute `body` in a fresh activation
///
/// With `record` set, every executed instruction is collected into the report.
/// Otherwise, if `trace.enabled` is configured, instructions are logged through
/// `tracing` instead.
pub fn run_body(body: &FunctionBody, config: &Config, record: bool) -> Result<RunReport, ExecError> {
    let engine = Engine::new(config.limits());
    let mut locals = body.locals_store();
    let log = TraceLog::new();
    let tracing_hook = TracingHook;

    let hook: Option<&dyn TraceHook> = if record {
        Some(&log)
    } else if config.trace.enabled {
        Some(&tracing_hook)
    } else {
        None
    };

    let outcome = engine.run(&body.code, &mut locals, hook)?;

    Ok(RunReport {
        outcome,
        trace: log.into_events(),
    })
}
