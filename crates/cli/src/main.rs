//! kvharness CLI: generate workloads, replay them through the oracle, and
//! score an implementation's output.
//!
//! - `kvharness generate -n 1000 --seed 42 > stream.txt`
//! - `kvharness oracle < stream.txt > expected.txt`
//! - `kvharness check --stream stream.txt --actual actual.txt`
//!
//! Exit codes: 0 on success or a passing check, 1 on a failing check, 2 on
//! any error. Errors are reported before anything is written to stdout.

mod commands;
mod format;
mod parse;

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::process;

use kvharness_core::{decode_results, decode_stream, encode_results, Result};
use kvharness_oracle::{replay, verify};
use kvharness_workload::generate;
use tracing::info;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{format_error, format_verdict, OutputMode};
use parse::{matches_to_action, parse_count, CliAction, GeneratePlan};

const EXIT_CHECK_FAILED: i32 = 1;
const EXIT_ERROR: i32 = 2;

const COUNT_PROMPT: &str = "Enter the number of requests to generate: ";

fn main() {
    let matches = build_cli().get_matches();
    init_logging(matches.get_flag("verbose"));

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => {
            eprintln!("{}", format_error(&e, OutputMode::Human));
            process::exit(EXIT_ERROR);
        }
    };

    let mode = match &action {
        CliAction::Check { json: true, .. } => OutputMode::Json,
        _ => OutputMode::Human,
    };

    match run(action) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("{}", format_error(&e, mode));
            process::exit(EXIT_ERROR);
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(action: CliAction) -> Result<i32> {
    match action {
        CliAction::Generate(plan) => run_generate(plan),
        CliAction::Oracle { input, output } => {
            let stream = read_input(input.as_deref())?;
            let ops = decode_stream(&stream)?;
            let results = replay(&ops);
            write_output(output.as_deref(), &encode_results(&results))?;
            Ok(0)
        }
        CliAction::Check {
            stream,
            actual,
            json,
        } => {
            let ops = decode_stream(&fs::read_to_string(&stream)?)?;
            let actual = decode_results(&fs::read_to_string(&actual)?)?;
            let verdict = verify(&replay(&ops), &actual);
            let mode = if json {
                OutputMode::Json
            } else {
                OutputMode::Human
            };
            println!("{}", format_verdict(&verdict, mode));
            Ok(if verdict.passed() { 0 } else { EXIT_CHECK_FAILED })
        }
    }
}

fn run_generate(plan: GeneratePlan) -> Result<i32> {
    let output = plan.output.clone();
    if plan.needs_count() {
        info!(target: "kvharness::cli", "No --count or --config given, reading count from stdin");
    }
    let config = plan.resolve(prompt_count)?;
    let workload = generate(&config)?;
    info!(
        target: "kvharness::cli",
        seed = workload.seed,
        "Re-run with --seed {} to reproduce this stream", workload.seed
    );
    write_output(output.as_deref(), &workload.encode()?)?;
    Ok(0)
}

/// Ask for the request count on stderr and read it from stdin.
fn prompt_count() -> Result<usize> {
    eprintln!("{}", COUNT_PROMPT);
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    parse_count(&line)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            io::stdin().lock().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, content)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
