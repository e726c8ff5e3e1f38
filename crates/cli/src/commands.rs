//! Clap command tree definition.

use clap::{Arg, ArgAction, Command};

/// Build the complete CLI command tree.
pub fn build_cli() -> Command {
    Command::new("kvharness")
        .about("Workload generator and reference oracle for key-value stores")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress at info level (RUST_LOG overrides)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(build_generate())
        .subcommand(build_oracle())
        .subcommand(build_check())
}

fn build_generate() -> Command {
    Command::new("generate")
        .about("Generate an operation stream")
        .long_about(
            "Generate an operation stream. Without --count or --config the \
             count is read from stdin.",
        )
        .arg(
            Arg::new("count")
                .long("count")
                .allow_negative_numbers(true)
                .short('n')
                .help("Number of operations to generate"),
        )
        .arg(
            Arg::new("length")
                .long("length")
                .allow_negative_numbers(true)
                .short('l')
                .help("Length of generated keys and values (default: 10)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .allow_negative_numbers(true)
                .help("Seed for a reproducible stream"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Workload config file (TOML); flags override its values"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the stream to a file instead of stdout"),
        )
}

fn build_oracle() -> Command {
    Command::new("oracle")
        .about("Replay an operation stream and print the expected output")
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .help("Operation stream file (default: stdin)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Write the expected output to a file instead of stdout"),
        )
}

fn build_check() -> Command {
    Command::new("check")
        .about("Score an implementation's output against the oracle")
        .arg(
            Arg::new("stream")
                .long("stream")
                .required(true)
                .help("Operation stream the implementation was given"),
        )
        .arg(
            Arg::new("actual")
                .long("actual")
                .required(true)
                .help("Output produced by the implementation"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the verdict as JSON")
                .action(ArgAction::SetTrue),
        )
}
