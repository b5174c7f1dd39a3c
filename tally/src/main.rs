//! # tally
//!
//! A CLI tool that prints a football league standings table from a list of
//! match results.
//!
//! ## Overview
//!
//! tally is built on top of tallylib. It reads `Home;Away;outcome` lines from
//! a file or stdin and prints the ranked table to stdout.
//!
//! ## Usage
//!
//! ```bash
//! # Tally a results file
//! tally results.txt
//!
//! # Read from stdin
//! cat results.txt | tally
//!
//! # Comma-separated input with % comments
//! tally results.csv --delimiter , --comment %
//!
//! # Output as JSON
//! tally results.txt --output json
//!
//! # Log pipeline stages to stderr
//! tally results.txt -v
//! ```

mod render;

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use console::style;
use tallylib::ParseOptions;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use render::{render_standings, OutputMode};

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("tally")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Print a league standings table from match results")
        .arg(
            Arg::new("file")
                .help("Results file, one 'Home;Away;outcome' per line ('-' for stdin)")
                .default_value("-"),
        )
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .value_parser(value_parser!(char))
                .default_value(";")
                .help("Field separator within a record"),
        )
        .arg(
            Arg::new("comment")
                .short('c')
                .long("comment")
                .value_parser(value_parser!(char))
                .default_value("#")
                .help("Lines starting with this character are skipped"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count)
                .help("Log pipeline stages to stderr (-v debug, -vv trace)"),
        )
}

/// Install the stderr log subscriber. RUST_LOG wins over -v.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Build parse options from matches
fn parse_options(matches: &ArgMatches) -> ParseOptions {
    let mut options = ParseOptions::new();
    if let Some(&delimiter) = matches.get_one::<char>("delimiter") {
        options = options.delimiter(delimiter);
    }
    if let Some(&comment) = matches.get_one::<char>("comment") {
        options = options.comment(comment);
    }
    options
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        Ok(text)
    } else {
        std::fs::read_to_string(path).with_context(|| format!("failed to read '{}'", path))
    }
}

fn run(matches: &ArgMatches) -> anyhow::Result<()> {
    let path = matches
        .get_one::<String>("file")
        .map(|s| s.as_str())
        .unwrap_or("-");
    let mode: OutputMode = matches
        .get_one::<String>("output")
        .map(|s| s.parse::<OutputMode>())
        .transpose()
        .map_err(anyhow::Error::msg)?
        .unwrap_or_default();
    let options = parse_options(matches);
    debug!(path, ?mode, ?options, "starting tally");

    let text = read_input(path)?;
    let standings = tallylib::standings(&text, &options)
        .with_context(|| format!("could not tally '{}'", path))?;
    let rendered = render_standings(&standings, mode)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();
    init_logging(matches.get_count("verbose"));

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", style("Error:").for_stderr().red().bold(), e);
            ExitCode::FAILURE
        }
    }
}
