extern crate deskcalc_core;

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use deskcalc_core::calculator::{format_value, CalculatorState};
use deskcalc_core::keymap::parse_keys;

/// A desk calculator driven by key labels.
///
/// Each line holds whitespace separated keys, such as `2 + 3 =`, `MS` or
/// `sqrt`. The lines `history` and `memory` show the history panel and the
/// memory register.
#[derive(Parser)]
#[command(name = "deskcalc")]
struct Args {
    /// Log every transition on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the banner
    #[arg(short, long)]
    quiet: bool,

    /// Apply these keys and exit instead of reading stdin
    #[arg(short, long, allow_hyphen_values = true)]
    keys: Option<String>,
}

fn print_state(out: &mut impl Write, state: &CalculatorState) -> io::Result<()> {
    writeln!(out, "{:>24}", state.expression())?;
    writeln!(out, "{:>24}", state.display())
}

fn print_history(out: &mut impl Write, state: &CalculatorState) -> io::Result<()> {
    if state.history().is_empty() {
        return writeln!(out, "(no history)");
    }
    for entry in state.history() {
        writeln!(out, "{}", entry)?;
    }
    Ok(())
}

/// Handles one line of input, returning the next state.
fn handle_line(
    out: &mut impl Write,
    state: CalculatorState,
    line: &str,
) -> io::Result<CalculatorState> {
    match line.trim() {
        "" => Ok(state),
        "history" => {
            print_history(out, &state)?;
            Ok(state)
        }
        "memory" => {
            writeln!(out, "M = {}", format_value(state.memory()))?;
            Ok(state)
        }
        keys => match parse_keys(keys) {
            Ok(inputs) => {
                let state = inputs
                    .into_iter()
                    .fold(state, |state, input| state.apply(input));
                print_state(out, &state)?;
                Ok(state)
            }
            Err(err) => {
                writeln!(out, "{}", err)?;
                Ok(state)
            }
        },
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "deskcalc_core=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut state = CalculatorState::new();

    if let Some(keys) = args.keys {
        handle_line(&mut out, state, &keys).context("cannot write to stdout")?;
        return Ok(());
    }

    if !args.quiet {
        writeln!(out, "deskcalc: type keys like `2 + 3 =`, or `history`; Ctrl-D quits")?;
        print_state(&mut out, &state)?;
    }

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("cannot read from stdin")?;
        state = handle_line(&mut out, state, &line).context("cannot write to stdout")?;
        out.flush()?;
    }

    info!(evaluations = state.history().len(), "session ended");
    Ok(())
}
