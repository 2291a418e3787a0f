// SPDX-License-Identifier: MIT
//
// w-kit — a terminal toolbox of stateless web-dev utilities.
//
// This is the binary that wires the crates together:
//
//   w-color → hex parsing, WCAG luminance and contrast ratio
//   w-json  → JSON pretty-printing
//   w-clip  → clipboard capability (OSC 52)
//
// Each invocation is one independent run of one tool:
//
//   arg/stdin → tool::contrast | tool::json → stdout
//                                           → clipboard (opt-in, best effort)
//
// Results and diagnostics produced BY a tool go to stdout — they are the
// tool's output. Acknowledgements and failures of the toolbox itself
// (clipboard, I/O) go to stderr or the log, never into the output stream.

mod tool;

use std::io::{self, IsTerminal, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use w_clip::Osc52;

use crate::tool::ToolOutput;

/// Stateless text utilities for web work: WCAG contrast checking and
/// JSON formatting.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Copy the result to the system clipboard (OSC 52).
    #[arg(short, long, global = true)]
    copy: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check the WCAG contrast ratio of two hex colors.
    ///
    /// INPUT is two comma-separated colors, e.g. "#FFFFFF, #000000".
    Contrast {
        /// The color pair; reads stdin when omitted or "-".
        input: Option<String>,
    },
    /// Pretty-print JSON with two-space indentation.
    Json {
        /// The JSON text; reads stdin when omitted or "-".
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let output = match &args.command {
        Command::Contrast { input } => tool::contrast(&read_input(input.as_deref())?),
        Command::Json { input } => tool::json(&read_input(input.as_deref())?),
    };

    println!("{}", output.text);

    if args.copy {
        copy_output(&output);
    }

    Ok(())
}

/// Resolve the tool input: the positional argument, or stdin when it is
/// absent or `-`.
fn read_input(arg: Option<&str>) -> Result<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            if io::stdin().is_terminal() {
                tracing::debug!("reading input from interactive stdin");
            }
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

/// Best-effort clipboard copy of a tool result.
///
/// Honors the output's copy guard, acknowledges success on stderr, and
/// reports failure as a warning — a dead clipboard never fails the run.
fn copy_output(output: &ToolOutput) {
    let mut clip = match Osc52::stdout() {
        Ok(clip) => clip,
        Err(e) => {
            tracing::warn!("{e}");
            return;
        }
    };
    match tool::copy_if_enabled(output, &mut clip) {
        Ok(true) => eprintln!("Copied to clipboard."),
        Ok(false) => tracing::warn!("copy skipped: this result is not copyable"),
        Err(e) => tracing::warn!("{e}"),
    }
}
