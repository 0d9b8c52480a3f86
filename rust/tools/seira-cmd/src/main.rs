use std::process::ExitCode;

use clap::{Parser, Subcommand};
use seira_common::error::{Error, ErrorKind};

mod commands;

#[derive(Parser)]
#[command(name = "seira-cmd")]
#[command(about = "Command-line utility for Seira sequence operations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a byte sequence from the given text and render it
    Render {
        /// Separator inserted between rendered elements
        #[arg(short, long, default_value = "")]
        separator: String,

        /// Text to render; must not contain an interior NUL
        #[arg(default_value = "Hello world")]
        text: String,
    },

    /// Exercise the sequence containers end to end
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render { separator, text } => commands::render::run(text, separator),
        Commands::Demo => commands::demo::run(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report_failure(&error),
    }
}

/// Reports a failure and maps it to the process exit code: allocation
/// failures exit with 1 after the fixed out-of-memory diagnostic, everything
/// else exits with 2.
fn report_failure(error: &Error) -> ExitCode {
    match error.kind() {
        ErrorKind::Allocation { .. } => eprintln!("out of memory"),
        _ => eprintln!("error: {error}"),
    }
    ExitCode::from(failure_exit_code(error))
}

fn failure_exit_code(error: &Error) -> u8 {
    match error.kind() {
        ErrorKind::Allocation { .. } => 1,
        _ => 2,
    }
}
