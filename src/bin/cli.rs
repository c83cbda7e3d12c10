//! primdb - CLI Client

use std::env;

use anyhow::Context;
use primdb::shell::{help_lines, Session, ShellConfig};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

/// Print command-line usage
fn print_usage() {
    println!(
        r#"Usage: primdb [--db <path>]

Options:
  -d, --db <path>    Catalog file (default: database.json)
  -h, --help         Show this message

Set RUST_LOG (e.g. RUST_LOG=debug) for diagnostic logging on stderr."#
    );
}

/// Install the log subscriber; logs go to stderr
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Main REPL loop
fn run_repl(config: ShellConfig) -> anyhow::Result<()> {
    let session = Session::new(&config);
    let mut editor = DefaultEditor::new().context("failed to initialise line editor")?;

    println!("Welcome to primdb!");
    for line in help_lines() {
        println!("{}", line);
    }

    loop {
        match editor.readline(&config.prompt) {
            Ok(line) => {
                if config.history && !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                let response = session.handle_line(&line);
                for out in &response.lines {
                    println!("{}", out);
                }
                if response.exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("\nExiting...");
                break;
            }
            Err(e) => return Err(e).context("failed to read input"),
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    run_repl(ShellConfig::from_args(&args))
}
