//! distill - one-shot generator for a reduced-surface wrapper action.
//!
//! Exit codes mirror the core error scheme: 1 for validation failures
//! (faults, bad manifest, stale outputs), 2 for IO, 3 for missing
//! input files.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]

mod cli;
mod commands;

use std::process;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();
    if let Err(err) = run() {
        process::exit(report_error(&err));
    }
}

fn run() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    match matches.subcommand() {
        Some(("generate", sub_m)) => commands::generate::run(sub_m),
        _ => {
            cli::build_cli().print_help()?;
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Print the error for humans and return the process exit code.
///
/// The fault list gets its own format: the whole point of fault
/// accumulation is that one run shows every mismatch, so each fault is
/// listed on its own line.
fn report_error(err: &anyhow::Error) -> i32 {
    if let Some(core) = err.downcast_ref::<distill_core::Error>() {
        if let distill_core::Error::Faults { faults } = core {
            eprintln!("Faults preventing saves:");
            for fault in faults {
                eprintln!("* {fault}");
            }
        } else {
            eprintln!("Error: {core}");
        }
        return core.exit_code();
    }
    eprintln!("Error: {err:#}");
    2
}
