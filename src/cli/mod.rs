//! CLI interface for the mod-N calculator
//!
//! The binary is a thin shell over [`run`], which writes everything the user
//! sees to a caller-supplied writer so it can be exercised in tests.

pub mod args;

pub use args::{parse_alphabet, Cli};

use crate::mod_n::{build_mod_n_fsm, validate_input, ModNError};
use crate::snapshot::{MachineSnapshot, SnapshotError};
use std::io::{self, Write};
use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Failures of a single CLI evaluation.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    ModN(#[from] ModNError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Result of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub remainder: usize,
    /// Pretty JSON snapshot, present when `--emit-table` was given
    pub table: Option<String>,
}

/// Install a `tracing` subscriber writing to stderr.
///
/// With no `-v` flags the filter comes from `RUST_LOG`, falling back to
/// `warn`. Each `-v` raises this crate's level (info, then debug).
pub fn init_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("warn,modfsm=info"),
        _ => EnvFilter::new("warn,modfsm=debug"),
    };

    // A subscriber may already be installed (e.g. by an embedding test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Compute the remainder (and optionally the table) for parsed arguments.
///
/// One machine is built per call; with `--emit-table` the snapshot is taken
/// from that same machine, reset to its initial state.
pub fn evaluate(cli: &Cli) -> Result<Report, CliError> {
    let symbols: Vec<char> = cli.input_string.chars().collect();
    validate_input(&symbols, &cli.alphabet)?;

    let mut machine = build_mod_n_fsm(cli.modulus, cli.alphabet.iter().copied())?;
    let remainder = machine.remainder(&symbols).map_err(ModNError::from)?;
    debug!(remainder, "Evaluation complete");

    let table = if cli.emit_table {
        machine.reset();
        Some(MachineSnapshot::capture(&machine).to_json_pretty()?)
    } else {
        None
    };

    Ok(Report { remainder, table })
}

/// Evaluate `cli` and print the outcome to `out`.
///
/// Evaluation failures are reported as an `Error: <message>` line rather
/// than returned; only I/O errors on `out` propagate.
pub fn run(cli: &Cli, out: &mut impl Write) -> io::Result<()> {
    match evaluate(cli) {
        Ok(report) => {
            writeln!(
                out,
                "Remainder of {} mod {} = {}",
                cli.input_string, cli.modulus, report.remainder
            )?;
            if let Some(table) = report.table {
                writeln!(out, "{table}")?;
            }
        }
        Err(e) => writeln!(out, "Error: {e}")?,
    }
    Ok(())
}
