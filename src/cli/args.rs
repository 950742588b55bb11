//! CLI argument definitions

use clap::{ArgAction, Parser};
use std::collections::BTreeSet;

/// FSM-based mod-N calculator for custom alphabets.
///
/// Reads INPUT_STRING as a number whose digits are the alphabet's symbols in
/// sorted order and prints its remainder modulo MODULUS.
#[derive(Parser, Debug, Clone)]
#[command(name = "fsm-cli")]
#[command(version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Input string to compute remainder
    pub input_string: String,

    /// Modulus N
    pub modulus: i64,

    /// Comma-separated alphabet of single-character symbols
    #[arg(long, default_value = "0,1", value_parser = parse_alphabet)]
    pub alphabet: BTreeSet<char>,

    /// Also print the synthesized machine as a JSON snapshot
    #[arg(long)]
    pub emit_table: bool,

    /// Increase logging verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Split a comma-separated alphabet into a set of symbols.
///
/// Duplicates collapse and empty pieces are skipped, so `""` is the empty
/// alphabet. A piece longer than one character is rejected.
pub fn parse_alphabet(raw: &str) -> Result<BTreeSet<char>, String> {
    raw.split(',')
        .filter(|piece| !piece.is_empty())
        .map(|piece| {
            let mut chars = piece.chars();
            match (chars.next(), chars.next()) {
                (Some(symbol), None) => Ok(symbol),
                _ => Err(format!(
                    "alphabet symbols must be single characters, got {piece:?}"
                )),
            }
        })
        .collect()
}
