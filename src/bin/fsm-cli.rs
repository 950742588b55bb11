//! fsm-cli - remainder of a string-encoded number modulo N
//!
//! # Example
//!
//! ```bash
//! # 13 mod 3
//! fsm-cli 1101 3
//!
//! # Custom alphabet, digits assigned in sorted order (A=0, B=1, D=2)
//! fsm-cli ABD 3 --alphabet D,B,A
//!
//! # Dump the synthesized transition table, with debug logging on stderr
//! fsm-cli 1101 3 --emit-table -vv
//! ```

use clap::Parser;
use modfsm::cli::{init_logging, run, Cli};
use std::io;
use std::process;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    if let Err(e) = run(&cli, &mut stdout.lock()) {
        eprintln!("fsm-cli: failed to write output: {e}");
        process::exit(1);
    }
}
