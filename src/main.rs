//! Combo Finder CLI
//!
//! Reads open line items from CSV and prints every combination of them
//! that adds up exactly to the given target amount.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- items.csv 125.40 > matches.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use combo_finder::{Amount, ComboError, Reconciler, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use std::str::FromStr;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(ComboError::MissingArgument);
    }

    let input_path = &args[1];
    let target = Amount::from_str(&args[2])
        .map_err(|_| ComboError::InvalidTarget(args[2].clone()))?;

    let file = File::open(input_path)?;
    let reader = BufReader::new(file);

    let mut reconciler = Reconciler::new();
    reconciler.load_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    reconciler.write_output(target, handle)?;

    Ok(())
}
