// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Challenge binary: read (n4, n5, n6) from stdin, print the total.
//!
//! Output is the single decimal answer on stdout. Diagnostics go to stderr
//! and exit with a non-zero code; no numeric output is produced on bad
//! input.

use std::io;
use std::process::ExitCode;

use arrangement_sum::{read_counts, ArrangementAccumulator};

fn main() -> ExitCode {
    let (n4, n5, n6) = match read_counts(io::stdin().lock()) {
        Ok(counts) => counts,
        Err(error) => {
            eprintln!("arrsum: {}", error);
            return ExitCode::FAILURE;
        }
    };

    let mut accumulator = ArrangementAccumulator::new(n4, n5, n6);
    println!("{}", accumulator.total());
    ExitCode::SUCCESS
}
