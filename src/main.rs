//! Fund Loads Engine CLI
//!
//! Command-line interface for deciding fund-load events under velocity
//! limits.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- input.txt > output.txt
//! cargo run -- --daily-limit 1000 --daily-count 2 input.txt
//! ```
//!
//! The program reads one JSON-encoded load event per input line, evaluates
//! each against the per-day and per-week limits, and writes one decision
//! line per event to stdout. Dropped events (conflicts, malformed lines)
//! are reported on stderr.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Fatal error (missing or unreadable input file)

use fund_loads_engine::cli;
use fund_loads_engine::io::JsonLineReader;
use fund_loads_engine::pipeline::Pipeline;
use std::process;

fn main() {
    let args = cli::parse_args();

    let reader = match JsonLineReader::open(&args.input_file) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut pipeline = Pipeline::with_limits(args.to_limits());

    // Decisions go to stdout, diagnostics to stderr.
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    if let Err(e) = pipeline.run(reader, &mut stdout.lock(), &mut stderr.lock()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
