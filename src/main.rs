//! Operation Feed CLI
//!
//! Command-line interface for showing the latest executed bank operations
//! from a JSON file.
//!
//! # Usage
//!
//! ```bash
//! cargo run                                # reads operations.json, shows 5 operations
//! cargo run -- data/operations.json -n 10
//! RUST_LOG=debug cargo run -- operations.json
//! ```
//!
//! Formatted blocks go to stdout; diagnostics go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success (including when no operation is shown)
//! - 1: Error (file not found, malformed JSON, invalid record, etc.)

use operation_feed::cli;
use operation_feed::{JsonFileSource, OperationFeed};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let source = JsonFileSource::new(&args.input_file);
    let feed = OperationFeed::new(args.to_feed_config());

    let mut output = std::io::stdout().lock();
    if let Err(e) = feed.run(&source, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
