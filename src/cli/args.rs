use crate::core::feed::FeedConfig;
use crate::core::selection::DEFAULT_LIMIT;
use clap::Parser;
use std::path::PathBuf;

/// Show the latest executed bank operations with masked card and account numbers
#[derive(Parser, Debug)]
#[command(name = "operation-feed")]
#[command(about = "Show the latest executed bank operations", long_about = None)]
pub struct CliArgs {
    /// Input JSON file containing an array of operation records
    #[arg(
        value_name = "INPUT",
        default_value = "operations.json",
        help = "Path to the input JSON file"
    )]
    pub input_file: PathBuf,

    /// Maximum number of operations to display
    #[arg(
        short = 'n',
        long = "limit",
        value_name = "COUNT",
        default_value_t = DEFAULT_LIMIT,
        help = "Number of most recent executed operations to show"
    )]
    pub limit: usize,

    /// Log filter used when RUST_LOG is not set
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "warn",
        help = "Log level for diagnostics on stderr (overridden by RUST_LOG)"
    )]
    pub log_level: String,
}

impl CliArgs {
    /// Create a FeedConfig from CLI arguments
    pub fn to_feed_config(&self) -> FeedConfig {
        FeedConfig::new(self.limit)
    }
}
