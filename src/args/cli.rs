use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_positive_u64, parse_positive_usize};
use super::types::{PositiveU64, PositiveUsize};

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Concurrent HTTP latency meter - fires a batch of GET probes against a URL and reports aggregate latency statistics."
)]
pub struct ProbeArgs {
    /// Target URL to probe (https:// and www. are added when missing)
    pub url: String,

    /// Total number of requests to issue
    #[arg(
        long = "num-tests",
        short = 'n',
        alias = "num_tests",
        default_value = "100",
        value_parser = parse_positive_u64
    )]
    pub num_tests: PositiveU64,

    /// Number of concurrent workers
    #[arg(
        long = "workers",
        short = 'w',
        default_value = "10",
        value_parser = parse_positive_usize
    )]
    pub workers: PositiveUsize,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        default_value = "5s",
        value_parser = parse_duration_arg
    )]
    pub timeout: Duration,

    /// Print the summary as JSON instead of text
    #[arg(long = "json")]
    pub json: bool,

    /// Disable the progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Disable colored progress output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
