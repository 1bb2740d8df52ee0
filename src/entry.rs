use clap::Parser;
use tokio::sync::{mpsc, watch};
use tokio::time::Instant;
use url::Url;

use crate::app::{progress, runner, summary};
use crate::args::{ProbeArgs, normalize_url};
use crate::error::{AppError, AppResult};
use crate::{http, logger, metrics};

const BANNER: &str = r"
 _         _                     _
| |  __ _ | |_  _ __ ___    ___ | |_   ___  _ __
| | / _` || __|| '_ ` _ \  / _ \| __| / _ \| '__|
| || (_| || |_ | | | | | ||  __/| |_ |  __/| |
|_| \__,_| \__||_| |_| |_| \___| \__| \___||_|

latmeter - HTTP latency measurement
";

/// Capacity of the sample channel between workers and the collector.
const SAMPLE_CHANNEL_CAPACITY: usize = 1024;

pub(crate) fn run() -> AppResult<()> {
    let args = ProbeArgs::parse();
    logger::init_logging(args.verbose);

    println!("{}", BANNER);

    let target = normalize_url(&args.url)?;
    println!("Testing URL: {}", target);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args, target))
}

async fn run_async(args: &ProbeArgs, target: Url) -> AppResult<()> {
    let client = http::build_client(args.timeout)?;
    let total = args.num_tests.get();

    let (sample_tx, sample_rx) = mpsc::channel(SAMPLE_CHANNEL_CAPACITY);
    let (progress_tx, progress_rx) = watch::channel(0u64);

    let run_start = Instant::now();
    let collector = metrics::setup_sample_collector(total, run_start, sample_rx, progress_tx);
    let progress_handle = if args.no_progress {
        None
    } else {
        Some(progress::setup_progress_indicator(
            total,
            progress_rx,
            args.no_color,
        ))
    };

    let probe_fn = move || {
        let client = client.clone();
        let target = target.clone();
        async move { http::execute_probe(&client, &target).await }
    };
    let dispatcher = runner::dispatch_probes(total, args.workers.get(), sample_tx, probe_fn);

    dispatcher
        .await
        .map_err(|err| AppError::Message(format!("Probe dispatcher failed: {}", err)))?;
    let report = collector
        .await
        .map_err(|err| AppError::Message(format!("Sample collector failed: {}", err)))?;

    if let Some(handle) = progress_handle {
        drop(handle.await);
    }

    summary::print_report(&report, args.json)
}
