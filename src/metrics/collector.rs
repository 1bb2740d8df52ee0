use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::Instant;

use super::stats;
use super::{RunReport, RunSummary, Sample};

const MS_PER_SEC: f64 = 1_000.0;

/// Spawn the single consumer of probe samples.
///
/// Workers report each `Sample` over the channel in completion order;
/// aggregation is commutative, so arrival order does not matter. The task
/// publishes the collected count on `progress_tx` after each sample and
/// finalizes the report once every sender has been dropped, which is the
/// run's completion barrier.
#[must_use]
pub fn setup_sample_collector(
    total_requests: u64,
    run_start: Instant,
    mut sample_rx: mpsc::Receiver<Sample>,
    progress_tx: watch::Sender<u64>,
) -> JoinHandle<RunReport> {
    tokio::spawn(async move {
        let mut latencies_ms: Vec<f64> = Vec::new();
        let mut collected: u64 = 0;

        while let Some(sample) = sample_rx.recv().await {
            collected = collected.saturating_add(1);
            if let Some(latency) = sample.latency {
                latencies_ms.push(latency.as_secs_f64() * MS_PER_SEC);
            }
            drop(progress_tx.send(collected));
        }

        finalize(total_requests, run_start.elapsed(), &latencies_ms)
    })
}

pub(super) fn finalize(
    total_requests: u64,
    duration: Duration,
    latencies_ms: &[f64],
) -> RunReport {
    let successful = u64::try_from(latencies_ms.len()).unwrap_or(u64::MAX);
    if successful == 0 {
        return RunReport::AllFailed { total_requests };
    }

    let min = latencies_ms.iter().copied().fold(f64::INFINITY, f64::min);
    let max = latencies_ms.iter().copied().fold(0.0_f64, f64::max);
    let duration_secs = duration.as_secs_f64();
    let throughput = if duration_secs > 0.0 {
        successful as f64 / duration_secs
    } else {
        0.0
    };
    let success_rate = if total_requests > 0 {
        successful as f64 * 100.0 / total_requests as f64
    } else {
        0.0
    };

    RunReport::Summary(RunSummary {
        total_requests,
        successful_requests: successful,
        failed_requests: total_requests.saturating_sub(successful),
        avg_latency_ms: stats::mean(latencies_ms),
        min_latency_ms: min,
        max_latency_ms: max,
        stdev_latency_ms: stats::sample_stdev(latencies_ms),
        success_rate_percent: success_rate,
        duration_secs,
        throughput_per_sec: throughput,
    })
}
