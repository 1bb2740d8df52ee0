use crate::error::AppResult;
use crate::metrics::{RunReport, RunSummary};

const ALL_FAILED_MESSAGE: &str = "All requests failed. Unable to calculate average latency.";

pub(crate) fn print_report(report: &RunReport, json: bool) -> AppResult<()> {
    match report {
        RunReport::Summary(summary) => {
            if json {
                println!("{}", serde_json::to_string_pretty(summary)?);
            } else {
                println!();
                for line in summary_lines(summary) {
                    println!("{}", line);
                }
            }
        }
        RunReport::AllFailed { total_requests } => {
            if json {
                let value = serde_json::json!({
                    "total_requests": total_requests,
                    "successful_requests": 0,
                });
                println!("{}", value);
            } else {
                println!();
                println!("{}", ALL_FAILED_MESSAGE);
            }
        }
    }
    Ok(())
}

fn summary_lines(summary: &RunSummary) -> Vec<String> {
    vec![
        format!(
            "Average Latency: {:.2} ms over {} successful tests.",
            summary.avg_latency_ms, summary.successful_requests
        ),
        format!("Min Latency: {:.2} ms", summary.min_latency_ms),
        format!("Max Latency: {:.2} ms", summary.max_latency_ms),
        format!(
            "Latency Standard Deviation: {:.2} ms",
            summary.stdev_latency_ms
        ),
        format!("Success Rate: {:.2}%", summary.success_rate_percent),
        format!(
            "Total Test Duration: {:.2} seconds",
            summary.duration_secs
        ),
        format!(
            "Throughput: {:.2} requests/second",
            summary.throughput_per_sec
        ),
    ]
}
