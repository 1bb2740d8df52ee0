use std::time::Duration;

use serde::Serialize;

/// One probe outcome. A failed request carries no latency and no cause
/// detail; every failure mode looks the same past this boundary.
#[derive(Clone, Copy, Debug)]
pub struct Sample {
    pub latency: Option<Duration>,
}

impl Sample {
    #[must_use]
    pub const fn success(latency: Duration) -> Self {
        Self {
            latency: Some(latency),
        }
    }

    #[must_use]
    pub const fn failure() -> Self {
        Self { latency: None }
    }

    #[must_use]
    pub const fn is_success(self) -> bool {
        self.latency.is_some()
    }
}

/// Aggregate statistics over the successful probes of one run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total_requests: u64,
    pub successful_requests: u64,
    pub failed_requests: u64,
    pub avg_latency_ms: f64,
    pub min_latency_ms: f64,
    pub max_latency_ms: f64,
    pub stdev_latency_ms: f64,
    pub success_rate_percent: f64,
    pub duration_secs: f64,
    pub throughput_per_sec: f64,
}

/// Final outcome of a run. A run with zero successful probes produces no
/// numeric summary at all.
#[derive(Debug, Clone)]
pub enum RunReport {
    Summary(RunSummary),
    AllFailed { total_requests: u64 },
}
