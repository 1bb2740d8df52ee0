use reqwest::Client;
use tokio::time::Instant;
use tracing::debug;
use url::Url;

use crate::metrics::Sample;

/// Issue one timed GET against `target`.
///
/// Timing starts immediately before the request is sent and stops once the
/// response body has been read to completion, so a sample covers the full
/// exchange. Transport errors, timeouts, and 4xx/5xx statuses all collapse
/// into the same failure sample; no error escapes this function.
pub async fn execute_probe(client: &Client, target: &Url) -> Sample {
    let start = Instant::now();

    let response = match client.get(target.clone()).send().await {
        Ok(response) => response,
        Err(err) => {
            debug!("Probe failed: {}", err);
            return Sample::failure();
        }
    };

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        debug!("Probe failed: HTTP {}", status);
        return Sample::failure();
    }

    match response.bytes().await {
        Ok(_) => Sample::success(start.elapsed()),
        Err(err) => {
            debug!("Probe failed while reading body: {}", err);
            Sample::failure()
        }
    }
}
