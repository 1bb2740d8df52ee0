use std::time::Duration;

use reqwest::Client;

const DEFAULT_USER_AGENT: &str = concat!("latmeter/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client shared by every probe in a run.
///
/// The timeout covers the whole exchange, connect included. Redirects use
/// reqwest's default policy (followed, up to 10 hops).
///
/// # Errors
///
/// Returns the underlying `reqwest` error when the client cannot be
/// constructed, for example when the TLS backend fails to initialize.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(DEFAULT_USER_AGENT)
        .timeout(timeout)
        .build()
}
