use std::{sync::OnceLock, time::Duration};

use reqwest::{Client, header};

/// Shared HTTP client so repeated synthesis calls reuse connections
///
/// No request timeout is set: a stalled synthesis call stalls the podcast
/// that issued it.
pub fn http_client() -> Client {
    static CLIENT: OnceLock<Client> = OnceLock::new();

    CLIENT
        .get_or_init(|| {
            let mut headers = header::HeaderMap::new();
            headers.insert(header::CONNECTION, header::HeaderValue::from_static("keep-alive"));

            Client::builder()
                .pool_idle_timeout(Some(Duration::from_secs(5)))
                .tcp_nodelay(true)
                .tcp_keepalive(Some(Duration::from_secs(60)))
                .default_headers(headers)
                .build()
                .unwrap_or_else(|e| {
                    tracing::warn!("failed to build tuned HTTP client, using defaults: {e}");
                    Client::new()
                })
        })
        .clone()
}
