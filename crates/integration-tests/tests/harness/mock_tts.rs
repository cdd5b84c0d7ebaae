//! Mock speech service for integration tests
//!
//! Implements the `OpenAI` `/v1/audio/speech` endpoint, answering every call
//! with a fixed amount of raw PCM silence

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

use super::config::TEST_API_KEY;

/// PCM samples returned per request (100 ms at 24 kHz)
pub const SAMPLES_PER_REQUEST: usize = 2_400;

/// A speech request as received by the mock
#[derive(Debug, Clone, Deserialize)]
pub struct ReceivedSpeech {
    pub model: String,
    pub input: String,
    pub voice: String,
    pub response_format: String,
}

/// Mock speech backend that returns predictable audio
pub struct MockTts {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockTtsState>,
}

struct MockTtsState {
    request_count: AtomicU32,
    /// Requests numbered at or above this (zero-based) fail with 500
    fail_from: Option<u32>,
    received: Mutex<Vec<ReceivedSpeech>>,
}

impl MockTts {
    /// Start the mock server, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_inner(None).await
    }

    /// Start a mock server that fails every request after the first `n`
    pub async fn start_failing_after(n: u32) -> anyhow::Result<Self> {
        Self::start_inner(Some(n)).await
    }

    async fn start_inner(fail_from: Option<u32>) -> anyhow::Result<Self> {
        let state = Arc::new(MockTtsState {
            request_count: AtomicU32::new(0),
            fail_from,
            received: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/audio/speech", routing::post(handle_speech))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as the speech service
    ///
    /// Includes `/v1` since the provider appends `/audio/speech`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Number of speech requests received
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::Relaxed)
    }

    /// Requests that were authorized, in arrival order
    pub fn received(&self) -> Vec<ReceivedSpeech> {
        self.state.received.lock().unwrap().clone()
    }
}

impl Drop for MockTts {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_speech(
    State(state): State<Arc<MockTtsState>>,
    headers: HeaderMap,
    Json(request): Json<ReceivedSpeech>,
) -> Response {
    let index = state.request_count.fetch_add(1, Ordering::Relaxed);

    let expected = format!("Bearer {TEST_API_KEY}");
    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == expected);

    if !authorized {
        return (StatusCode::UNAUTHORIZED, "invalid api key").into_response();
    }

    state.received.lock().unwrap().push(request);

    if state.fail_from.is_some_and(|n| index >= n) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "synthesis backend exploded").into_response();
    }

    let audio = vec![0_u8; SAMPLES_PER_REQUEST * 2];
    ([(header::CONTENT_TYPE, "audio/pcm")], audio).into_response()
}
