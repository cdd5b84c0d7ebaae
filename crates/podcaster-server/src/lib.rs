//! Podcast generation tools served over the Model Context Protocol

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod health;
mod instructions;
mod server;

pub use health::{HealthConfig, HealthReport, HealthStatus};
pub use server::{GeneratePodcastParams, PodcastServer};

use rmcp::ServiceExt;

/// Serve the tools on stdin/stdout until the client disconnects
pub async fn serve_stdio(server: PodcastServer) -> anyhow::Result<()> {
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| anyhow::anyhow!("failed to start MCP server: {e}"))?;

    tracing::info!("MCP server ready on stdio");

    let reason = service.waiting().await?;
    tracing::info!(?reason, "MCP session ended");

    Ok(())
}
