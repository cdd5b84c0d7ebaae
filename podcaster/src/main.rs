mod args;

use std::sync::Arc;

use args::Args;
use clap::Parser;
use podcaster_config::Config;
use podcaster_core::PodcastGenerator;
use podcaster_server::PodcastServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    podcaster_telemetry::init(&args.log_filter, args.log_format)?;

    let config = Config::from_env().inspect_err(|e| tracing::error!("error loading configuration: {e}"))?;

    tracing::info!("starting podcast generator MCP server");
    tracing::info!("using GPT model: {}", config.gpt_model);
    tracing::info!("using TTS model: {}", config.tts_model);
    tracing::info!("default podcast length: {} minutes", config.default_podcast_length);
    tracing::info!(
        "speakers: {} (voice: {}) and {} (voice: {})",
        config.speaker1_name,
        config.speaker1_voice,
        config.speaker2_name,
        config.speaker2_voice
    );
    tracing::info!("output directory: {}", config.output_directory.display());

    let generator = PodcastGenerator::from_config(Arc::new(config))
        .map_err(|e| anyhow::anyhow!("failed to initialize podcast generator: {e}"))?;
    let server = PodcastServer::new(Arc::new(generator));

    tokio::select! {
        result = podcaster_server::serve_stdio(server) => {
            result.inspect_err(|e| tracing::error!("failed to run server: {e}"))?;
        }
        () = shutdown_signal() => {}
    }

    tracing::info!("podcaster stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
