//! Logging for the podcast server
//!
//! Everything is written to stderr: stdout carries the protocol stream.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Output format for log lines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Initialize the global `tracing` subscriber
///
/// `log_filter` uses `EnvFilter` directive syntax; an invalid filter falls
/// back to `info`.
///
/// # Errors
///
/// Returns an error if a global subscriber was already installed
pub fn init(log_filter: &str, format: LogFormat) -> anyhow::Result<()> {
    let filter = build_filter(log_filter);

    let result = match format {
        LogFormat::Text => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false);

            tracing_subscriber::registry().with(filter).with(fmt_layer).try_init()
        }
        LogFormat::Json => {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_current_span(true);

            tracing_subscriber::registry().with(filter).with(fmt_layer).try_init()
        }
    };

    result.map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))
}

fn build_filter(log_filter: &str) -> EnvFilter {
    EnvFilter::try_new(log_filter).unwrap_or_else(|_| EnvFilter::new("info"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_filter_falls_back_to_info() {
        let filter = build_filter("podcaster=loud");
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn valid_filter_is_kept() {
        let filter = build_filter("podcaster_core=debug");
        assert_eq!(filter.to_string(), "podcaster_core=debug");
    }

    #[test]
    fn second_init_reports_error() {
        // The first call may race with other tests in this binary, so only
        // the second one is asserted.
        let _ = init("info", LogFormat::Text);
        assert!(init("info", LogFormat::Json).is_err());
    }
}
