use clap::Parser;
use podcaster_telemetry::LogFormat;

/// Podcast generator MCP server
///
/// Speech service credentials, speakers, voices and the output directory are
/// read from the environment (`OPENAI_API_KEY`, `SPEAKER1_NAME`, ...).
#[derive(Debug, Parser)]
#[command(name = "podcaster", about = "Turns two-speaker dialogue into podcast audio over MCP")]
pub struct Args {
    /// Log filter directives
    #[arg(long, default_value = "info", env = "PODCASTER_LOG")]
    pub log_filter: String,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, env = "PODCASTER_LOG_FORMAT")]
    pub log_format: LogFormat,
}
