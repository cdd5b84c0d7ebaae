use std::sync::Arc;

use podcaster_core::{PodcastError, PodcastGenerator, PodcastRequest, PodcastResponse};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::{health::HealthReport, instructions::server_instructions};

/// Arguments of the `generate_podcast` tool
#[derive(Debug, Clone, Deserialize, schemars::JsonSchema)]
pub struct GeneratePodcastParams {
    /// Podcast title (1-200 characters)
    pub title: String,
    /// Dialogue between the two speakers, each turn starting with `Name: `
    pub dialogue: String,
    /// Target length in minutes (1-60); defaults to the server's configured length
    #[serde(default)]
    pub podcast_length: Option<i64>,
}

/// MCP server exposing podcast generation tools
#[derive(Clone)]
pub struct PodcastServer {
    generator: Arc<PodcastGenerator>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl PodcastServer {
    pub fn new(generator: Arc<PodcastGenerator>) -> Self {
        Self {
            generator,
            tool_router: Self::tool_router(),
        }
    }

    /// Validate the arguments and generate a podcast
    pub async fn generate(&self, params: GeneratePodcastParams) -> Result<PodcastResponse, PodcastError> {
        let podcast_length = params
            .podcast_length
            .unwrap_or_else(|| i64::from(self.generator.config().default_podcast_length));

        let request = PodcastRequest::new(&params.title, &params.dialogue, podcast_length).map_err(|e| {
            tracing::warn!("rejected generate_podcast request: {e}");
            PodcastError::from(e)
        })?;

        self.generator.generate(&request).await
    }

    pub fn health(&self) -> HealthReport {
        HealthReport::check(self.generator.config())
    }

    #[tool(
        description = "Create a podcast audio file from a two-speaker dialogue script. Returns the \
                       generation result, including the path of the exported audio file."
    )]
    async fn generate_podcast(
        &self,
        Parameters(params): Parameters<GeneratePodcastParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.generate(params).await {
            Ok(response) => Ok(CallToolResult::success(vec![json_content(&response)?])),
            Err(error) => Ok(CallToolResult::error(vec![json_content(&error)?])),
        }
    }

    #[tool(description = "Check the health of the podcast generation server")]
    async fn health_check(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![json_content(&self.health())?]))
    }
}

#[tool_handler]
impl ServerHandler for PodcastServer {
    fn get_info(&self) -> ServerInfo {
        let mut server_info = Implementation::from_build_env();
        server_info.name = env!("CARGO_PKG_NAME").to_owned();
        server_info.version = env!("CARGO_PKG_VERSION").to_owned();

        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info,
            instructions: Some(server_instructions(self.generator.config())),
            ..Default::default()
        }
    }
}

fn json_content(value: &impl Serialize) -> Result<Content, McpError> {
    serde_json::to_string_pretty(value)
        .map(Content::text)
        .map_err(|e| McpError::internal_error(format!("failed to serialize tool result: {e}"), None))
}
