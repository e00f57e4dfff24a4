//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the text metrics as MCP tools over stdio, so an assistant can
//! ask for word counts or a full report on text it already holds.
//!
//! The server is a presentation layer: each `#[tool]` method validates the
//! input size, calls into `textmetrics_core`, and serializes the result.

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};

use textmetrics_core::{check_input_size, config::DEFAULT_TOP_WORDS, metrics, report};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Optional word to count (case-insensitive, whole words).
    pub word: Option<String>,
}

/// Parameters for the `count_word` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CountWordParams {
    /// The text to search.
    pub text: String,
    /// The word to count.
    pub word: String,
}

/// Parameters for the `word_frequencies` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct WordFrequenciesParams {
    /// The text to analyze.
    pub text: String,
    /// Maximum number of words to return (default 10).
    pub limit: Option<usize>,
}

/// MCP server exposing the text metrics.
#[derive(Clone)]
pub struct ProjectServer {
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
    max_input_bytes: Option<usize>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_router]
impl ProjectServer {
    /// Create a server with the default input limit.
    pub fn new() -> Self {
        Self::with_input_limit(Some(textmetrics_core::DEFAULT_MAX_INPUT_BYTES))
    }

    /// Create a server that rejects text larger than `max_input_bytes`.
    ///
    /// `None` disables the check.
    pub fn with_input_limit(max_input_bytes: Option<usize>) -> Self {
        Self {
            tool_router: Self::tool_router(),
            max_input_bytes,
        }
    }

    fn check_size(&self, text: &str) -> Result<(), McpError> {
        check_input_size(text, self.max_input_bytes)
            .map_err(|e| McpError::invalid_params(e.to_string(), None))
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run every metric over the text.
    #[tool(
        description = "Analyze text: most common word, average word length, paragraph and sentence counts, word totals, and optional occurrences of a given word."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "analyze_text", text_len = params.text.len(), "executing MCP tool");
        self.check_size(&params.text)?;

        let report = report::analyze_text(&params.text, params.word.as_deref());
        let json = to_json(&report)?;

        tracing::info!(
            tool = "analyze_text",
            total_words = report.total_words,
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Count whole-word occurrences of a word.
    #[tool(description = "Count case-insensitive whole-word occurrences of a word in text.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn count_word(
        &self,
        Parameters(params): Parameters<CountWordParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "count_word", word = %params.word, "executing MCP tool");
        self.check_size(&params.text)?;

        let word = params.word.trim();
        let count = metrics::count_specific_word(&params.text, word);
        let json = to_json(&serde_json::json!({ "word": word, "count": count }))?;

        tracing::info!(tool = "count_word", count, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// List the most frequent words.
    #[tool(
        description = "List the most frequent words in text with their counts, most frequent first."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn word_frequencies(
        &self,
        Parameters(params): Parameters<WordFrequenciesParams>,
    ) -> Result<CallToolResult, McpError> {
        let limit = params.limit.unwrap_or(DEFAULT_TOP_WORDS);
        tracing::debug!(tool = "word_frequencies", limit, "executing MCP tool");
        self.check_size(&params.text)?;

        let ranked = metrics::top_words(&params.text, limit);
        let json = to_json(&ranked)?;

        tracing::info!(
            tool = "word_frequencies",
            returned = ranked.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text, count_word, and word_frequencies to measure text.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    /// Extract text from the first content item in a `CallToolResult`.
    fn extract_text(result: &CallToolResult) -> Option<&str> {
        result.content.first().and_then(|c| match &c.raw {
            RawContent::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
    }

    fn json_of(result: &CallToolResult) -> serde_json::Value {
        let text = extract_text(result).expect("should have text content");
        serde_json::from_str(text).expect("output should be valid JSON")
    }

    #[test]
    fn server_info_has_correct_name() {
        let server = ProjectServer::new();
        let info = ServerHandler::get_info(&server);

        assert_eq!(info.server_info.name, env!("CARGO_PKG_NAME"));
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn get_info_tool_returns_json_when_requested() {
        let server = ProjectServer::new();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: "json".to_string(),
            }))
            .expect("get_info should succeed");

        let json = json_of(&result);
        assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn get_info_tool_returns_text_by_default() {
        let server = ProjectServer::new();
        let result = server
            .get_info(Parameters(GetInfoParams {
                format: default_format(),
            }))
            .expect("get_info should succeed");

        let text = extract_text(&result).expect("should have text content");
        assert!(text.contains(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn analyze_text_tool_reports_metrics() {
        let server = ProjectServer::new();
        let result = server
            .analyze_text(Parameters(AnalyzeTextParams {
                text: "Hi! How are you? Fine.\n\nThe the THE dog.".to_string(),
                word: Some("the".to_string()),
            }))
            .expect("analyze_text should succeed");

        assert!(!result.is_error.unwrap_or(false));
        let json = json_of(&result);
        assert_eq!(json["word_count"], 3);
        assert_eq!(json["most_common_word"], "the");
        assert_eq!(json["paragraphs"], 2);
        assert_eq!(json["sentences"], 4);
    }

    #[test]
    fn count_word_tool_counts_whole_words() {
        let server = ProjectServer::new();
        let result = server
            .count_word(Parameters(CountWordParams {
                text: "Category cat cats".to_string(),
                word: " cat ".to_string(),
            }))
            .expect("count_word should succeed");

        let json = json_of(&result);
        assert_eq!(json["word"], "cat");
        assert_eq!(json["count"], 1);
    }

    #[test]
    fn word_frequencies_tool_respects_limit() {
        let server = ProjectServer::new();
        let result = server
            .word_frequencies(Parameters(WordFrequenciesParams {
                text: "a a a b b c".to_string(),
                limit: Some(2),
            }))
            .expect("word_frequencies should succeed");

        let json = json_of(&result);
        let rows = json.as_array().expect("array");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["word"], "a");
        assert_eq!(rows[0]["count"], 3);
    }

    #[test]
    fn oversized_input_is_rejected() {
        let server = ProjectServer::with_input_limit(Some(4));
        let result = server.count_word(Parameters(CountWordParams {
            text: "far too long".to_string(),
            word: "too".to_string(),
        }));
        assert!(result.is_err());
    }
}
