use crate::error::CodechatError;
use crate::source::UploadArtifact;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /api/v1/chat`. `repo_url` carries the active handle whether it
/// came from a URL or from an upload.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatRequest {
    pub message: String,
    pub repo_url: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub response: ChatReply,
    #[serde(default)]
    pub tool_used: Option<String>,
}

/// The backend answers with either plain text or an arbitrary JSON payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ChatReply {
    Text(String),
    Structured(Value),
}

impl ChatReply {
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Structured(other),
        }
    }

    /// Text replies pass through untouched; structured ones are pretty-printed.
    pub fn into_display_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Structured(value) => {
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadResponse {
    pub repo_path: String,
    #[serde(default)]
    pub repo_id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UploadedRepo {
    pub repo_id: String,
    pub repo_path: String,
}

/// Body of `POST /api/v1/tool`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ToolCall {
    pub tool: String,
    pub repo_path: String,
    pub params: Value,
}

impl ToolCall {
    pub fn new(tool: impl Into<String>, repo_path: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            repo_path: repo_path.into(),
            params: Value::Object(Default::default()),
        }
    }

    pub fn with_params(mut self, params: Value) -> Self {
        self.params = params;
        self
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ToolOutput {
    pub tool: String,
    pub result: Value,
}

/// Tools the backend exposes on `/api/v1/tool`.
pub const KNOWN_TOOLS: &[&str] = &["index_repo", "find_symbols", "run_tests", "analyze_code"];

/// The remote analysis backend. Every call is a single stateless round trip.
#[async_trait::async_trait]
pub trait RepoBackend: Send + Sync {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, CodechatError>;

    /// Upload an archive; the backend extracts it and issues a path token.
    async fn upload(&self, artifact: &UploadArtifact) -> Result<UploadResponse, CodechatError>;

    async fn health(&self) -> Result<HealthStatus, CodechatError>;

    async fn list_repos(&self) -> Result<Vec<UploadedRepo>, CodechatError>;

    /// Returns the backend's confirmation message.
    async fn delete_repo(&self, repo_id: &str) -> Result<String, CodechatError>;

    async fn invoke_tool(&self, call: &ToolCall) -> Result<ToolOutput, CodechatError>;
}
