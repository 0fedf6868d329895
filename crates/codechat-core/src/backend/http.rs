use crate::backend::traits::*;
use crate::config::BackendSettings;
use crate::error::CodechatError;
use crate::source::UploadArtifact;
use reqwest::multipart::{Form, Part};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// `RepoBackend` over the backend's REST API.
#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct ReposEnvelope {
    repos: Vec<UploadedRepo>,
}

#[derive(Debug, Deserialize)]
struct DeleteEnvelope {
    #[serde(default)]
    message: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: normalize_base_url(base_url.into()),
        }
    }

    pub fn from_settings(settings: &BackendSettings) -> Result<Self, CodechatError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| CodechatError::Config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: normalize_base_url(settings.base_url.clone()),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, CodechatError> {
        let response = request.send().await.map_err(network_error)?;
        let status = response.status();
        let body = response.text().await.map_err(network_error)?;

        if !status.is_success() {
            let message = error_detail(&body).unwrap_or_else(|| format!("Backend returned {status}"));
            tracing::warn!(%status, "Backend request failed: {message}");
            return Err(CodechatError::Transfer(message));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Unparseable backend response: {e}");
            CodechatError::malformed(format!("Failed to parse backend response: {e}"))
        })
    }
}

#[async_trait::async_trait]
impl RepoBackend for HttpBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, CodechatError> {
        tracing::debug!(repo = %request.repo_url, "POST /api/v1/chat");
        self.send(self.client.post(self.url("/api/v1/chat")).json(request))
            .await
    }

    async fn upload(&self, artifact: &UploadArtifact) -> Result<UploadResponse, CodechatError> {
        tracing::debug!(
            file = %artifact.filename(),
            bytes = artifact.len(),
            "POST /api/v1/upload"
        );
        let part = Part::bytes(artifact.bytes().to_vec()).file_name(artifact.filename().to_string());
        let form = Form::new().part("file", part);
        self.send(self.client.post(self.url("/api/v1/upload")).multipart(form))
            .await
    }

    async fn health(&self) -> Result<HealthStatus, CodechatError> {
        self.send(self.client.get(self.url("/health"))).await
    }

    async fn list_repos(&self) -> Result<Vec<UploadedRepo>, CodechatError> {
        let envelope: ReposEnvelope = self.send(self.client.get(self.url("/api/v1/repos"))).await?;
        Ok(envelope.repos)
    }

    async fn delete_repo(&self, repo_id: &str) -> Result<String, CodechatError> {
        let repo_id = repo_id.trim();
        if repo_id.is_empty() || repo_id.contains('/') {
            return Err(CodechatError::validation(format!("Invalid repository id '{repo_id}'")));
        }
        let envelope: DeleteEnvelope = self
            .send(self.client.delete(self.url(&format!("/api/v1/repos/{repo_id}"))))
            .await?;
        Ok(envelope
            .message
            .unwrap_or_else(|| format!("Repository {repo_id} deleted")))
    }

    async fn invoke_tool(&self, call: &ToolCall) -> Result<ToolOutput, CodechatError> {
        tracing::debug!(tool = %call.tool, "POST /api/v1/tool");
        self.send(self.client.post(self.url("/api/v1/tool")).json(call))
            .await
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

fn network_error(e: reqwest::Error) -> CodechatError {
    tracing::warn!("Network error: {e}");
    CodechatError::Transfer(format!("Network error: {e}"))
}

/// Pull a human-readable message out of a failure body.
/// Accepts `{"detail": "..."}` and the list form used for request validation errors.
fn error_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str).map(str::to_string))
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_extracted() {
        assert_eq!(
            error_detail(r#"{"detail":"unsupported archive"}"#).as_deref(),
            Some("unsupported archive")
        );
    }

    #[test]
    fn detail_list_is_joined() {
        let body = r#"{"detail":[{"loc":["body","message"],"msg":"field required"},{"msg":"bad repo"}]}"#;
        assert_eq!(error_detail(body).as_deref(), Some("field required; bad repo"));
    }

    #[test]
    fn missing_or_blank_detail_yields_none() {
        assert!(error_detail("Internal Server Error").is_none());
        assert!(error_detail(r#"{"error":"x"}"#).is_none());
        assert!(error_detail(r#"{"detail":"  "}"#).is_none());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let backend = HttpBackend::new("http://localhost:8000/ ");
        assert_eq!(backend.base_url(), "http://localhost:8000");
        assert_eq!(backend.url("/health"), "http://localhost:8000/health");
    }
}
