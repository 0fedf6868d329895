mod http;
pub mod traits;

pub use http::HttpBackend;
pub use traits::{
    ChatReply, ChatRequest, ChatResponse, HealthStatus, RepoBackend, ToolCall, ToolOutput,
    UploadResponse, UploadedRepo, KNOWN_TOOLS,
};
