pub mod backend;
pub mod config;
pub mod conversation;
pub mod error;
pub mod session;
pub mod source;

// Re-export key types
pub use backend::{ChatReply, HttpBackend, RepoBackend};
pub use config::Settings;
pub use conversation::{
    AssistantReply, Conversation, ConversationId, ExchangeState, PendingExchange, Role, Transcript,
    Turn,
};
pub use error::{CodechatError, Result};
pub use session::SessionController;
pub use source::{
    first_dropped_path, resolve_from_url, RepositoryHandle, UploadArtifact, UploadResolver,
};
