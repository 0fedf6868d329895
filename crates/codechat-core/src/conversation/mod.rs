mod transcript;

pub use transcript::{Role, Transcript, Turn};

use crate::backend::{ChatReply, ChatRequest, ChatResponse, RepoBackend, ToolCall, ToolOutput};
use crate::error::{CodechatError, Result};
use crate::source::RepositoryHandle;
use serde_json::Value;
use std::fmt;

/// Prompts offered while a transcript is still empty.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "Index this repo",
    "Find all functions",
    "Run tests",
    "Analyze code quality",
    "What does this codebase do?",
];

/// Identity of a conversation instance. Never reused within a session, so a
/// result tagged with an old id can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(u64);

impl ConversationId {
    pub fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    Idle,
    Awaiting,
}

/// Normalized backend answer, ready to become an assistant turn.
#[derive(Debug, Clone, PartialEq)]
pub struct AssistantReply {
    pub content: String,
    pub tool_used: Option<String>,
}

impl From<ChatResponse> for AssistantReply {
    fn from(response: ChatResponse) -> Self {
        Self {
            content: response.response.into_display_text(),
            tool_used: response.tool_used,
        }
    }
}

impl From<ToolOutput> for AssistantReply {
    fn from(output: ToolOutput) -> Self {
        Self {
            content: ChatReply::from_value(output.result).into_display_text(),
            tool_used: Some(output.tool),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExchangeRequest {
    Chat(ChatRequest),
    Tool(ToolCall),
}

/// A submission that has been recorded and is waiting on its round trip.
#[derive(Debug, Clone)]
pub struct PendingExchange {
    conversation: ConversationId,
    request: ExchangeRequest,
}

impl PendingExchange {
    pub fn conversation(&self) -> ConversationId {
        self.conversation
    }

    pub fn request(&self) -> &ExchangeRequest {
        &self.request
    }

    /// Perform the single backend call for this exchange.
    pub async fn dispatch(&self, backend: &dyn RepoBackend) -> Result<AssistantReply> {
        match &self.request {
            ExchangeRequest::Chat(request) => backend.chat(request).await.map(Into::into),
            ExchangeRequest::Tool(call) => backend.invoke_tool(call).await.map(Into::into),
        }
    }
}

/// One transcript bound to one repository handle. Exchanges run strictly one
/// at a time: `Idle -> Awaiting` on submit, `Awaiting -> Idle` on completion.
#[derive(Debug)]
pub struct Conversation {
    id: ConversationId,
    handle: RepositoryHandle,
    transcript: Transcript,
    state: ExchangeState,
}

impl Conversation {
    pub fn new(id: ConversationId, handle: RepositoryHandle) -> Self {
        Self {
            id,
            handle,
            transcript: Transcript::new(),
            state: ExchangeState::Idle,
        }
    }

    pub fn id(&self) -> ConversationId {
        self.id
    }

    pub fn handle(&self) -> &RepositoryHandle {
        &self.handle
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> ExchangeState {
        self.state
    }

    pub fn is_awaiting(&self) -> bool {
        self.state == ExchangeState::Awaiting
    }

    /// Record a chat message and hand back the request to send.
    /// The message is kept exactly as typed; only the emptiness check trims.
    pub fn begin_chat(&mut self, text: &str) -> Result<PendingExchange> {
        self.check_accepting(text)?;
        let request = ChatRequest {
            message: text.to_string(),
            repo_url: self.handle.to_string(),
        };
        Ok(self.begin(text, ExchangeRequest::Chat(request)))
    }

    /// Record a direct tool invocation. `text` is what the user typed and is
    /// what the transcript shows.
    pub fn begin_tool(&mut self, text: &str, tool: &str, params: Value) -> Result<PendingExchange> {
        self.check_accepting(text)?;
        let tool = tool.trim();
        if tool.is_empty() {
            return Err(CodechatError::validation("Tool name is empty"));
        }
        let call = ToolCall::new(tool, self.handle.as_str()).with_params(params);
        Ok(self.begin(text, ExchangeRequest::Tool(call)))
    }

    /// Finish the in-flight exchange. Failures become an assistant turn carrying
    /// the error text so the conversation keeps going. Returns `false` when
    /// nothing was in flight.
    pub fn complete(&mut self, outcome: Result<AssistantReply>) -> bool {
        if self.state != ExchangeState::Awaiting {
            tracing::warn!(conversation = %self.id, "Completion arrived with no exchange in flight");
            return false;
        }

        let turn = match outcome {
            Ok(reply) => Turn::assistant(reply.content, reply.tool_used),
            Err(e) => {
                tracing::warn!(conversation = %self.id, "Exchange failed: {e}");
                Turn::assistant(format!("Error: {}", e.user_message()), None)
            }
        };
        self.transcript.push(turn);
        self.state = ExchangeState::Idle;
        true
    }

    fn check_accepting(&self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(CodechatError::validation("Message is empty"));
        }
        if self.is_awaiting() {
            return Err(CodechatError::ExchangeInFlight);
        }
        Ok(())
    }

    fn begin(&mut self, text: &str, request: ExchangeRequest) -> PendingExchange {
        self.transcript.push(Turn::user(text));
        self.state = ExchangeState::Awaiting;
        tracing::debug!(conversation = %self.id, turns = self.transcript.len(), "Exchange started");
        PendingExchange {
            conversation: self.id,
            request,
        }
    }
}
