use crate::backend::RepoBackend;
use crate::conversation::{AssistantReply, Conversation, ConversationId, PendingExchange};
use crate::error::{CodechatError, Result};
use crate::source::RepositoryHandle;
use serde_json::Value;

/// Owns the active repository handle and the one conversation bound to it.
#[derive(Debug, Default)]
pub struct SessionController {
    active: Option<Conversation>,
    next_generation: u64,
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `handle` the active repository. The current conversation is
    /// discarded even when the handle value is unchanged.
    pub fn select_repository(&mut self, handle: RepositoryHandle) -> ConversationId {
        self.next_generation += 1;
        let id = ConversationId::new(self.next_generation);
        if let Some(previous) = self.active.take() {
            tracing::debug!(
                previous = %previous.id(),
                discarded_turns = previous.transcript().len(),
                "Replacing conversation"
            );
        }
        tracing::info!(repo = %handle, conversation = %id, "Repository selected");
        self.active = Some(Conversation::new(id, handle));
        id
    }

    pub fn handle(&self) -> Option<&RepositoryHandle> {
        self.active.as_ref().map(Conversation::handle)
    }

    /// `None` until a repository has been selected.
    pub fn conversation(&self) -> Option<&Conversation> {
        self.active.as_ref()
    }

    pub fn is_awaiting(&self) -> bool {
        self.active.as_ref().is_some_and(Conversation::is_awaiting)
    }

    pub fn submit_chat(&mut self, text: &str) -> Result<PendingExchange> {
        self.active_mut()?.begin_chat(text)
    }

    pub fn submit_tool(&mut self, text: &str, tool: &str, params: Value) -> Result<PendingExchange> {
        self.active_mut()?.begin_tool(text, tool, params)
    }

    /// Deliver a result. Results for a conversation that is no longer active are
    /// dropped and `false` is returned.
    pub fn complete(&mut self, id: ConversationId, outcome: Result<AssistantReply>) -> bool {
        match self.active.as_mut() {
            Some(conversation) if conversation.id() == id => conversation.complete(outcome),
            _ => {
                tracing::debug!(conversation = %id, "Dropping result for discarded conversation");
                false
            }
        }
    }

    /// Submit, dispatch and complete in one go. Used where nothing else can
    /// happen while the request is in flight.
    pub async fn exchange(&mut self, backend: &dyn RepoBackend, text: &str) -> Result<()> {
        let pending = self.submit_chat(text)?;
        let outcome = pending.dispatch(backend).await;
        self.complete(pending.conversation(), outcome);
        Ok(())
    }

    fn active_mut(&mut self) -> Result<&mut Conversation> {
        self.active
            .as_mut()
            .ok_or_else(|| CodechatError::validation("No repository selected"))
    }
}
