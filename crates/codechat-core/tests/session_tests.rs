use codechat_core::backend::{
    ChatReply, ChatRequest, ChatResponse, HealthStatus, RepoBackend, ToolCall, ToolOutput,
    UploadResponse, UploadedRepo,
};
use codechat_core::conversation::ExchangeRequest;
use codechat_core::source::{resolve_from_url, UploadArtifact, UploadResolver};
use codechat_core::{CodechatError, Role, SessionController};
use serde_json::json;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted reply for the mock backend.
enum Scripted {
    Reply(ChatResponse),
    Fail(String),
}

/// Mock backend that replays scripted chat replies in order and records requests.
#[derive(Default)]
struct MockBackend {
    chat_script: Mutex<VecDeque<Scripted>>,
    chat_requests: Mutex<Vec<ChatRequest>>,
    upload_result: Mutex<Option<Result<UploadResponse, String>>>,
    upload_calls: AtomicUsize,
    upload_gate: Option<Arc<Notify>>,
}

impl MockBackend {
    fn with_chat(script: Vec<Scripted>) -> Self {
        Self {
            chat_script: Mutex::new(script.into()),
            ..Default::default()
        }
    }

    fn with_upload(result: Result<UploadResponse, String>) -> Self {
        Self {
            upload_result: Mutex::new(Some(result)),
            ..Default::default()
        }
    }

    fn requests(&self) -> Vec<ChatRequest> {
        self.chat_requests.lock().unwrap().clone()
    }
}

fn text(reply: &str, tool: Option<&str>) -> Scripted {
    Scripted::Reply(ChatResponse {
        response: ChatReply::Text(reply.to_string()),
        tool_used: tool.map(str::to_string),
    })
}

#[async_trait::async_trait]
impl RepoBackend for MockBackend {
    async fn chat(&self, request: &ChatRequest) -> Result<ChatResponse, CodechatError> {
        self.chat_requests.lock().unwrap().push(request.clone());
        let next = self.chat_script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply(resp)) => Ok(resp),
            Some(Scripted::Fail(msg)) => Err(CodechatError::Transfer(msg)),
            None => Err(CodechatError::Transfer("Network error: connection refused".into())),
        }
    }

    async fn upload(&self, _artifact: &UploadArtifact) -> Result<UploadResponse, CodechatError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.upload_gate {
            gate.notified().await;
        }
        let result = self.upload_result.lock().unwrap().take();
        match result {
            Some(Ok(resp)) => Ok(resp),
            Some(Err(msg)) => Err(CodechatError::Transfer(msg)),
            None => Err(CodechatError::Transfer("Unknown error".into())),
        }
    }

    async fn health(&self) -> Result<HealthStatus, CodechatError> {
        Ok(HealthStatus {
            status: "healthy".into(),
        })
    }

    async fn list_repos(&self) -> Result<Vec<UploadedRepo>, CodechatError> {
        Ok(Vec::new())
    }

    async fn delete_repo(&self, repo_id: &str) -> Result<String, CodechatError> {
        Ok(format!("Repository {repo_id} deleted successfully"))
    }

    async fn invoke_tool(&self, call: &ToolCall) -> Result<ToolOutput, CodechatError> {
        Ok(ToolOutput {
            tool: call.tool.clone(),
            result: json!({"repo": call.repo_path, "files": 42}),
        })
    }
}

fn controller_for(url: &str) -> SessionController {
    let mut controller = SessionController::new();
    controller.select_repository(resolve_from_url(url).unwrap());
    controller
}

// ========================================================================
// Conversation exchanges
// ========================================================================

#[tokio::test]
async fn test_index_scenario() {
    let backend = MockBackend::with_chat(vec![text("Indexed 42 files", Some("indexer"))]);
    let mut controller = controller_for("https://github.com/acme/widgets");

    controller.exchange(&backend, "Index this repo").await.unwrap();

    let turns = controller.conversation().unwrap().transcript().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role(), Role::User);
    assert_eq!(turns[0].content(), "Index this repo");
    assert!(turns[0].tool_used().is_none());
    assert_eq!(turns[1].role(), Role::Assistant);
    assert_eq!(turns[1].content(), "Indexed 42 files");
    assert_eq!(turns[1].tool_used(), Some("indexer"));

    assert_eq!(
        backend.requests(),
        vec![ChatRequest {
            message: "Index this repo".into(),
            repo_url: "https://github.com/acme/widgets".into(),
        }]
    );
}

#[tokio::test]
async fn test_transcript_grows_two_turns_per_submission_in_order() {
    let script = (0..5).map(|i| text(&format!("answer {i}"), None)).collect();
    let backend = MockBackend::with_chat(script);
    let mut controller = controller_for("https://github.com/acme/widgets");

    for i in 0..5 {
        controller.exchange(&backend, &format!("question {i}")).await.unwrap();
    }

    let transcript = controller.conversation().unwrap().transcript();
    assert_eq!(transcript.len(), 10);
    for (i, pair) in transcript.turns().chunks(2).enumerate() {
        assert_eq!(pair[0].role(), Role::User);
        assert_eq!(pair[0].content(), format!("question {i}"));
        assert_eq!(pair[1].role(), Role::Assistant);
        assert_eq!(pair[1].content(), format!("answer {i}"));
    }
}

#[tokio::test]
async fn test_each_request_is_stateless() {
    let backend = MockBackend::with_chat(vec![text("a", None), text("b", None)]);
    let mut controller = controller_for("uploads/1a2b3c4d");

    controller.exchange(&backend, "first").await.unwrap();
    controller.exchange(&backend, "second").await.unwrap();

    let requests = backend.requests();
    assert_eq!(requests[1].message, "second");
    assert_eq!(requests[1].repo_url, "uploads/1a2b3c4d");
}

#[tokio::test]
async fn test_structured_reply_is_pretty_printed() {
    let backend = MockBackend::with_chat(vec![Scripted::Reply(ChatResponse {
        response: ChatReply::Structured(json!({"passed": 3})),
        tool_used: Some("run_tests".into()),
    })]);
    let mut controller = controller_for("https://github.com/acme/widgets");

    controller.exchange(&backend, "Run tests").await.unwrap();

    let last = controller.conversation().unwrap().transcript().last().unwrap().clone();
    assert_eq!(last.content(), "{\n  \"passed\": 3\n}");
    assert_eq!(last.tool_used(), Some("run_tests"));
}

#[tokio::test]
async fn test_failure_resubmission_appends_independent_error_turns() {
    let backend = MockBackend::with_chat(vec![
        Scripted::Fail("Backend returned 503 Service Unavailable".into()),
        Scripted::Fail("Backend returned 503 Service Unavailable".into()),
    ]);
    let mut controller = controller_for("https://github.com/acme/widgets");

    controller.exchange(&backend, "Run tests").await.unwrap();
    let first_error = controller.conversation().unwrap().transcript().turns()[1].clone();

    controller.exchange(&backend, "Run tests").await.unwrap();
    let turns = controller.conversation().unwrap().transcript().turns();

    assert_eq!(turns.len(), 4);
    assert_eq!(turns[1], first_error);
    assert_eq!(turns[3].content(), "Error: Backend returned 503 Service Unavailable");
    assert!(turns[3].tool_used().is_none());
    assert!(!controller.is_awaiting());
}

#[tokio::test]
async fn test_submission_while_awaiting_is_not_accepted() {
    let backend = MockBackend::with_chat(vec![text("one", None), text("two", None)]);
    let mut controller = controller_for("https://github.com/acme/widgets");

    let pending = controller.submit_chat("first").unwrap();
    assert!(controller.is_awaiting());
    assert!(matches!(
        controller.submit_chat("second"),
        Err(CodechatError::ExchangeInFlight)
    ));
    assert_eq!(controller.conversation().unwrap().transcript().len(), 1);

    let outcome = pending.dispatch(&backend).await;
    assert!(controller.complete(pending.conversation(), outcome));

    controller.exchange(&backend, "second").await.unwrap();
    let contents: Vec<&str> = controller
        .conversation()
        .unwrap()
        .transcript()
        .iter()
        .map(|t| t.content())
        .collect();
    assert_eq!(contents, vec!["first", "one", "second", "two"]);
}

#[tokio::test]
async fn test_empty_submission_is_noop() {
    let mut controller = controller_for("https://github.com/acme/widgets");
    assert!(controller.submit_chat(" \n\t").unwrap_err().is_validation());
    assert!(controller.conversation().unwrap().transcript().is_empty());
    assert!(!controller.is_awaiting());
}

#[tokio::test]
async fn test_tool_exchange_records_tool_name() {
    let backend = MockBackend::default();
    let mut controller = controller_for("uploads/1a2b3c4d");

    let pending = controller
        .submit_tool("/tool index_repo", "index_repo", json!({}))
        .unwrap();
    assert!(matches!(pending.request(), ExchangeRequest::Tool(_)));
    let outcome = pending.dispatch(&backend).await;
    controller.complete(pending.conversation(), outcome);

    let turns = controller.conversation().unwrap().transcript().turns();
    assert_eq!(turns[0].content(), "/tool index_repo");
    assert_eq!(turns[1].tool_used(), Some("index_repo"));
    assert!(turns[1].content().contains("\"files\": 42"));
}

// ========================================================================
// Repository selection
// ========================================================================

#[tokio::test]
async fn test_selecting_repository_resets_transcript() {
    let backend = MockBackend::with_chat(vec![text("a", None), text("b", None)]);
    let mut controller = controller_for("https://github.com/acme/widgets");
    controller.exchange(&backend, "one").await.unwrap();
    controller.exchange(&backend, "two").await.unwrap();
    assert_eq!(controller.conversation().unwrap().transcript().len(), 4);

    controller.select_repository(resolve_from_url("https://github.com/acme/gadgets").unwrap());

    let conversation = controller.conversation().unwrap();
    assert!(conversation.transcript().is_empty());
    assert_eq!(conversation.handle().as_str(), "https://github.com/acme/gadgets");
}

#[tokio::test]
async fn test_reselecting_same_handle_still_resets() {
    let backend = MockBackend::with_chat(vec![text("a", None)]);
    let mut controller = controller_for("https://github.com/acme/widgets");
    controller.exchange(&backend, "one").await.unwrap();
    let before = controller.conversation().unwrap().id();

    controller.select_repository(resolve_from_url("https://github.com/acme/widgets").unwrap());

    let conversation = controller.conversation().unwrap();
    assert!(conversation.transcript().is_empty());
    assert_ne!(conversation.id(), before);
}

#[tokio::test]
async fn test_stale_response_is_dropped_after_repository_change() {
    let backend = MockBackend::with_chat(vec![text("late answer", Some("llm"))]);
    let mut controller = controller_for("https://github.com/acme/widgets");

    let pending = controller.submit_chat("What does this codebase do?").unwrap();
    controller.select_repository(resolve_from_url("https://github.com/acme/gadgets").unwrap());

    let outcome = pending.dispatch(&backend).await;
    assert!(!controller.complete(pending.conversation(), outcome));

    let conversation = controller.conversation().unwrap();
    assert!(conversation.transcript().is_empty());
    assert!(!conversation.is_awaiting());
}

// ========================================================================
// Upload resolution
// ========================================================================

#[tokio::test]
async fn test_wrong_extension_rejected_before_any_request() {
    let backend = MockBackend::with_upload(Ok(UploadResponse {
        repo_path: "uploads/x".into(),
        repo_id: None,
        message: None,
    }));
    let resolver = UploadResolver::new();
    let controller = controller_for("https://github.com/acme/widgets");

    for name in ["notes.txt", "project.ZIP", "archive.tar.gz", "zip"] {
        let artifact = UploadArtifact::new(name, b"data".to_vec());
        let err = resolver.resolve_from_upload(&backend, artifact).await.unwrap_err();
        assert!(err.is_validation(), "{name} should fail validation");
    }

    assert_eq!(backend.upload_calls.load(Ordering::SeqCst), 0);
    assert_eq!(controller.handle().unwrap().as_str(), "https://github.com/acme/widgets");
    assert!(controller.conversation().unwrap().transcript().is_empty());
}

#[tokio::test]
async fn test_upload_success_yields_server_handle() {
    let backend = MockBackend::with_upload(Ok(UploadResponse {
        repo_path: "uploads/1a2b3c4d".into(),
        repo_id: Some("1a2b3c4d".into()),
        message: Some("Repository uploaded and extracted successfully".into()),
    }));
    let resolver = UploadResolver::new();
    let mut controller = SessionController::new();

    let uploaded = resolver
        .resolve_from_upload(&backend, UploadArtifact::new("project.zip", vec![1, 2, 3]))
        .await
        .unwrap();
    controller.select_repository(uploaded.handle);

    assert_eq!(controller.handle().unwrap().as_str(), "uploads/1a2b3c4d");
    assert_eq!(uploaded.repo_id.as_deref(), Some("1a2b3c4d"));
    assert!(!resolver.is_busy());
}

#[tokio::test]
async fn test_upload_failure_keeps_previous_handle() {
    let backend = MockBackend::with_upload(Err("unsupported archive".into()));
    let resolver = UploadResolver::new();
    let controller = controller_for("https://github.com/acme/widgets");

    let err = resolver
        .resolve_from_upload(&backend, UploadArtifact::new("project.zip", vec![0]))
        .await
        .unwrap_err();

    assert!(matches!(err, CodechatError::Transfer(_)));
    assert!(err.user_message().contains("unsupported archive"));
    assert_eq!(controller.handle().unwrap().as_str(), "https://github.com/acme/widgets");
    assert!(!resolver.is_busy());
}

#[tokio::test]
async fn test_busy_flag_spans_upload() {
    let gate = Arc::new(Notify::new());
    let backend = Arc::new(MockBackend {
        upload_result: Mutex::new(Some(Ok(UploadResponse {
            repo_path: "uploads/feedbeef".into(),
            repo_id: None,
            message: None,
        }))),
        upload_gate: Some(gate.clone()),
        ..Default::default()
    });
    let resolver = UploadResolver::new();

    let task = tokio::spawn({
        let resolver = resolver.clone();
        let backend = backend.clone();
        async move {
            resolver
                .resolve_from_upload(backend.as_ref(), UploadArtifact::new("big.zip", vec![0; 16]))
                .await
        }
    });

    while backend.upload_calls.load(Ordering::SeqCst) == 0 {
        tokio::task::yield_now().await;
    }
    assert!(resolver.is_busy());

    gate.notify_one();
    let uploaded = task.await.unwrap().unwrap();
    assert_eq!(uploaded.handle.as_str(), "uploads/feedbeef");
    assert!(!resolver.is_busy());
}
