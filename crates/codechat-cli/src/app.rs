use anyhow::Result;
use codechat_core::backend::{HealthStatus, RepoBackend, UploadedRepo};
use codechat_core::conversation::{AssistantReply, ConversationId, SUGGESTED_PROMPTS};
use codechat_core::source::{
    first_dropped_path, resolve_from_listing, resolve_from_url, validate_archive_name,
    UploadArtifact, UploadResolver, UploadedHandle,
};
use codechat_core::{CodechatError, Role, SessionController, Settings, Turn};
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
    Terminal,
};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc;

use crate::commands::{self, CommandResult};
use crate::theme::Theme;

// ── Single-prompt mode ──────────────────────────────────────────────────

pub async fn run_single_prompt(settings: &Settings, repo: &str, prompt: &str) -> Result<()> {
    let backend = settings.build_backend()?;
    let mut controller = SessionController::new();
    controller.select_repository(resolve_from_url(repo)?);

    controller.exchange(&backend, prompt).await?;

    let reply = controller
        .conversation()
        .and_then(|c| c.transcript().last())
        .filter(|t| t.role() == Role::Assistant);
    if let Some(turn) = reply {
        if let Some(tool) = shown_tool(turn) {
            eprintln!("[tool: {tool}]");
        }
        println!("{}", turn.content());
    }
    Ok(())
}

// ── Interactive TUI ─────────────────────────────────────────────────────

/// Results of background work, delivered back to the event loop.
enum AppEvent {
    Exchange {
        conversation: ConversationId,
        outcome: Result<AssistantReply, CodechatError>,
    },
    Uploaded(Result<UploadedHandle, CodechatError>),
    Health(Result<HealthStatus, CodechatError>),
    Repos(Result<Vec<UploadedRepo>, CodechatError>),
    Forgotten {
        repo_id: String,
        outcome: Result<String, CodechatError>,
    },
}

#[derive(Clone, Copy, PartialEq)]
enum Focus {
    Repository,
    Chat,
}

/// Modal message that blocks input until dismissed.
struct Notice {
    title: String,
    body: String,
    is_error: bool,
}

struct AppState {
    controller: SessionController,
    resolver: UploadResolver,
    backend: Arc<dyn RepoBackend>,
    events: mpsc::UnboundedSender<AppEvent>,

    focus: Focus,
    repo_input: String,
    chat_input: String,

    notice: Option<Notice>,
    backend_status: String,
    status_text: String,
    /// Listing from the last `/repos`, used to resolve `/use <id>`.
    known_repos: Vec<UploadedRepo>,

    scroll_offset: usize,
    theme: Theme,
    should_quit: bool,
}

impl AppState {
    fn new(
        backend: Arc<dyn RepoBackend>,
        events: mpsc::UnboundedSender<AppEvent>,
        theme_name: &str,
    ) -> Self {
        Self {
            controller: SessionController::new(),
            resolver: UploadResolver::new(),
            backend,
            events,
            focus: Focus::Repository,
            repo_input: String::new(),
            chat_input: String::new(),
            notice: None,
            backend_status: "checking backend...".into(),
            status_text: String::new(),
            known_repos: Vec::new(),
            scroll_offset: 0,
            theme: Theme::by_name(theme_name),
            should_quit: false,
        }
    }

    fn input_mut(&mut self) -> &mut String {
        match self.focus {
            Focus::Repository => &mut self.repo_input,
            Focus::Chat => &mut self.chat_input,
        }
    }

    fn show_notice(&mut self, title: impl Into<String>, body: impl Into<String>, is_error: bool) {
        self.notice = Some(Notice {
            title: title.into(),
            body: body.into(),
            is_error,
        });
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_offset = usize::MAX;
    }

    fn select_repository(&mut self, handle: codechat_core::RepositoryHandle) {
        self.repo_input = handle.to_string();
        self.controller.select_repository(handle);
        self.focus = Focus::Chat;
        self.scroll_offset = 0;
        self.status_text.clear();
    }

    fn spawn_health_check(&self) {
        let backend = self.backend.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let _ = tx.send(AppEvent::Health(backend.health().await));
        });
    }
}

pub async fn run_tui(settings: Settings, initial_repo: Option<String>) -> Result<()> {
    let backend: Arc<dyn RepoBackend> = Arc::new(settings.build_backend()?);
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(backend, event_tx, &settings.ui.theme);
    if let Some(repo) = initial_repo {
        match resolve_from_url(&repo) {
            Ok(handle) => state.select_repository(handle),
            Err(e) => state.show_notice("Repository", e.user_message(), true),
        }
    }
    state.spawn_health_check();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = event_loop(&mut terminal, &mut state, &mut event_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        terminal.draw(|f| draw_ui(f, state))?;

        // Process background results (non-blocking)
        while let Ok(app_event) = event_rx.try_recv() {
            handle_app_event(state, app_event);
        }

        // Handle terminal input with timeout; yield so spawned work can progress
        if event::poll(std::time::Duration::from_millis(33))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
                Event::Paste(text) => handle_paste(state, &text),
                _ => {}
            }
        }
        tokio::task::yield_now().await;

        if state.should_quit {
            return Ok(());
        }
    }
}

fn handle_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::Exchange {
            conversation,
            outcome,
        } => {
            if state.controller.complete(conversation, outcome) {
                state.status_text.clear();
                state.scroll_to_bottom();
            }
        }
        AppEvent::Uploaded(Ok(uploaded)) => {
            state.select_repository(uploaded.handle);
            state.status_text = uploaded
                .message
                .unwrap_or_else(|| "Repository uploaded".into());
        }
        AppEvent::Uploaded(Err(e)) => {
            state.status_text.clear();
            state.show_notice("Upload failed", format!("Upload failed: {}", e.user_message()), true);
        }
        AppEvent::Health(Ok(health)) => {
            state.backend_status = if health.is_healthy() {
                "backend healthy".into()
            } else {
                format!("backend {}", health.status)
            };
        }
        AppEvent::Health(Err(e)) => {
            state.backend_status = format!("backend unreachable: {}", e.user_message());
        }
        AppEvent::Repos(Ok(repos)) => {
            let body = if repos.is_empty() {
                "No uploaded repositories.".to_string()
            } else {
                repos
                    .iter()
                    .map(|r| format!("{}  {}", r.repo_id, r.repo_path))
                    .collect::<Vec<_>>()
                    .join("\n")
                    + "\n\nUse /use <id> to load one."
            };
            state.known_repos = repos;
            state.show_notice("Uploaded repositories", body, false);
        }
        AppEvent::Repos(Err(e)) => {
            state.show_notice("Listing failed", e.user_message(), true);
        }
        AppEvent::Forgotten {
            repo_id,
            outcome: Ok(message),
        } => {
            state.known_repos.retain(|r| r.repo_id != repo_id);
            state.status_text = message;
        }
        AppEvent::Forgotten { outcome: Err(e), .. } => {
            state.show_notice("Delete failed", e.user_message(), true);
        }
    }
}

// ── Input handling ──────────────────────────────────────────────────────

fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.notice.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.notice = None;
        }
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::BackTab => {
            state.focus = match state.focus {
                Focus::Repository => Focus::Chat,
                Focus::Chat => Focus::Repository,
            };
        }
        KeyCode::Enter => submit_input(state),
        KeyCode::Backspace => {
            state.input_mut().pop();
        }
        KeyCode::Esc => state.input_mut().clear(),
        KeyCode::Up => state.scroll_offset = state.scroll_offset.saturating_sub(1),
        KeyCode::Down => state.scroll_offset = state.scroll_offset.saturating_add(1),
        KeyCode::PageUp => state.scroll_offset = state.scroll_offset.saturating_sub(10),
        KeyCode::PageDown => state.scroll_offset = state.scroll_offset.saturating_add(10),
        KeyCode::Char(c) => state.input_mut().push(c),
        _ => {}
    }
}

/// Dropped files arrive as a paste. A paste naming an existing file is treated
/// as an upload; anything else is typed into the focused field.
fn handle_paste(state: &mut AppState, text: &str) {
    if state.notice.is_some() {
        return;
    }
    match first_dropped_path(text) {
        Some(path) if path.is_file() => start_upload(state, path),
        _ => state.input_mut().push_str(text.trim_end_matches(&['\r', '\n'][..])),
    }
}

fn submit_input(state: &mut AppState) {
    let input = match state.focus {
        Focus::Repository => state.repo_input.clone(),
        Focus::Chat => state.chat_input.clone(),
    };

    if input.trim_start().starts_with('/') {
        let result = commands::handle_command(&input);
        if result != CommandResult::NotACommand {
            // Like chat text, a tool run keeps its input while a reply is pending.
            if matches!(result, CommandResult::Tool { .. }) && state.controller.is_awaiting() {
                return;
            }
            state.input_mut().clear();
            handle_command_result(state, result, &input);
            return;
        }
    }

    match state.focus {
        Focus::Repository => match resolve_from_url(&input) {
            Ok(handle) => state.select_repository(handle),
            Err(e) => state.show_notice("Repository", e.user_message(), true),
        },
        Focus::Chat => submit_chat(state, input),
    }
}

fn submit_chat(state: &mut AppState, input: String) {
    // Mirrors a disabled send control: blank input or an exchange in flight is ignored.
    if input.trim().is_empty() || state.controller.is_awaiting() {
        return;
    }
    match state.controller.submit_chat(&input) {
        Ok(pending) => {
            state.chat_input.clear();
            state.status_text = "Thinking...".into();
            state.scroll_to_bottom();
            let backend = state.backend.clone();
            let tx = state.events.clone();
            tokio::spawn(async move {
                let outcome = pending.dispatch(backend.as_ref()).await;
                let _ = tx.send(AppEvent::Exchange {
                    conversation: pending.conversation(),
                    outcome,
                });
            });
        }
        Err(e) => state.show_notice("Chat", e.user_message(), true),
    }
}

fn handle_command_result(state: &mut AppState, result: CommandResult, raw_input: &str) {
    match result {
        CommandResult::Message(msg) => state.show_notice("codechat", msg, false),
        CommandResult::Quit => state.should_quit = true,
        CommandResult::Clear => state.notice = None,
        CommandResult::SelectRepo(url) => match resolve_from_url(&url) {
            Ok(handle) => state.select_repository(handle),
            Err(e) => state.show_notice("Repository", e.user_message(), true),
        },
        CommandResult::Upload(path) => {
            let path = first_dropped_path(&path).unwrap_or_else(|| PathBuf::from(path));
            start_upload(state, path);
        }
        CommandResult::ListRepos => {
            let backend = state.backend.clone();
            let tx = state.events.clone();
            tokio::spawn(async move {
                let _ = tx.send(AppEvent::Repos(backend.list_repos().await));
            });
        }
        CommandResult::UseRepo(id) => {
            match state.known_repos.iter().find(|r| r.repo_id == id).cloned() {
                Some(repo) => match resolve_from_listing(&repo) {
                    Ok(handle) => state.select_repository(handle),
                    Err(e) => state.show_notice("Repository", e.user_message(), true),
                },
                None => state.show_notice(
                    "Repository",
                    format!("Unknown repository id '{id}'. Run /repos first."),
                    true,
                ),
            }
        }
        CommandResult::ForgetRepo(id) => {
            let backend = state.backend.clone();
            let tx = state.events.clone();
            tokio::spawn(async move {
                let outcome = backend.delete_repo(&id).await;
                let _ = tx.send(AppEvent::Forgotten {
                    repo_id: id,
                    outcome,
                });
            });
        }
        CommandResult::Tool { name, params } => {
            match state.controller.submit_tool(raw_input.trim(), &name, params) {
                Ok(pending) => {
                    state.status_text = format!("Running {name}...");
                    state.scroll_to_bottom();
                    let backend = state.backend.clone();
                    let tx = state.events.clone();
                    tokio::spawn(async move {
                        let outcome = pending.dispatch(backend.as_ref()).await;
                        let _ = tx.send(AppEvent::Exchange {
                            conversation: pending.conversation(),
                            outcome,
                        });
                    });
                }
                Err(e) => state.show_notice("Tool", e.user_message(), true),
            }
        }
        CommandResult::Health => {
            state.backend_status = "checking backend...".into();
            state.spawn_health_check();
        }
        CommandResult::ThemeChanged(name) => {
            if Theme::is_known(&name) {
                state.theme = Theme::by_name(&name);
            } else {
                state.show_notice(
                    "Theme",
                    format!("Unknown theme '{name}'. Available: {}", Theme::all_names().join(", ")),
                    true,
                );
            }
        }
        CommandResult::NotACommand => {}
    }
}

fn start_upload(state: &mut AppState, path: PathBuf) {
    // The upload control stays disabled while an upload is running.
    if state.resolver.is_busy() {
        state.show_notice("Upload", "An upload is already in progress.", true);
        return;
    }
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if let Err(e) = validate_archive_name(&filename) {
        state.show_notice("Upload", e.user_message(), true);
        return;
    }

    state.status_text = format!("Uploading {filename}...");
    let resolver = state.resolver.clone();
    let backend = state.backend.clone();
    let tx = state.events.clone();
    tokio::spawn(async move {
        let result = match UploadArtifact::from_path(&path).await {
            Ok(artifact) => resolver.resolve_from_upload(backend.as_ref(), artifact).await,
            Err(e) => Err(e),
        };
        let _ = tx.send(AppEvent::Uploaded(result));
    });
}

// ── Rendering ───────────────────────────────────────────────────────────

fn draw_ui(f: &mut ratatui::Frame, state: &mut AppState) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // repository field
            Constraint::Min(5),    // transcript
            Constraint::Length(3), // chat input
            Constraint::Length(1), // status
        ])
        .split(f.area());

    draw_repository_field(f, main_chunks[0], state);
    draw_transcript(f, main_chunks[1], state);
    draw_chat_input(f, main_chunks[2], state);
    draw_status_bar(f, main_chunks[3], state);

    if let Some(ref notice) = state.notice {
        draw_notice(f, notice, &state.theme);
    }
}

fn draw_repository_field(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Repository;
    let title = match state.controller.handle() {
        Some(handle) => format!(" Repository URL  (loaded: {handle}) "),
        None => " Repository URL  Enter to load, /upload <file.zip> ".to_string(),
    };

    let field = Paragraph::new(state.repo_input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(if focused { theme.accent } else { theme.border })),
        )
        .style(Style::default().fg(theme.fg));
    f.render_widget(field, area);

    if focused && state.notice.is_none() {
        set_cursor(f, area, &state.repo_input);
    }
}

fn draw_transcript(f: &mut ratatui::Frame, area: Rect, state: &mut AppState) {
    let theme = &state.theme;
    let lines = build_transcript_lines(state, theme);
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2) as usize;

    // Resolve scroll_to_bottom and clamp
    let max_scroll = total_lines.saturating_sub(visible_height);
    let scroll = state.scroll_offset.min(max_scroll);

    let transcript = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" codechat ")
                .border_style(Style::default().fg(theme.border)),
        )
        .wrap(Wrap { trim: false })
        .scroll((scroll as u16, 0));
    f.render_widget(transcript, area);

    if total_lines > visible_height {
        let mut scrollbar_state = ScrollbarState::new(max_scroll).position(scroll);
        f.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("^"))
                .end_symbol(Some("v")),
            area,
            &mut scrollbar_state,
        );
    }

    state.scroll_offset = scroll;
}

fn build_transcript_lines<'a>(state: &'a AppState, theme: &'a Theme) -> Vec<Line<'a>> {
    let muted = Style::default().fg(theme.muted);

    let Some(conversation) = state.controller.conversation() else {
        return vec![
            Line::from(""),
            Line::from(Span::styled("  No repository loaded.", muted)),
            Line::from(Span::styled(
                "  Paste a repository URL above, run /upload <file.zip>, or drop a .zip file here.",
                muted,
            )),
        ];
    };

    let transcript = conversation.transcript();
    let mut lines = Vec::new();

    if transcript.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Repository loaded! Start exploring...",
            Style::default().fg(theme.accent),
        )));
        lines.push(Line::from(Span::styled("  Try asking:", muted)));
        for prompt in SUGGESTED_PROMPTS {
            lines.push(Line::from(Span::styled(format!("    \"{prompt}\""), muted)));
        }
    }

    for turn in transcript {
        lines.extend(render_turn_lines(turn, theme));
        lines.push(Line::from(""));
    }

    if conversation.is_awaiting() {
        lines.push(Line::from(Span::styled(
            "AI > Thinking...",
            Style::default().fg(theme.busy).add_modifier(Modifier::ITALIC),
        )));
    }

    lines
}

/// The backend reports `"none"` when it answered without a tool.
fn shown_tool(turn: &Turn) -> Option<&str> {
    turn.tool_used().filter(|tool| *tool != "none")
}

fn render_turn_lines<'a>(turn: &'a Turn, theme: &'a Theme) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = Vec::new();

    let is_error = turn.role() == Role::Assistant
        && turn.tool_used().is_none()
        && turn.content().starts_with("Error: ");
    let (prefix, color) = match turn.role() {
        Role::User => ("You > ", theme.user_color),
        Role::Assistant if is_error => ("AI > ", theme.error),
        Role::Assistant => ("AI > ", theme.assistant_color),
    };
    let time = turn.at().with_timezone(&chrono::Local).format("%H:%M").to_string();

    if let Some(tool) = shown_tool(turn) {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(prefix.len())),
            Span::styled(format!("[tool: {tool}]"), Style::default().fg(theme.muted)),
        ]));
    }

    for (i, raw_line) in turn.content().lines().enumerate() {
        if i == 0 {
            lines.push(Line::from(vec![
                Span::styled(prefix, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(raw_line, Style::default().fg(color)),
                Span::styled(format!("  {time}"), Style::default().fg(theme.muted)),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(prefix.len())),
                Span::styled(raw_line, Style::default().fg(color)),
            ]));
        }
    }

    if turn.content().is_empty() {
        lines.push(Line::from(Span::styled(
            prefix,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
    }

    lines
}

fn draw_chat_input(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let focused = state.focus == Focus::Chat;
    let disabled = state.controller.conversation().is_none() || state.controller.is_awaiting();

    let title = if state.controller.conversation().is_none() {
        " Load a repository first "
    } else if state.controller.is_awaiting() {
        " Waiting for reply... "
    } else if state.chat_input.starts_with('/') {
        " Command "
    } else {
        " Ask about your codebase... "
    };

    let input = Paragraph::new(state.chat_input.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(if focused { theme.accent } else { theme.border })),
        )
        .style(Style::default().fg(if disabled { theme.muted } else { theme.fg }));
    f.render_widget(input, area);

    if focused && state.notice.is_none() {
        set_cursor(f, area, &state.chat_input);
    }
}

fn set_cursor(f: &mut ratatui::Frame, area: Rect, input: &str) {
    let cursor_x = area.x + input.chars().count() as u16 + 1;
    let max_x = area.x + area.width.saturating_sub(2);
    f.set_cursor_position((cursor_x.min(max_x), area.y + 1));
}

fn draw_status_bar(f: &mut ratatui::Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;

    let mut spans = vec![Span::styled(
        format!(" {} ", state.backend_status),
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )];
    if state.resolver.is_busy() {
        spans.push(Span::styled(
            "| Uploading and extracting... ",
            Style::default().fg(theme.busy),
        ));
    }
    if !state.status_text.is_empty() {
        spans.push(Span::styled(
            format!("| {} ", state.status_text),
            Style::default().fg(theme.muted),
        ));
    }
    spans.push(Span::styled(
        format!("| {} | Tab switch field, /help ", state.theme.name),
        Style::default().fg(theme.muted),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_notice(f: &mut ratatui::Frame, notice: &Notice, theme: &Theme) {
    let area = centered_rect(70, 60, f.area());
    let color = if notice.is_error { theme.error } else { theme.accent };

    let mut lines: Vec<Line> = notice
        .body
        .lines()
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.fg))))
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter or Esc to dismiss",
        Style::default().fg(theme.muted),
    )));

    let popup = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", notice.title))
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
