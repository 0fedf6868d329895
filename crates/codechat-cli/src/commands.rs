use codechat_core::backend::KNOWN_TOOLS;
use serde_json::Value;

/// Result of processing a slash command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandResult {
    /// Display a message to the user.
    Message(String),
    /// Quit the application.
    Quit,
    /// Select a repository by URL.
    SelectRepo(String),
    /// Upload an archive from disk.
    Upload(String),
    /// List archives the backend holds.
    ListRepos,
    /// Select a previously uploaded archive by id.
    UseRepo(String),
    /// Delete an uploaded archive on the backend.
    ForgetRepo(String),
    /// Invoke a backend tool directly.
    Tool { name: String, params: Value },
    /// Re-check backend health.
    Health,
    /// Dismiss the current notice.
    Clear,
    /// Change the theme.
    ThemeChanged(String),
    /// Not a command - treat as regular input.
    NotACommand,
}

pub fn handle_command(input: &str) -> CommandResult {
    let input = input.trim();
    let parts: Vec<&str> = input.splitn(2, ' ').collect();
    let cmd = parts[0];
    let arg = parts.get(1).map(|s| s.trim()).unwrap_or("");

    match cmd {
        "/help" | "/h" => show_help(),
        "/exit" | "/quit" | "/q" => CommandResult::Quit,
        "/clear" => CommandResult::Clear,

        // Repository commands
        "/repo" => {
            if arg.is_empty() {
                CommandResult::Message("Usage: /repo <repository-url>\nExample: /repo https://github.com/username/repository".into())
            } else {
                CommandResult::SelectRepo(arg.to_string())
            }
        }
        "/upload" => {
            if arg.is_empty() {
                CommandResult::Message("Usage: /upload <path-to-archive.zip>\nYou can also drop a .zip file onto the terminal.".into())
            } else {
                CommandResult::Upload(arg.to_string())
            }
        }
        "/repos" => CommandResult::ListRepos,
        "/use" => {
            if arg.is_empty() {
                CommandResult::Message("Usage: /use <repo-id>  (see /repos)".into())
            } else {
                CommandResult::UseRepo(arg.to_string())
            }
        }
        "/forget" => {
            if arg.is_empty() {
                CommandResult::Message("Usage: /forget <repo-id>  (see /repos)".into())
            } else {
                CommandResult::ForgetRepo(arg.to_string())
            }
        }

        // Backend commands
        "/tool" => parse_tool(arg),
        "/health" => CommandResult::Health,

        // Display commands
        "/theme" => {
            if arg.is_empty() {
                let themes = crate::theme::Theme::all_names().join(", ");
                CommandResult::Message(format!("Available themes: {themes}\nUsage: /theme <theme-name>"))
            } else {
                CommandResult::ThemeChanged(arg.to_string())
            }
        }
        "/version" => CommandResult::Message(format!("codechat v{}", env!("CARGO_PKG_VERSION"))),

        // Absolute paths and chat text that happen to start with '/'
        _ => CommandResult::NotACommand,
    }
}

fn parse_tool(arg: &str) -> CommandResult {
    if arg.is_empty() {
        return CommandResult::Message(format!(
            "Usage: /tool <name> [json-params]\nTools: {}\nExample: /tool find_symbols {{\"query\": \"main\"}}",
            KNOWN_TOOLS.join(", ")
        ));
    }

    let mut parts = arg.splitn(2, char::is_whitespace);
    let name = parts.next().unwrap_or_default().to_string();
    let raw_params = parts.next().map(str::trim).unwrap_or("");

    let params = if raw_params.is_empty() {
        Value::Object(Default::default())
    } else {
        match serde_json::from_str::<Value>(raw_params) {
            Ok(value @ Value::Object(_)) => value,
            Ok(_) => {
                return CommandResult::Message("Tool params must be a JSON object".into());
            }
            Err(e) => {
                return CommandResult::Message(format!("Invalid tool params: {e}"));
            }
        }
    };

    CommandResult::Tool { name, params }
}

fn show_help() -> CommandResult {
    let help_text = "\
╭─ codechat Commands ────────────────────────────────────────────╮

  REPOSITORY
    /repo <url>               Load a repository by URL
    /upload <path.zip>        Upload a zipped repository
    /repos                    List uploaded repositories
    /use <id>                 Load an uploaded repository
    /forget <id>              Delete an uploaded repository

  BACKEND
    /tool <name> [json]       Run a backend tool directly
    /health                   Check backend status

  DISPLAY
    /theme <name>             Change color theme
    /clear                    Dismiss the current notice

  OTHER
    /help, /h                 Show this help message
    /version                  Show version information
    /exit, /quit, /q          Quit the application

  Tab switches between the repository field and the chat field.
  Dropping a .zip file onto the terminal uploads it.

╰────────────────────────────────────────────────────────────────╯";

    CommandResult::Message(help_text.into())
}
