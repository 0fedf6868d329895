// Library interface for codechat-cli so integration tests can reach the
// command parser and themes. The binary declares the same files as its own modules.

#[path = "commands.rs"]
pub mod commands;

#[path = "theme.rs"]
pub mod theme;

pub use commands::{handle_command, CommandResult};
pub use theme::Theme;
