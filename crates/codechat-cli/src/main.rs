use anyhow::Result;
use clap::Parser;

mod app;
mod commands;
mod theme;

#[derive(Parser)]
#[command(name = "codechat")]
#[command(about = "codechat - ask an analysis backend anything about a repository")]
#[command(version)]
struct Cli {
    /// Repository URL (or uploaded repository path) to load on start
    #[arg(short, long)]
    repo: Option<String>,

    /// Send a single message about --repo, print the reply and exit
    #[arg(short, long, requires = "repo")]
    prompt: Option<String>,

    /// Backend base URL (overrides config and CODECHAT_BACKEND_URL)
    #[arg(long)]
    backend_url: Option<String>,

    /// Color theme (dark, tokyo-night, dracula)
    #[arg(long)]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings = codechat_core::Settings::load();
    if let Some(url) = cli.backend_url {
        settings.backend.base_url = url;
    }
    if let Some(theme) = cli.theme {
        settings.ui.theme = theme;
    }

    match (cli.prompt, cli.repo) {
        (Some(prompt), Some(repo)) => app::run_single_prompt(&settings, &repo, &prompt).await?,
        (_, repo) => app::run_tui(settings, repo).await?,
    }

    Ok(())
}
