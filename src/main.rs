use anyhow::Result;
use clap::Parser;
use log::info;

use interview_cli::cli::Cli;
use interview_cli::config::Config;
use interview_cli::tui;
use interview_cli::tui::ThemeVariant;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger to file (truncate on each run): the TUI owns the
    // terminal, so nothing may write to stderr while it runs.
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open("interview-cli.log")?;
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load()?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    let variant = if cli.light {
        ThemeVariant::Latte
    } else {
        ThemeVariant::Mocha
    };

    info!("Starting interview-cli against {}", config.endpoint);
    tui::run(config, variant).await
}
