//! ragchat - Terminal chat client
//!
#![doc = "ragchat - Terminal chat client for a document QA backend"]
#![doc = "Main entry point for the ragchat application."]

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ragchat::cli::{Cli, Commands};
use ragchat::commands;
use ragchat::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli.config.as_deref().unwrap_or("config/config.yaml");
    let config = Config::load(config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat => {
            tracing::info!("Starting interactive chat session");
            commands::chat::run_chat(config).await?;
            Ok(())
        }
        Commands::Ask { question, json } => {
            tracing::info!("Starting one-shot question");
            commands::ask::run_ask(config, question, json).await?;
            Ok(())
        }
        Commands::Health => {
            tracing::info!("Starting backend health probe");
            commands::health::run_health(config).await?;
            Ok(())
        }
        Commands::Session { command } => {
            tracing::info!("Starting session management command");
            commands::session::run_session(command)?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "ragchat=debug" } else { "ragchat=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
