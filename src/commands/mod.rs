/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.

It exposes four top-level command modules:

- `chat`    — Interactive chat session
- `ask`     — One-shot question
- `health`  — Backend reachability probe
- `session` — Session identifier management

These handlers are intentionally small and use the library components:
the API client, the session store, and the chat controller.
*/

use crate::api::ApiClient;
use crate::config::Config;
use crate::controller::ChatController;
use crate::error::Result;
use crate::render;
use crate::session::SessionStore;

/// Special commands recognized inside the interactive session
///
/// Slash-prefixed inputs (plus the bare `exit`/`quit`) modify or inspect
/// the session instead of being sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialCommand {
    /// Display help information
    Help,
    /// Display the session identifier and the configured endpoint
    Status,
    /// Exit the interactive session
    Exit,
    /// Input starts with `/` but matches no known command
    Unknown(String),
    /// Not a special command; submit to the backend
    None,
}

/// Parse a user input line into a special command
///
/// Commands are case-insensitive. Anything that does not start with `/`
/// (and is not `exit`/`quit`) is a regular question.
///
/// # Examples
///
/// ```
/// use ragchat::commands::{parse_special_command, SpecialCommand};
///
/// assert_eq!(parse_special_command("/help"), SpecialCommand::Help);
/// assert_eq!(parse_special_command("quit"), SpecialCommand::Exit);
/// assert_eq!(
///     parse_special_command("capital of France"),
///     SpecialCommand::None
/// );
/// ```
pub fn parse_special_command(input: &str) -> SpecialCommand {
    let trimmed = input.trim();
    let lower = trimmed.to_lowercase();

    if !trimmed.starts_with('/') {
        if lower == "exit" || lower == "quit" {
            return SpecialCommand::Exit;
        }
        return SpecialCommand::None;
    }

    match lower.as_str() {
        "/help" | "/h" | "/?" => SpecialCommand::Help,
        "/status" | "/session" => SpecialCommand::Status,
        "/exit" | "/quit" | "/q" => SpecialCommand::Exit,
        _ => SpecialCommand::Unknown(trimmed.to_string()),
    }
}

/// Print help for the interactive session commands
pub fn print_help() {
    println!("\nAvailable commands:");
    println!("  /help      Show this help");
    println!("  /status    Show the session identifier and endpoint");
    println!("  exit, quit Leave the chat session");
    println!("\nAnything else is sent to the backend as a question.\n");
}

/// Interactive chat command handler
pub mod chat {
    //! Interactive chat session handler.
    //!
    //! Loads the session identifier, seeds the transcript with the
    //! configured greeting, and runs a readline-based loop that submits
    //! user input through the chat controller and renders new transcript
    //! entries as they are appended.

    use super::*;
    use colored::Colorize;
    use rustyline::error::ReadlineError;
    use rustyline::DefaultEditor;

    /// Start an interactive chat session
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::commands::chat;
    /// use ragchat::config::Config;
    ///
    /// // In application code:
    /// // chat::run_chat(Config::default()).await?;
    /// ```
    pub async fn run_chat(config: Config) -> Result<()> {
        tracing::info!("Starting interactive chat session");

        let client = ApiClient::new(&config.api)?;
        let store = SessionStore::new()?;
        let session_id = store.load_or_create()?;
        tracing::debug!("Using session identifier: {}", session_id);

        let mut controller = ChatController::new(&config.chat.greeting);

        print_welcome_banner(client.endpoint());
        print!("{}", render::render_view(controller.transcript(), controller.state()));
        println!();

        let mut rl = DefaultEditor::new()?;

        loop {
            match rl.readline(">> ") {
                Ok(line) => {
                    let trimmed = line.trim();
                    if trimmed.is_empty() {
                        continue;
                    }

                    match parse_special_command(trimmed) {
                        SpecialCommand::Help => {
                            print_help();
                            continue;
                        }
                        SpecialCommand::Status => {
                            println!("Session:  {}", session_id);
                            println!("Endpoint: {}\n", client.endpoint());
                            continue;
                        }
                        SpecialCommand::Exit => break,
                        SpecialCommand::Unknown(cmd) => {
                            println!("Unknown command: {}. Type '/help' for help.\n", cmd);
                            continue;
                        }
                        SpecialCommand::None => {}
                    }

                    rl.add_history_entry(trimmed)?;

                    let before = controller.transcript().len();
                    print!("{}", render::thinking_indicator());

                    let submitted = controller.submit(&client, &session_id, trimmed).await;
                    if !submitted {
                        continue;
                    }

                    // Render everything this submission appended: the user
                    // echo and exactly one assistant entry.
                    for message in &controller.transcript().messages()[before..] {
                        print!("{}", render::render_message(message));
                    }
                    println!();
                }
                Err(ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {:?}", err);
                    break;
                }
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Display the welcome banner at session start
    ///
    /// # Arguments
    ///
    /// * `endpoint` - The configured backend endpoint
    fn print_welcome_banner(endpoint: &str) {
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║                 ragchat — document Q&A chat                  ║");
        println!("╚══════════════════════════════════════════════════════════════╝\n");
        println!("Backend: {}", endpoint.cyan());
        println!("Type '/help' for available commands, 'exit' to quit\n");
    }

}

/// One-shot question handler
pub mod ask {
    //! Sends a single question and prints the answer with its citations
    //! (or the raw backend JSON with `--json`). Failures propagate so the
    //! process exits non-zero.

    use super::*;

    /// Ask one question and print the result
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    /// * `question` - The question text
    /// * `json` - Print the raw backend response as pretty JSON
    pub async fn run_ask(config: Config, question: String, json: bool) -> Result<()> {
        tracing::info!("Submitting one-shot question");

        let client = ApiClient::new(&config.api)?;
        let store = SessionStore::new()?;
        let session_id = store.load_or_create()?;

        let response = client.ask(question.trim(), &session_id).await?;

        if json {
            println!("{}", serde_json::to_string_pretty(&response)?);
        } else {
            println!("{}", response.answer_text());
            if !response.results.is_empty() {
                print!("{}", render::render_sources(&response.results));
            }
        }
        Ok(())
    }

}

/// Backend health probe handler
pub mod health {
    //! Probes `GET /health` on the configured backend and reports the
    //! outcome. Mirrors the probe the backend exposes for its own
    //! deployment checks.

    use super::*;
    use colored::Colorize;

    /// Check that the backend is reachable
    ///
    /// # Arguments
    ///
    /// * `config` - Global configuration (consumed)
    pub async fn run_health(config: Config) -> Result<()> {
        tracing::info!("Probing backend health");

        let client = ApiClient::new(&config.api)?;
        match client.health().await {
            Ok(body) => {
                println!(
                    "{} {} ({})",
                    "Backend is healthy:".green(),
                    client.endpoint(),
                    body.trim()
                );
                Ok(())
            }
            Err(e) => {
                eprintln!("{} {}: {}", "Backend is unreachable:".red(), client.endpoint(), e);
                Err(e)
            }
        }
    }
}

/// Session identifier management handler
pub mod session {
    //! Shows or resets the persisted session identifier. The chat
    //! controller itself never destroys the identifier; reset is an
    //! explicit user action.

    use super::*;
    use crate::cli::SessionCommand;

    /// Handle `session show|reset`
    ///
    /// # Arguments
    ///
    /// * `command` - The session subcommand
    pub fn run_session(command: SessionCommand) -> Result<()> {
        let store = SessionStore::new()?;
        match command {
            SessionCommand::Show => {
                let id = store.load_or_create()?;
                println!("Session:  {}", id);
                println!("Stored at {}", store.path().display());
            }
            SessionCommand::Reset => {
                store.reset()?;
                println!("Session identifier removed; a new one will be generated on next use.");
            }
        }
        Ok(())
    }
}
