//! ragchat - Terminal chat client library
//!
//! This library provides the core functionality for the ragchat client:
//! the chat session controller, the backend API client, session
//! identifier storage, transcript types, and rendering.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `controller`: The chat session state machine and submit cycle
//! - `transcript`: Messages, source citations, and the append-only transcript
//! - `api`: HTTP client for the question-answering backend
//! - `session`: Persistent session identifier storage
//! - `render`: Pure transcript-to-terminal rendering
//! - `config`: Configuration management and validation
//! - `error`: Error types and result aliases
//! - `cli`: Command-line interface definition
//!
//! # Example
//!
//! ```no_run
//! use ragchat::{ApiClient, ChatController, Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     config.validate()?;
//!
//!     let client = ApiClient::new(&config.api)?;
//!     let mut controller = ChatController::new(&config.chat.greeting);
//!     controller.submit(&client, "cli-abc12345", "capital of France").await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod session;
pub mod transcript;

// Re-export commonly used types
pub use api::{ApiClient, ChatResponse};
pub use config::Config;
pub use controller::ChatController;
pub use error::{RagchatError, Result};
pub use session::SessionStore;
pub use transcript::{Message, RequestState, Role, Source, Transcript};

#[cfg(test)]
pub mod test_utils;
