//! Command-line interface definition for ragchat
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for interactive chat, one-shot questions, backend
//! health checks, and session identifier management.

use clap::{Parser, Subcommand};

/// ragchat - Terminal chat client for a document QA backend
///
/// Ask questions against a retrieval-augmented backend and read the
/// answers, with source citations, in your terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "ragchat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the backend API origin (e.g. http://localhost:8080)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for ragchat
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat session
    Chat,

    /// Ask a single question and print the answer
    Ask {
        /// The question to send
        question: String,

        /// Print the raw backend response as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that the backend is reachable
    Health,

    /// Manage the persisted session identifier
    Session {
        /// Session subcommand
        #[command(subcommand)]
        command: SessionCommand,
    },
}

/// Session identifier subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum SessionCommand {
    /// Show the current session identifier (creating one if absent)
    Show,

    /// Delete the persisted session identifier
    ///
    /// A fresh identifier will be generated on the next request.
    Reset,
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: None,
            endpoint: None,
            verbose: false,
            command: Commands::Chat,
        }
    }
}
