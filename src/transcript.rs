//! Transcript types for the chat session
//!
//! This module defines the transcript building blocks: message roles,
//! source citations, messages, the append-only transcript itself, and the
//! request state flag that implements the single-flight discipline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Title shown for a citation that carries none
pub const UNTITLED_DOCUMENT: &str = "Untitled document";

/// Placeholder URI that marks a citation as non-navigable
pub const PLACEHOLDER_URI: &str = "#";

/// Role of a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A question typed by the user
    User,
    /// An answer (or error report) from the assistant
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// A citation attached to an assistant message
///
/// All fields are optional on the wire; display code falls back to
/// [`UNTITLED_DOCUMENT`] for the title and treats an absent or
/// [`PLACEHOLDER_URI`] uri as non-navigable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Document link
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,

    /// Supporting text extracted from the document
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
}

impl Source {
    /// Title to display, falling back to [`UNTITLED_DOCUMENT`]
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::transcript::Source;
    ///
    /// let source = Source::default();
    /// assert_eq!(source.display_title(), "Untitled document");
    /// ```
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => UNTITLED_DOCUMENT,
        }
    }

    /// The navigable link, if this citation has one
    ///
    /// Returns `None` when the uri is absent, empty, or the placeholder
    /// value `#`.
    pub fn link(&self) -> Option<&str> {
        match self.uri.as_deref() {
            Some(uri) if !uri.is_empty() && uri != PLACEHOLDER_URI => Some(uri),
            _ => None,
        }
    }
}

/// One transcript entry
///
/// Messages are immutable once created; the transcript only ever appends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who produced this entry
    pub role: Role,
    /// The entry text
    pub content: String,
    /// Citations supporting the content (assistant messages only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<Source>,
}

impl Message {
    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    /// Create an assistant message without citations
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources: Vec::new(),
        }
    }

    /// Create an assistant message with citations
    pub fn assistant_with_sources(content: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            sources,
        }
    }
}

/// Whether a question is currently outstanding
///
/// At most one request may be in flight at a time; the controller rejects
/// submissions while this is [`RequestState::InFlight`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    /// No outstanding request
    #[default]
    Idle,
    /// Exactly one request is awaiting its response
    InFlight,
}

impl RequestState {
    /// True while a request is outstanding
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }
}

impl fmt::Display for RequestState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::InFlight => write!(f, "in-flight"),
        }
    }
}

/// Ordered, append-only sequence of messages shown to the user
///
/// A new transcript always carries exactly one seeded assistant greeting.
/// Entries are never mutated or removed after insertion; the transient
/// "thinking" indicator is rendering state and is deliberately not
/// representable here.
#[derive(Debug, Clone)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a transcript seeded with the assistant greeting
    ///
    /// # Examples
    ///
    /// ```
    /// use ragchat::transcript::{Role, Transcript};
    ///
    /// let transcript = Transcript::new("Hello!");
    /// assert_eq!(transcript.len(), 1);
    /// assert_eq!(transcript.messages()[0].role, Role::Assistant);
    /// ```
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::assistant(greeting)],
        }
    }

    /// Append a message
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// All messages, in insertion order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The most recent message
    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if the transcript holds no messages
    ///
    /// Never true for a transcript built with [`Transcript::new`].
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
