//! Chat session controller
//!
//! The controller owns the transcript and the request state and is the
//! only writer of either. A submission runs through two synchronous
//! phases around the network call:
//!
//! - [`ChatController::begin`] enforces the preconditions (non-empty
//!   trimmed input, no request in flight), appends the user message, and
//!   raises the in-flight flag.
//! - [`ChatController::complete`] appends exactly one assistant message —
//!   the answer with its citations on success, an error-prefixed report on
//!   failure — and clears the flag unconditionally.
//!
//! [`ChatController::submit`] composes the two around [`ApiClient::ask`],
//! so the flag can never be left stuck regardless of how the call ends.

use crate::api::{ApiClient, ChatResponse};
use crate::error::Result;
use crate::transcript::{Message, RequestState, Transcript};

/// Prefix for failure entries in the transcript
const ERROR_PREFIX: &str = "Error";

/// Owns the transcript, the session lifecycle of a question, and the
/// single-flight discipline
///
/// # Examples
///
/// ```
/// use ragchat::controller::ChatController;
///
/// let mut controller = ChatController::new("Hello!");
/// assert_eq!(controller.transcript().len(), 1);
/// assert!(!controller.is_busy());
///
/// // Whitespace-only input is silently ignored.
/// assert!(controller.begin("   ").is_none());
/// assert_eq!(controller.transcript().len(), 1);
/// ```
#[derive(Debug)]
pub struct ChatController {
    transcript: Transcript,
    state: RequestState,
}

impl ChatController {
    /// Create a controller with a transcript seeded by the greeting
    pub fn new(greeting: impl Into<String>) -> Self {
        Self {
            transcript: Transcript::new(greeting),
            state: RequestState::Idle,
        }
    }

    /// The transcript, in insertion order
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Current request state
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// True while a question is outstanding
    ///
    /// Rendering derives the transient "thinking" indicator from this;
    /// the indicator is never stored as a transcript entry.
    pub fn is_busy(&self) -> bool {
        self.state.is_in_flight()
    }

    /// Start a submission
    ///
    /// Returns the trimmed query when the submission is accepted, after
    /// appending the user message and raising the in-flight flag. Returns
    /// `None` — leaving the transcript untouched — when the trimmed input
    /// is empty or another request is already in flight. Rejection is a
    /// silent no-op, not an error.
    pub fn begin(&mut self, input: &str) -> Option<String> {
        let query = input.trim();
        if query.is_empty() || self.state.is_in_flight() {
            return None;
        }

        self.transcript.push(Message::user(query));
        self.state = RequestState::InFlight;
        Some(query.to_string())
    }

    /// Finish a submission
    ///
    /// Appends exactly one assistant message and returns the request state
    /// to idle. The reset happens on every path, success or failure, so a
    /// failed call can never block future submissions.
    pub fn complete(&mut self, outcome: Result<ChatResponse>) {
        let message = match outcome {
            Ok(response) => Message::assistant_with_sources(
                response.answer_text().to_string(),
                response.results,
            ),
            Err(e) => Message::assistant(format!("{}: {}", ERROR_PREFIX, e)),
        };
        self.transcript.push(message);
        self.state = RequestState::Idle;
    }

    /// Submit a question end to end
    ///
    /// Applies the [`begin`](Self::begin) preconditions, issues exactly one
    /// backend call, and records the outcome via
    /// [`complete`](Self::complete). No retries and no cancellation; the
    /// client's transport timeout is the only bound.
    ///
    /// # Returns
    ///
    /// Returns true when a request was actually issued, false when the
    /// submission was rejected by the preconditions.
    pub async fn submit(&mut self, client: &ApiClient, session_id: &str, input: &str) -> bool {
        let Some(query) = self.begin(input) else {
            return false;
        };

        let outcome = client.ask(&query, session_id).await;
        if let Err(e) = &outcome {
            tracing::warn!("Question failed: {}", e);
        }
        self.complete(outcome);
        true
    }
}
