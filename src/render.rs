//! Transcript rendering
//!
//! Pure functions from transcript state to colored terminal text. The
//! rendered view is a function of (transcript, request state) and nothing
//! else: the "thinking" indicator shown while a request is in flight is
//! derived from [`RequestState`] here and is never a transcript entry.

use crate::transcript::{Message, RequestState, Role, Source, Transcript};
use colored::Colorize;

/// Render a single transcript entry
///
/// User entries are a prefixed line; assistant entries additionally carry
/// their sources block when citations are present.
pub fn render_message(message: &Message) -> String {
    let mut out = String::new();
    match message.role {
        Role::User => {
            out.push_str(&format!("{} {}\n", "You:".green().bold(), message.content));
        }
        Role::Assistant => {
            out.push_str(&format!(
                "{} {}\n",
                "Assistant:".cyan().bold(),
                message.content
            ));
            if !message.sources.is_empty() {
                out.push_str(&render_sources(&message.sources));
            }
        }
    }
    out
}

/// Render the sources block of an assistant entry
///
/// A citation renders as a link only when it has a real uri; the `#`
/// placeholder and absent uris render as plain text. Missing titles fall
/// back to "Untitled document".
pub fn render_sources(sources: &[Source]) -> String {
    let mut out = String::new();
    out.push_str(&format!("  {}\n", "Sources:".bold()));
    for source in sources {
        match source.link() {
            Some(uri) => {
                out.push_str(&format!(
                    "  - {} ({})\n",
                    source.display_title().blue().underline(),
                    uri
                ));
            }
            None => {
                out.push_str(&format!("  - {}\n", source.display_title()));
            }
        }
        if let Some(snippet) = source.snippet.as_deref() {
            if !snippet.is_empty() {
                out.push_str(&format!("    {}\n", snippet.dimmed()));
            }
        }
    }
    out
}

/// The transient indicator shown while a request is outstanding
pub fn thinking_indicator() -> String {
    format!("{}\n", "Thinking…".dimmed().italic())
}

/// Render the complete view for a transcript and request state
///
/// All entries in insertion order, followed by the thinking indicator when
/// a request is in flight. Pure: equal inputs produce equal output.
pub fn render_view(transcript: &Transcript, state: RequestState) -> String {
    let mut out = String::new();
    for message in transcript.messages() {
        out.push_str(&render_message(message));
    }
    if state.is_in_flight() {
        out.push_str(&thinking_indicator());
    }
    out
}
