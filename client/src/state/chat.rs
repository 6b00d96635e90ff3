#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use wire::display::{ASK_FAILED, NO_ANSWER, SOURCE_PREVIEW_CHARS, error_status, sources_label, truncate_preview};
use wire::{ApiError, AskResponse, Role, SourceChunk};

use super::phase::RequestPhase;

/// State for the question/answer chat panel.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    /// Append-only transcript; insertion order is display order.
    pub messages: Vec<Message>,
    /// Current contents of the question input.
    pub draft: String,
    pub phase: RequestPhase,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Supporting excerpts; only ever non-empty on assistant answers.
    pub chunks: Vec<SourceChunk>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self { role: Role::User, content: content.into(), chunks: Vec::new() }
    }

    pub fn assistant(content: impl Into<String>, chunks: Vec<SourceChunk>) -> Self {
        Self { role: Role::Assistant, content: content.into(), chunks }
    }

    pub fn has_sources(&self) -> bool {
        self.role == Role::Assistant && !self.chunks.is_empty()
    }

    /// Collapsed sources section for this message, if it has one.
    pub fn sources_view(&self) -> Option<SourcesView> {
        if !self.has_sources() {
            return None;
        }
        let entries = self
            .chunks
            .iter()
            .map(|chunk| SourceEntry {
                source: chunk.source.clone(),
                caption: format!(" · chunk {}", chunk.chunk_id),
                preview: truncate_preview(&chunk.text, SOURCE_PREVIEW_CHARS),
            })
            .collect();
        Some(SourcesView { label: sources_label(self.chunks.len()), entries })
    }
}

/// Display form of an answer's cited chunks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourcesView {
    /// Summary text, e.g. `Sources (2)`.
    pub label: String,
    pub entries: Vec<SourceEntry>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceEntry {
    pub source: String,
    pub caption: String,
    pub preview: String,
}

impl ChatState {
    pub fn update_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_in_flight()
    }

    pub fn can_send(&self) -> bool {
        !self.is_loading() && !self.draft.trim().is_empty()
    }

    /// Start asking the current draft.
    ///
    /// Appends the trimmed question as a user message, clears the draft and
    /// enters the in-flight phase. Returns the question to send, or `None`
    /// (leaving everything untouched) when the draft is blank or a request is
    /// already outstanding.
    pub fn begin_send(&mut self) -> Option<String> {
        if !self.can_send() {
            return None;
        }
        let question = self.draft.trim().to_owned();
        self.messages.push(Message::user(question.clone()));
        self.draft.clear();
        self.phase = RequestPhase::InFlight;
        Some(question)
    }

    /// Record the outcome of the request started by [`Self::begin_send`].
    ///
    /// Appends exactly one assistant message, either the answer with its
    /// chunks or an error-prefixed explanation, then returns to idle. Ignored
    /// when no request is outstanding.
    pub fn finish_send(&mut self, outcome: Result<AskResponse, ApiError>) {
        if !self.is_loading() {
            return;
        }
        let reply = match outcome {
            Ok(resp) => {
                let answer = resp.answer.unwrap_or_else(|| NO_ANSWER.to_owned());
                Message::assistant(answer, resp.chunks)
            }
            Err(err) => Message::assistant(error_status(&err.describe_or(ASK_FAILED)), Vec::new()),
        };
        self.messages.push(reply);
        self.phase = RequestPhase::Idle;
    }
}
