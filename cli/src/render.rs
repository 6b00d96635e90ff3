//! Plain-text rendering of backend outcomes for the terminal.

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use wire::display::{ASK_FAILED, CLI_PREVIEW_CHARS, NO_ANSWER, UPLOAD_FAILED, collapse_preview, error_status};
use wire::{ApiError, AskResponse, HealthResponse, ResetResponse, SourceChunk};

pub fn answer_text(resp: &AskResponse) -> &str {
    resp.answer.as_deref().unwrap_or(NO_ANSWER)
}

/// One header line and one indented preview line per chunk, numbered from 1.
pub fn source_lines(chunks: &[SourceChunk]) -> Vec<String> {
    let mut lines = Vec::with_capacity(chunks.len() * 2);
    for (i, chunk) in chunks.iter().enumerate() {
        let rank = i + 1;
        lines.push(match chunk.score {
            Some(score) => format!("{rank:>2}. score={score:.4}  {}  chunk={}", chunk.source, chunk.chunk_id),
            None => format!("{rank:>2}. {}  chunk={}", chunk.source, chunk.chunk_id),
        });
        lines.push(format!("    {}", collapse_preview(&chunk.text, CLI_PREVIEW_CHARS)));
    }
    lines
}

pub fn ask_failure(err: &ApiError) -> String {
    error_status(&err.describe_or(ASK_FAILED))
}

pub fn upload_failure(err: &ApiError) -> String {
    error_status(&err.detail_or(UPLOAD_FAILED))
}

pub fn health_line(health: &HealthResponse) -> String {
    match health.message.as_deref() {
        Some(message) if !message.is_empty() => format!("{}: {message}", health.status),
        _ => health.status.clone(),
    }
}

pub fn reset_line(reset: &ResetResponse) -> String {
    reset.message.clone().unwrap_or_else(|| "Index reset".to_owned())
}
