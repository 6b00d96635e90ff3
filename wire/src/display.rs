//! User-facing strings shared by the browser UI and the CLI.
//!
//! Both front-ends must render the same outcome the same way, so status
//! lines, fallbacks and preview truncation live here rather than in either
//! front-end.

#[cfg(test)]
#[path = "display_test.rs"]
mod tests;

use crate::types::{DocumentsStatus, UploadResponse};

/// Status shown while an upload is in flight.
pub const UPLOADING_STATUS: &str = "Uploading…";
/// Status shown when upload is requested with no file selected.
pub const SELECT_FILE_FIRST: &str = "Select a file first.";
/// Upload failure text when the backend gives no detail.
pub const UPLOAD_FAILED: &str = "Upload failed";
/// Chat failure text when neither backend nor transport explain the error.
pub const ASK_FAILED: &str = "Request failed. Check backend logs.";
/// Assistant content when the backend returns no answer.
pub const NO_ANSWER: &str = "(no answer)";
/// Maximum characters of a source chunk shown in the UI.
pub const SOURCE_PREVIEW_CHARS: usize = 240;
/// Maximum characters of a source chunk shown by the CLI.
pub const CLI_PREVIEW_CHARS: usize = 140;

const ELLIPSIS: char = '…';

/// Success status after an upload, with the indexed chunk count when known.
#[must_use]
pub fn upload_success_status(resp: &UploadResponse) -> String {
    match resp.added {
        Some(1) => "✅ Document indexed successfully (1 chunk)".to_owned(),
        Some(count) => format!("✅ Document indexed successfully ({count} chunks)"),
        None => "✅ Document indexed successfully".to_owned(),
    }
}

/// Error-prefixed rendering of a failure message.
#[must_use]
pub fn error_status(message: &str) -> String {
    format!("❌ {message}")
}

/// Label for a collapsed list of `count` source chunks.
#[must_use]
pub fn sources_label(count: usize) -> String {
    format!("Sources ({count})")
}

/// Short summary of the backend index.
#[must_use]
pub fn documents_label(status: &DocumentsStatus) -> String {
    match (status.has_documents, status.document_count) {
        (false, _) | (true, 0) => "No documents yet".to_owned(),
        (true, 1) => "1 document indexed".to_owned(),
        (true, count) => format!("{count} documents indexed"),
    }
}

/// Cut `text` to `max_chars` characters, marking the cut with an ellipsis.
///
/// Text at or under the limit is returned unchanged.
#[must_use]
pub fn truncate_preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => {
            let mut out = text[..cut].to_owned();
            out.push(ELLIPSIS);
            out
        }
        None => text.to_owned(),
    }
}

/// Collapse runs of whitespace to single spaces, then truncate.
#[must_use]
pub fn collapse_preview(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_preview(&collapsed, max_chars)
}
