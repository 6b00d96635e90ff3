#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use wire::display::documents_label;
use wire::{ApiError, DocumentsStatus};

/// Header badge summarizing what the backend has indexed.
///
/// Fetched once after hydration; it does not track later uploads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DocumentsBadge {
    #[default]
    Loading,
    Loaded(DocumentsStatus),
    Unavailable,
}

impl DocumentsBadge {
    pub fn from_outcome(outcome: Result<DocumentsStatus, ApiError>) -> Self {
        match outcome {
            Ok(status) => Self::Loaded(status),
            Err(_) => Self::Unavailable,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Loading => "Checking backend…".to_owned(),
            Self::Loaded(status) => documents_label(status),
            Self::Unavailable => "Backend unavailable".to_owned(),
        }
    }

    pub fn has_documents(&self) -> bool {
        matches!(self, Self::Loaded(status) if status.has_documents && status.document_count > 0)
    }
}
