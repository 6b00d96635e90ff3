#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use wire::display::{SELECT_FILE_FIRST, UPLOAD_FAILED, UPLOADING_STATUS, error_status, upload_success_status};
use wire::{ApiError, UploadResponse};

use super::phase::RequestPhase;

/// State for the document upload panel.
#[derive(Clone, Debug, Default)]
pub struct UploadState {
    pub selected: Option<SelectedFile>,
    /// Status line shown under the upload controls; empty hides it.
    pub status: String,
    pub phase: RequestPhase,
}

/// Metadata of the file picked in the browser.
///
/// The browser handle itself is not `Send` and stays with the component.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

impl UploadState {
    /// Replace the pending file (or clear it) and drop any previous status.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        self.selected = file;
        self.status.clear();
    }

    pub fn is_uploading(&self) -> bool {
        self.phase.is_in_flight()
    }

    pub fn can_submit(&self) -> bool {
        !self.is_uploading() && self.selected.is_some()
    }

    /// Start uploading the selected file.
    ///
    /// Returns the file to send and enters the in-flight phase. With no file
    /// selected the status becomes a validation message and `None` is
    /// returned; while a request is outstanding nothing changes.
    pub fn begin_upload(&mut self) -> Option<SelectedFile> {
        if self.is_uploading() {
            return None;
        }
        let Some(file) = self.selected.clone() else {
            self.status = SELECT_FILE_FIRST.to_owned();
            return None;
        };
        self.status = UPLOADING_STATUS.to_owned();
        self.phase = RequestPhase::InFlight;
        Some(file)
    }

    /// Record the outcome of the request started by [`Self::begin_upload`].
    pub fn finish_upload(&mut self, outcome: Result<UploadResponse, ApiError>) {
        if !self.is_uploading() {
            return;
        }
        self.status = match outcome {
            Ok(resp) => upload_success_status(&resp),
            Err(err) => error_status(&err.detail_or(UPLOAD_FAILED)),
        };
        self.phase = RequestPhase::Idle;
    }
}
