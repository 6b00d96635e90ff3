//! HTTP client for the RAG backend.
//!
//! Requests go out through `reqwest`; every response is handed to the shared
//! `wire` interpreters so status and `detail` handling match the browser UI.

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;

use reqwest::multipart::{Form, Part};
use wire::{
    ASK_PATH, ApiConfig, ApiError, AskRequest, AskResponse, DOCUMENTS_STATUS_PATH, DocumentsStatus, HEALTH_PATH,
    HealthResponse, RESET_PATH, ResetResponse, UPLOAD_FIELD, UPLOAD_PATH, UploadResponse, interpret_ask,
    interpret_json, interpret_upload,
};

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl BackendClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ragmini-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `GET /`.
    ///
    /// # Errors
    ///
    /// Transport, status and decode failures as [`ApiError`].
    pub async fn health(&self) -> Result<HealthResponse, ApiError> {
        let (status, body) = read(self.http.get(self.config.endpoint(HEALTH_PATH)).send().await).await?;
        interpret_json(status, &body)
    }

    /// `GET /documents/status`.
    ///
    /// # Errors
    ///
    /// Transport, status and decode failures as [`ApiError`].
    pub async fn documents_status(&self) -> Result<DocumentsStatus, ApiError> {
        let (status, body) = read(self.http.get(self.config.endpoint(DOCUMENTS_STATUS_PATH)).send().await).await?;
        interpret_json(status, &body)
    }

    /// `POST /ask` with `{question}`.
    ///
    /// # Errors
    ///
    /// Transport, status and decode failures as [`ApiError`].
    pub async fn ask(&self, question: &str) -> Result<AskResponse, ApiError> {
        let body = AskRequest { question: question.to_owned() };
        let url = self.config.endpoint(ASK_PATH);
        tracing::debug!(%url, "asking backend");
        let (status, body) = read(self.http.post(url).json(&body).send().await).await?;
        interpret_ask(status, &body)
    }

    /// Multipart `POST /upload` of an in-memory document.
    ///
    /// # Errors
    ///
    /// Transport, status and decode failures as [`ApiError`].
    pub async fn upload(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadResponse, ApiError> {
        let part = Part::bytes(bytes).file_name(filename.to_owned());
        let form = Form::new().part(UPLOAD_FIELD, part);
        let url = self.config.endpoint(UPLOAD_PATH);
        tracing::debug!(%url, filename, "uploading document");
        let (status, body) = read(self.http.post(url).multipart(form).send().await).await?;
        interpret_upload(status, &body)
    }

    /// `POST /reset`.
    ///
    /// # Errors
    ///
    /// Transport, status and decode failures as [`ApiError`].
    pub async fn reset(&self) -> Result<ResetResponse, ApiError> {
        let (status, body) = read(self.http.post(self.config.endpoint(RESET_PATH)).send().await).await?;
        interpret_json(status, &body)
    }
}

async fn read(sent: Result<reqwest::Response, reqwest::Error>) -> Result<(u16, String), ApiError> {
    let response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response.text().await.map_err(|e| ApiError::Transport(e.to_string()))?;
    if !(200..300).contains(&status) {
        tracing::warn!(status, "backend returned error status");
    }
    Ok((status, body))
}
