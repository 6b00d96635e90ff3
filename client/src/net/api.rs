//! REST calls to the RAG backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Transport`] since the
//! backend is only contacted from the browser after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<_, ApiError>`. Transport failures, non-2xx
//! statuses and undecodable bodies all become typed errors; components turn
//! them into status text through the state `finish_*` transitions.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::{ApiConfig, ApiError, AskResponse, DocumentsStatus};

#[cfg(any(test, feature = "hydrate"))]
fn ask_request(question: &str) -> wire::AskRequest {
    wire::AskRequest { question: question.to_owned() }
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable() -> ApiError {
    ApiError::Transport("backend calls are only available in the browser".to_owned())
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn read_body(resp: gloo_net::http::Response) -> Result<(u16, String), ApiError> {
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    Ok((status, body))
}

/// Ask a question via `POST {base}/ask`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the backend rejects it, or
/// the answer body is malformed.
pub async fn ask(config: &ApiConfig, question: &str) -> Result<AskResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(wire::ASK_PATH);
        let resp = gloo_net::http::Request::post(&url)
            .json(&ask_request(question))
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let (status, body) = read_body(resp).await?;
        if !(200..300).contains(&status) {
            log::warn!("ask failed with status {status}");
        }
        wire::interpret_ask(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, question);
        Err(unavailable())
    }
}

/// Upload a document via multipart `POST {base}/upload`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the form cannot be built, the request fails, or
/// the backend rejects the document.
#[cfg(feature = "hydrate")]
pub async fn upload(config: &ApiConfig, file: web_sys::File) -> Result<wire::UploadResponse, ApiError> {
    let form = web_sys::FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(wire::UPLOAD_FIELD, &file, &file.name())
        .map_err(js_error)?;

    let url = config.endpoint(wire::UPLOAD_PATH);
    let resp = gloo_net::http::Request::post(&url)
        .body(form)
        .map_err(transport)?
        .send()
        .await
        .map_err(transport)?;
    let (status, body) = read_body(resp).await?;
    if !(200..300).contains(&status) {
        log::warn!("upload of {} failed with status {status}", file.name());
    }
    wire::interpret_upload(status, &body)
}

#[cfg(feature = "hydrate")]
fn js_error(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Fetch the indexed-documents summary via `GET {base}/documents/status`.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is malformed.
pub async fn documents_status(config: &ApiConfig) -> Result<DocumentsStatus, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(wire::DOCUMENTS_STATUS_PATH);
        let resp = gloo_net::http::Request::get(&url).send().await.map_err(transport)?;
        let (status, body) = read_body(resp).await?;
        wire::interpret_json(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(unavailable())
    }
}
