//! Backend contract for the RAG Mini document Q&A service.
//!
//! This crate owns the HTTP wire representation consumed by both `client`
//! (browser, via `gloo-net`) and `cli` (native, via `reqwest`). It never
//! performs I/O itself: front-ends send the request, then hand the raw status
//! code and body to the `interpret_*` functions so that success decoding and
//! error-detail extraction behave identically everywhere.

pub mod config;
pub mod display;
pub mod error;
pub mod interpret;
pub mod types;

pub use config::{ApiConfig, DEFAULT_API_BASE};
pub use error::ApiError;
pub use interpret::{extract_detail, interpret_ask, interpret_json, interpret_upload};
pub use types::{
    AskRequest, AskResponse, DocumentsStatus, HealthResponse, ResetResponse, Role, SourceChunk,
    UploadResponse,
};

/// Path of the question-answering endpoint.
pub const ASK_PATH: &str = "/ask";
/// Path of the multipart document ingestion endpoint.
pub const UPLOAD_PATH: &str = "/upload";
/// Multipart form field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";
/// Path of the indexed-documents summary endpoint.
pub const DOCUMENTS_STATUS_PATH: &str = "/documents/status";
/// Path of the backend liveness endpoint.
pub const HEALTH_PATH: &str = "/";
/// Path of the index reset endpoint.
pub const RESET_PATH: &str = "/reset";
