//! Request and response bodies exchanged with the backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use serde::{Deserialize, Deserializer, Serialize};

/// Chunk id reported by the backend when a retrieved payload lacks one.
pub const MISSING_CHUNK_ID: i64 = -1;

/// Author of a transcript message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    User,
    Assistant,
    System,
}

/// A retrieved excerpt cited in support of an answer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SourceChunk {
    /// Document name the excerpt was taken from.
    #[serde(default)]
    pub source: String,
    /// Position of the chunk within its document.
    #[serde(default = "missing_chunk_id")]
    pub chunk_id: i64,
    /// The excerpt itself.
    #[serde(default)]
    pub text: String,
    /// Similarity score assigned by the retriever, when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

fn missing_chunk_id() -> i64 {
    MISSING_CHUNK_ID
}

/// Body of `POST /ask`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Successful `POST /ask` response.
///
/// Both fields tolerate being absent or `null`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chunks: Vec<SourceChunk>,
}

/// Successful `POST /upload` response.
///
/// Backends report either an `added` chunk count or a `message`/`filename`
/// pair; every field is optional so either shape decodes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub added: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// `GET /documents/status` response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentsStatus {
    #[serde(default)]
    pub has_documents: bool,
    #[serde(default)]
    pub document_count: u64,
}

/// `GET /` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// `POST /reset` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetResponse {
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
