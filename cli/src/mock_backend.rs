//! In-process stand-in for the RAG backend used by unit tests.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, response::IntoResponse};
use serde_json::{Value, json};
use wire::{ApiConfig, AskRequest};

/// Question that makes the mock `/ask` fail with a `detail`.
pub const FAILING_QUESTION: &str = "trigger failure";

/// Multipart uploads seen by the mock: `(field name, file name, byte count)`.
pub type Uploads = Arc<Mutex<Vec<(String, String, usize)>>>;

pub struct MockBackend {
    pub config: ApiConfig,
    pub uploads: Uploads,
}

pub async fn spawn() -> MockBackend {
    let uploads = Uploads::default();
    let app = Router::new()
        .route("/", get(health))
        .route("/documents/status", get(documents_status))
        .route("/ask", post(ask))
        .route("/upload", post(upload))
        .route("/reset", post(reset))
        .with_state(uploads.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    MockBackend { config: config_for(addr), uploads }
}

/// Config pointing at a port nothing listens on.
pub async fn unreachable_config() -> ApiConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    config_for(addr)
}

fn config_for(addr: SocketAddr) -> ApiConfig {
    ApiConfig::new(&format!("http://{addr}/")).unwrap()
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "message": "RAG backend running" }))
}

async fn documents_status() -> Json<Value> {
    Json(json!({ "has_documents": true, "document_count": 2 }))
}

async fn ask(Json(req): Json<AskRequest>) -> impl IntoResponse {
    if req.question == FAILING_QUESTION {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "detail": "Vector store offline" })));
    }
    let body = json!({
        "answer": format!("You asked: {}", req.question),
        "chunks": [
            {
                "source": "handbook.pdf",
                "chunk_id": 7,
                "text": "Refunds are processed\n\n within   five business days.",
                "score": 0.8123
            }
        ]
    });
    (StatusCode::OK, Json(body))
}

async fn upload(State(uploads): State<Uploads>, mut multipart: Multipart) -> impl IntoResponse {
    let mut accepted = false;
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_owned();
        let file_name = field.file_name().unwrap_or_default().to_owned();
        let bytes = field.bytes().await.unwrap();
        accepted |= name == "file";
        uploads.lock().unwrap().push((name, file_name, bytes.len()));
    }
    if accepted {
        (StatusCode::OK, Json(json!({ "added": 4 })))
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": [{ "loc": ["body", "file"], "msg": "Field required" }] })),
        )
    }
}

async fn reset() -> Json<Value> {
    Json(json!({ "message": "Index cleared" }))
}
