mod backend;
mod commands;
#[cfg(test)]
mod mock_backend;
mod render;

use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wire::{ApiConfig, ApiError, DEFAULT_API_BASE};

use crate::backend::BackendClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(ApiError),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{}", render::ask_failure(.0))]
    Ask(ApiError),
    #[error("{}", render::upload_failure(.0))]
    Upload(ApiError),
    #[error("backend request failed: {}", .0.describe_or("no response"))]
    Api(#[from] ApiError),
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: io::Error },
    #[error("path has no file name: {0}")]
    InvalidPath(String),
    #[error("question is empty")]
    EmptyQuestion,
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "ragmini", about = "Upload documents to and ask questions of a RAG Mini backend")]
struct Cli {
    #[arg(long, env = "RAGMINI_API_BASE", default_value = DEFAULT_API_BASE)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the backend is up.
    Health,
    /// Show how many documents are indexed.
    Status,
    /// Index a PDF, TXT or Markdown document.
    Upload { path: PathBuf },
    /// Ask a single question.
    Ask {
        question: String,
        /// List the retrieved source chunks after the answer.
        #[arg(long, default_value_t = false)]
        sources: bool,
    },
    /// Ask questions read from stdin until a blank line.
    Chat,
    /// Drop every indexed document.
    Reset,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = ApiConfig::new(&cli.base_url).map_err(CliError::InvalidBaseUrl)?;
    let backend = BackendClient::new(config)?;
    tracing::debug!(base_url = backend.config().base_url(), "backend configured");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Health => commands::health(&backend, &mut out).await,
        Command::Status => commands::status(&backend, &mut out).await,
        Command::Upload { path } => commands::upload(&backend, &path, &mut out).await,
        Command::Ask { question, sources } => commands::ask(&backend, &question, sources, &mut out).await,
        Command::Chat => {
            let mut input = BufReader::new(io::stdin());
            commands::chat(&backend, &mut input, &mut out).await
        }
        Command::Reset => commands::reset(&backend, &mut out).await,
    }
}
