//! Subcommand bodies.
//!
//! Each command writes its human-readable outcome to `out`; a failed request
//! becomes a [`CliError`] so the process exits non-zero. `chat` is the
//! exception: a failed question prints one error line and the loop goes on.

#[cfg(test)]
#[path = "commands_test.rs"]
mod tests;

use std::io::{BufRead, Write};
use std::path::Path;

use wire::display::{documents_label, upload_success_status};

use crate::CliError;
use crate::backend::BackendClient;
use crate::render;

pub async fn health(backend: &BackendClient, out: &mut impl Write) -> Result<(), CliError> {
    let health = backend.health().await?;
    writeln!(out, "{}", render::health_line(&health))?;
    Ok(())
}

pub async fn status(backend: &BackendClient, out: &mut impl Write) -> Result<(), CliError> {
    let status = backend.documents_status().await?;
    writeln!(out, "{}", documents_label(&status))?;
    Ok(())
}

pub async fn upload(backend: &BackendClient, path: &Path, out: &mut impl Write) -> Result<(), CliError> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| CliError::Io { path: path.display().to_string(), source })?;
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidPath(path.display().to_string()))?;

    tracing::info!(%filename, bytes = bytes.len(), "uploading");
    let resp = backend.upload(&filename, bytes).await.map_err(CliError::Upload)?;
    writeln!(out, "{}", upload_success_status(&resp))?;
    Ok(())
}

pub async fn ask(
    backend: &BackendClient,
    question: &str,
    with_sources: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(CliError::EmptyQuestion);
    }
    let resp = backend.ask(question).await.map_err(CliError::Ask)?;
    writeln!(out, "{}", render::answer_text(&resp))?;
    if with_sources && !resp.chunks.is_empty() {
        writeln!(out)?;
        for line in render::source_lines(&resp.chunks) {
            writeln!(out, "{line}")?;
        }
    }
    Ok(())
}

/// Ask each line of `input` until a blank line or end of input.
pub async fn chat(
    backend: &BackendClient,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    writeln!(out, "Enter a question (blank to quit).")?;
    loop {
        write!(out, "Q: ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let question = line.trim();
        if question.is_empty() {
            break;
        }

        match backend.ask(question).await {
            Ok(resp) => writeln!(out, "{}", render::answer_text(&resp))?,
            Err(err) => writeln!(out, "{}", render::ask_failure(&err))?,
        }
        writeln!(out)?;
    }
    Ok(())
}

pub async fn reset(backend: &BackendClient, out: &mut impl Write) -> Result<(), CliError> {
    let reset = backend.reset().await?;
    writeln!(out, "{}", render::reset_line(&reset))?;
    Ok(())
}
