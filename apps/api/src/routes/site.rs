use std::io::ErrorKind;
use std::path::Path;

use anyhow::anyhow;
use axum::{
    extract::State,
    http::header,
    response::{Html, IntoResponse},
};

use crate::errors::AppError;
use crate::state::AppState;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const RESUME_SUBDIR: &str = "resume";

/// GET /
pub async fn handle_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let path = state.config.templates_dir.join(INDEX_TEMPLATE);
    let page = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| file_error(&path, e))?;
    Ok(Html(page))
}

/// GET /resume
pub async fn handle_resume(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let path = state
        .config
        .static_dir
        .join(RESUME_SUBDIR)
        .join(&state.config.resume_file);
    let pdf = tokio::fs::read(&path)
        .await
        .map_err(|e| file_error(&path, e))?;
    Ok(([(header::CONTENT_TYPE, "application/pdf")], pdf))
}

/// Fallback for unmatched routes and missing static assets.
pub async fn handle_not_found() -> AppError {
    AppError::NotFound("route".to_string())
}

fn file_error(path: &Path, e: std::io::Error) -> AppError {
    if e.kind() == ErrorKind::NotFound {
        AppError::NotFound(path.display().to_string())
    } else {
        AppError::Internal(anyhow!("Failed to read {}: {e}", path.display()))
    }
}
