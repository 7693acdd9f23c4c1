use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("content error: {0}")]
    Content(#[from] domain::ContentError),

    #[error("document not found: {0}")]
    NotFound(PathBuf),

    #[error("{0} document(s) failed validation")]
    CheckFailed(usize),
}
