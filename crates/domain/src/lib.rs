pub mod catalog;
pub mod kind;
pub mod schema;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ContentError>;

/// Errors the content pipeline raises deliberately.
///
/// Validation failures are fatal for the affected document: content is
/// static, so there is nothing to retry and nothing to degrade to. The
/// caller (build or request layer) decides how to surface them.
#[derive(Debug, Error)]
pub enum ContentError {
    /// A document failed every accepted shape for its kind, or a
    /// derived-required field resolved to empty after its fallback chain.
    #[error("invalid content at `{field}`: {message}")]
    Validation { field: String, message: String },

    /// The document is not even shape-compatible with the kind's raw
    /// format (wrong types, missing structure).
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ContentError {
    #[inline]
    pub fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        ContentError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
