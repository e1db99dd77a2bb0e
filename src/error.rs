//! Error types for the journal service
//!
//! Provides unified error handling using thiserror. No variant is fatal:
//! every failure degrades to a reported message while the in-memory
//! journal stays usable.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::journal::EntryId;

// == Journal Error Enum ==
/// Unified error type for the journal service.
#[derive(Error, Debug)]
pub enum JournalError {
    /// No entry with the given id
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// Entry data failed validation; carries every violated rule
    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    /// No deletion is pending, or its undo window already elapsed
    #[error("Nothing to undo")]
    NothingToUndo,

    /// Import payload was not a parseable entry list
    #[error("Import data could not be parsed: {0}")]
    ImportParse(String),

    /// Import payload parsed but contained no importable entries
    #[error("No importable entries found")]
    NothingToImport,

    /// Persistence slot could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for JournalError {
    fn into_response(self) -> Response {
        let status = match &self {
            JournalError::NotFound(_) => StatusCode::NOT_FOUND,
            JournalError::Validation(_) => StatusCode::BAD_REQUEST,
            JournalError::NothingToUndo => StatusCode::CONFLICT,
            JournalError::ImportParse(_) => StatusCode::BAD_REQUEST,
            JournalError::NothingToImport => StatusCode::UNPROCESSABLE_ENTITY,
            JournalError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            JournalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            // Validation keeps the individual messages addressable
            JournalError::Validation(errors) => Json(json!({
                "error": self.to_string(),
                "details": errors,
            })),
            _ => Json(json!({
                "error": self.to_string()
            })),
        };

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the journal service.
pub type Result<T> = std::result::Result<T, JournalError>;
