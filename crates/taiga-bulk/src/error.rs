use taiga_core::ErrorKind;
use thiserror::Error;

/// Reasons a bulk run is refused before any upstream call.
#[derive(Debug, Error)]
pub enum BulkError {
    #[error("No tasks provided")]
    EmptyBatch,
}

impl BulkError {
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        ErrorKind::Conflict
    }
}
