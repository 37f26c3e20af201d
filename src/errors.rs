use thiserror::Error;

use crate::domain::BillId;

/// Error type that captures the few failures bill handling can report.
///
/// Editing or removing an unknown bill is not represented here: both are
/// silent no-ops on [`crate::core::BillStore`].
#[derive(Debug, Error)]
pub enum BillError {
    #[error("Bill id already in use: {0}")]
    DuplicateId(BillId),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
