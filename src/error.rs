//! Error types for the projection engine

use thiserror::Error;

/// Errors raised while validating inputs or running a projection
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("Invalid parameter: {field} ({reason})")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("Starting payment did not converge after {iterations} iterations (last balance: {last_balance:.4})")]
    NotConverged { iterations: u32, last_balance: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
