//! Error types for the transformation stages.

use abp_model::SchemaError;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Errors that can occur while transforming an address frame.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A stage could not find the columns it needs.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<PolarsError> for TransformError {
    fn from(err: PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for transformation operations.
pub type Result<T> = std::result::Result<T, TransformError>;
