//! Schema errors raised by pipeline stages.

use thiserror::Error;

use crate::schema::PipelineStage;

/// A stage found the frame in a shape it cannot process.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// One or more required columns are absent.
    #[error("{stage}: missing required column(s): {}", .columns.join(", "))]
    MissingColumns {
        stage: PipelineStage,
        columns: Vec<String>,
    },

    /// A column the stage adds is already present.
    #[error("{stage}: column '{column}' already exists")]
    ColumnExists {
        stage: PipelineStage,
        column: String,
    },
}

impl SchemaError {
    pub fn missing<I, S>(stage: PipelineStage, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::MissingColumns {
            stage,
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::MissingColumns { stage, .. } | Self::ColumnExists { stage, .. } => *stage,
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
