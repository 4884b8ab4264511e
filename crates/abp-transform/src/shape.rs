//! Shape normalization: placeholder padding and fixed-position columns.

use abp_model::{BASE_COLUMN_COUNT, INSERTED_COLUMNS, PipelineStage, SchemaError, placeholder_name};
use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::frame::{constant_column, has_column, null_column};

/// Pads `df` to [`BASE_COLUMN_COUNT`] columns and inserts the fixed columns.
///
/// Padding columns are null and named `Empty_<index>`. The fixed columns are
/// then inserted in increasing position order, each position counted against
/// the sequence as it stands at that moment, so the standard 21-column input
/// ends up 37 wide with the placeholders trailing. Fixed columns with an
/// empty value are null so they serialize as bare empty fields.
///
/// # Errors
///
/// [`SchemaError::ColumnExists`] if one of the fixed columns is already in `df`.
pub fn normalize_shape(df: &DataFrame) -> Result<DataFrame> {
    let height = df.height();
    let mut columns: Vec<Column> = df.get_columns().to_vec();

    let mut padded = 0usize;
    while columns.len() < BASE_COLUMN_COUNT {
        columns.push(null_column(&placeholder_name(columns.len()), height));
        padded += 1;
    }

    for inserted in &INSERTED_COLUMNS {
        if has_column(df, inserted.name) {
            return Err(SchemaError::ColumnExists {
                stage: PipelineStage::NormalizeShape,
                column: inserted.name.to_string(),
            }
            .into());
        }
        let column = if inserted.value.is_empty() {
            null_column(inserted.name, height)
        } else {
            constant_column(inserted.name, inserted.value, height)
        };
        columns.insert(inserted.position.min(columns.len()), column);
    }

    let normalized = DataFrame::new(columns)?;
    debug!(
        stage = %PipelineStage::NormalizeShape,
        rows = height,
        placeholders = padded,
        inserted = INSERTED_COLUMNS.len(),
        columns = normalized.width(),
        "normalized frame shape"
    );
    Ok(normalized)
}
