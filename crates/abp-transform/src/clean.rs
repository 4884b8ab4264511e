//! Column cleanup and category exclusion.

use abp_model::{CATEGORY, CLASSIFICATION_CODE, PLACEHOLDER_MARKER, PipelineStage, is_excluded};
use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::frame::{keep_rows, require_columns, text_values};

/// Drops placeholder and classification-code columns, then excluded rows.
///
/// Rows are removed when `category` is exactly one of
/// [`abp_model::EXCLUDED_CATEGORIES`]. The comparison is case-sensitive, unlike
/// the categorizer; rows with a null category are kept.
///
/// # Errors
///
/// [`abp_model::SchemaError::MissingColumns`] if `category` or
/// `classification_code` is absent.
pub fn clean_and_filter(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, PipelineStage::CleanFilter, &[CATEGORY, CLASSIFICATION_CODE])?;

    let columns: Vec<Column> = df
        .get_columns()
        .iter()
        .filter(|column| {
            let name = column.name().as_str();
            !name.contains(PLACEHOLDER_MARKER) && name != CLASSIFICATION_CODE
        })
        .cloned()
        .collect();
    let dropped_columns = df.width() - columns.len();
    let trimmed = DataFrame::new(columns)?;

    let keep: Vec<bool> = text_values(&trimmed, CATEGORY)?
        .iter()
        .map(|category| !category.as_deref().is_some_and(is_excluded))
        .collect();
    let cleaned = keep_rows(&trimmed, &keep)?;

    debug!(
        stage = %PipelineStage::CleanFilter,
        dropped_columns,
        excluded_rows = trimmed.height() - cleaned.height(),
        rows = cleaned.height(),
        columns = cleaned.width(),
        "removed placeholder columns and excluded categories"
    );
    Ok(cleaned)
}
