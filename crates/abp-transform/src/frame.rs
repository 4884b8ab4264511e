//! Small DataFrame helpers shared by the stages.

use abp_model::{PipelineStage, SchemaError};
use polars::prelude::*;

/// Column names in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect()
}

pub(crate) fn has_column(df: &DataFrame, name: &str) -> bool {
    df.column(name).is_ok()
}

/// Fails with [`SchemaError::MissingColumns`] naming every absent column.
pub(crate) fn require_columns(
    df: &DataFrame,
    stage: PipelineStage,
    required: &[&str],
) -> Result<(), SchemaError> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|name| !has_column(df, name))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(SchemaError::missing(stage, missing))
    }
}

/// A column holding `value` on every row.
pub(crate) fn constant_column(name: &str, value: &str, height: usize) -> Column {
    Column::new(name.into(), vec![value; height])
}

/// A null text column.
pub(crate) fn null_column(name: &str, height: usize) -> Column {
    Series::full_null(name.into(), height, &DataType::String).into_column()
}

/// Keeps the rows whose flag is true, preserving order.
pub(crate) fn keep_rows(df: &DataFrame, keep: &[bool]) -> PolarsResult<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    df.filter(&mask)
}

/// Values of a column rendered as text; nulls stay `None`.
pub(crate) fn text_values(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?.cast(&DataType::String)?;
    Ok(column
        .str()?
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_columns_lists_all_missing() {
        let df = DataFrame::new(vec![Column::new("uprn".into(), ["1"])]).unwrap();
        let err = require_columns(&df, PipelineStage::CleanFilter, &["category", "uprn", "x"])
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::missing(PipelineStage::CleanFilter, ["category", "x"])
        );
    }

    #[test]
    fn test_keep_rows_preserves_order() {
        let df = DataFrame::new(vec![Column::new("uprn".into(), ["1", "2", "3"])]).unwrap();
        let kept = keep_rows(&df, &[true, false, true]).unwrap();
        assert_eq!(
            text_values(&kept, "uprn").unwrap(),
            vec![Some("1".to_string()), Some("3".to_string())]
        );
    }

    #[test]
    fn test_text_values_casts_numbers() {
        let df = DataFrame::new(vec![Column::new("mdu_count".into(), [3i64, 0])]).unwrap();
        assert_eq!(
            text_values(&df, "mdu_count").unwrap(),
            vec![Some("3".to_string()), Some("0".to_string())]
        );
    }

    #[test]
    fn test_null_column_is_text() {
        let column = null_column("Empty_21", 2);
        assert_eq!(column.dtype(), &DataType::String);
        assert_eq!(column.null_count(), 2);
    }
}
