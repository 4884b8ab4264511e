//! Column selection and renaming.

use abp_model::{COLUMN_MAPPINGS, PipelineStage, required_source_columns};
use polars::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::frame::require_columns;

/// Projects the source columns into the 21-column target layout.
///
/// Source columns mapped twice (`EASTING`, `NORTHING`, `CATEGORY`) are copied
/// under each target name. Any other source column is dropped.
///
/// # Errors
///
/// [`abp_model::SchemaError::MissingColumns`] listing every required source
/// column absent from `df`.
pub fn select_and_rename(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, PipelineStage::SelectRename, &required_source_columns())?;

    let columns = COLUMN_MAPPINGS
        .iter()
        .map(|mapping| {
            df.column(mapping.source)
                .map(|column| column.clone().with_name(mapping.target.into()))
        })
        .collect::<PolarsResult<Vec<Column>>>()?;
    let selected = DataFrame::new(columns)?;

    debug!(
        stage = %PipelineStage::SelectRename,
        rows = selected.height(),
        columns = selected.width(),
        dropped_source_columns = df.width().saturating_sub(required_source_columns().len()),
        "selected and renamed source columns"
    );
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TransformError;
    use crate::frame::{column_names, text_values};
    use abp_model::SchemaError;

    fn source_frame(skip: &str) -> DataFrame {
        let columns = required_source_columns()
            .into_iter()
            .filter(|name| *name != skip)
            .map(|name| Column::new(name.into(), [format!("{name}-1"), format!("{name}-2")]))
            .chain(std::iter::once(Column::new("EXTRA".into(), ["x", "y"])))
            .collect();
        DataFrame::new(columns).unwrap()
    }

    #[test]
    fn test_select_and_rename_layout() {
        let df = select_and_rename(&source_frame("")).unwrap();

        assert_eq!(df.height(), 2);
        let names = column_names(&df);
        let expected: Vec<&str> = COLUMN_MAPPINGS.iter().map(|m| m.target).collect();
        assert_eq!(names, expected);
        assert!(!names.iter().any(|n| n == "EXTRA"));
    }

    #[test]
    fn test_duplicate_sources_copied() {
        let df = select_and_rename(&source_frame("")).unwrap();

        assert_eq!(
            text_values(&df, "x_coordina").unwrap(),
            text_values(&df, "Eastings").unwrap()
        );
        assert_eq!(
            text_values(&df, "category").unwrap(),
            text_values(&df, "main_category").unwrap()
        );
        assert_eq!(
            text_values(&df, "Northings").unwrap()[1].as_deref(),
            Some("NORTHING-2")
        );
    }

    #[test]
    fn test_missing_postcode_is_schema_error() {
        let err = select_and_rename(&source_frame("POSTCODE")).unwrap_err();

        match err {
            TransformError::Schema(SchemaError::MissingColumns { stage, columns }) => {
                assert_eq!(stage, PipelineStage::SelectRename);
                assert_eq!(columns, vec!["POSTCODE".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
