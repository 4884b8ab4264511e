//! Coarse categorization and residual filtering.

use abp_model::{CATEGORY, MAIN_CATEGORY, MainCategory, PipelineStage};
use polars::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::frame::{keep_rows, require_columns, text_values};

/// Row counts per coarse category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub residential: usize,
    pub business: usize,
    pub other: usize,
}

impl CategoryCounts {
    fn add(&mut self, category: MainCategory) {
        match category {
            MainCategory::Residential => self.residential += 1,
            MainCategory::Business => self.business += 1,
            MainCategory::Other => self.other += 1,
        }
    }
}

/// Overwrites `main_category` with the coarse category derived from `category`.
///
/// The column keeps its position; it is appended if absent. Only `category`
/// is read, so running this twice gives the same result.
///
/// # Errors
///
/// [`abp_model::SchemaError::MissingColumns`] if `category` is absent.
pub fn assign_main_category(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, PipelineStage::Categorize, &[CATEGORY])?;

    let mut counts = CategoryCounts::default();
    let values: Vec<&'static str> = text_values(df, CATEGORY)?
        .iter()
        .map(|detailed| {
            let category = MainCategory::classify_opt(detailed.as_deref());
            counts.add(category);
            category.as_str()
        })
        .collect();

    let mut categorized = df.clone();
    categorized.with_column(Column::new(MAIN_CATEGORY.into(), values))?;

    debug!(
        stage = %PipelineStage::Categorize,
        residential = counts.residential,
        business = counts.business,
        other = counts.other,
        "assigned main categories"
    );
    Ok(categorized)
}

/// Removes rows whose `main_category` is `other`.
///
/// # Errors
///
/// [`abp_model::SchemaError::MissingColumns`] if `main_category` is absent.
pub fn drop_residual(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, PipelineStage::Categorize, &[MAIN_CATEGORY])?;

    let residual = MainCategory::Other.as_str();
    let keep: Vec<bool> = text_values(df, MAIN_CATEGORY)?
        .iter()
        .map(|value| value.as_deref() != Some(residual))
        .collect();
    let kept = keep_rows(df, &keep)?;

    debug!(
        stage = %PipelineStage::Categorize,
        dropped = df.height() - kept.height(),
        rows = kept.height(),
        "dropped residual rows"
    );
    Ok(kept)
}

/// Tallies the values of `main_category`.
pub fn count_main_categories(df: &DataFrame) -> Result<CategoryCounts> {
    require_columns(df, PipelineStage::Categorize, &[MAIN_CATEGORY])?;

    let mut counts = CategoryCounts::default();
    for value in text_values(df, MAIN_CATEGORY)?.iter().flatten() {
        if let Ok(category) = value.parse::<MainCategory>() {
            counts.add(category);
        }
    }
    Ok(counts)
}
