//! End-to-end conversion of a source address frame.

use std::time::Instant;

use abp_model::PipelineStage;
use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{debug_span, info};

use crate::categorize::{CategoryCounts, assign_main_category, count_main_categories, drop_residual};
use crate::clean::clean_and_filter;
use crate::error::Result;
use crate::frame::column_names;
use crate::select::select_and_rename;
use crate::shape::normalize_shape;

/// Row accounting for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionStats {
    pub input_rows: usize,
    /// Rows removed by the category exclusion set.
    pub excluded_rows: usize,
    /// Rows removed because their coarse category was `other`.
    pub residual_rows: usize,
    pub output_rows: usize,
    pub categories: CategoryCounts,
    pub output_columns: Vec<String>,
}

/// Converted frame plus its row accounting.
#[derive(Debug, Clone)]
pub struct ConversionOutput {
    pub data: DataFrame,
    pub stats: ConversionStats,
}

fn run_stage<F>(stage: PipelineStage, input: &DataFrame, apply: F) -> Result<DataFrame>
where
    F: FnOnce(&DataFrame) -> Result<DataFrame>,
{
    let span = debug_span!("stage", stage = %stage, rows_in = input.height());
    span.in_scope(|| apply(input))
}

/// Runs select, normalize, clean, categorize and the residual filter in order.
///
/// The input frame is not modified. Any schema failure aborts the run before
/// a result is produced.
pub fn convert_addresses(source: &DataFrame) -> Result<ConversionOutput> {
    let start = Instant::now();

    let selected = run_stage(PipelineStage::SelectRename, source, select_and_rename)?;
    let normalized = run_stage(PipelineStage::NormalizeShape, &selected, normalize_shape)?;
    let cleaned = run_stage(PipelineStage::CleanFilter, &normalized, clean_and_filter)?;
    let categorized = run_stage(PipelineStage::Categorize, &cleaned, assign_main_category)?;
    let data = run_stage(PipelineStage::Categorize, &categorized, drop_residual)?;

    let stats = ConversionStats {
        input_rows: source.height(),
        excluded_rows: normalized.height() - cleaned.height(),
        residual_rows: categorized.height() - data.height(),
        output_rows: data.height(),
        categories: count_main_categories(&data)?,
        output_columns: column_names(&data),
    };

    info!(
        input_rows = stats.input_rows,
        excluded_rows = stats.excluded_rows,
        residual_rows = stats.residual_rows,
        output_rows = stats.output_rows,
        residential = stats.categories.residential,
        business = stats.categories.business,
        duration_ms = start.elapsed().as_millis(),
        "address conversion complete"
    );
    Ok(ConversionOutput { data, stats })
}
