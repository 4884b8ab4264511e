//! Column layout tables for the AddressBase Premium conversion.

use std::fmt;

use serde::Serialize;

/// Detailed category column in the target layout.
pub const CATEGORY: &str = "category";

/// Coarse category column, seeded from `CATEGORY` and later overwritten.
pub const MAIN_CATEGORY: &str = "main_category";

/// Classification code column, carried through selection and then dropped.
pub const CLASSIFICATION_CODE: &str = "classification_code";

/// Column holding the fixed creation year.
pub const YEAR_CREATED: &str = "year_created";

/// Substring identifying padding columns added by shape normalization.
pub const PLACEHOLDER_MARKER: &str = "Empty_";

/// Width the selected frame is padded to before fixed columns are inserted.
///
/// The inserted columns come on top of this, so the normalized frame is wider
/// than this value.
pub const BASE_COLUMN_COUNT: usize = 29;

/// One source column projected into the target layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub source: &'static str,
    pub target: &'static str,
}

const fn map(source: &'static str, target: &'static str) -> ColumnMapping {
    ColumnMapping { source, target }
}

/// Positional source-to-target mapping. Some source columns appear twice.
pub const COLUMN_MAPPINGS: [ColumnMapping; 21] = [
    map("UPRN", "uprn"),
    map("UDPRN", "udprn"),
    map("EASTING", "x_coordina"),
    map("NORTHING", "y_coordina"),
    map("LATITUDE", "latitude"),
    map("LONGITUDE", "longitude"),
    map("POSTCODE", "postcode"),
    map("CATEGORY", CATEGORY),
    map("ORGANISATION", "Organisation name"),
    map("BUILDING_NAME", "Building name"),
    map("SUB_BUILDING", "Sub building name"),
    map("BUILDING_NUMBER", "Building number"),
    map("STREET_NAME", "Street"),
    map("TOWN_NAME", "Town"),
    map("EASTING", "Eastings"),
    map("NORTHING", "Northings"),
    map("CATEGORY", MAIN_CATEGORY),
    map("BOROUGH", "Borough"),
    map("PARENT_UPRN", "parent_uprn"),
    map("CLASSIFICATION_CODE", CLASSIFICATION_CODE),
    map("MDU_COUNT", "mdu_count"),
];

/// A constant column inserted at a fixed position during shape normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedColumn {
    /// Index in the column sequence at the time of insertion.
    pub position: usize,
    pub name: &'static str,
    pub value: &'static str,
}

const fn insert(position: usize, name: &'static str, value: &'static str) -> InsertedColumn {
    InsertedColumn {
        position,
        name,
        value,
    }
}

/// Inserted columns, applied in this order (increasing position).
pub const INSERTED_COLUMNS: [InsertedColumn; 8] = [
    insert(14, "Council", ""),
    insert(19, YEAR_CREATED, "2024"),
    insert(20, "house_polygon", ""),
    insert(21, "geometry", ""),
    insert(22, "udprn_available", ""),
    insert(23, "highest_point_latitude", ""),
    insert(24, "highest_point_longitude", ""),
    insert(26, "has_parent_uprn", ""),
];

/// Name of the placeholder column occupying `index`.
pub fn placeholder_name(index: usize) -> String {
    format!("{PLACEHOLDER_MARKER}{index}")
}

/// Distinct source columns required by [`COLUMN_MAPPINGS`], in first-seen order.
pub fn required_source_columns() -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = Vec::with_capacity(COLUMN_MAPPINGS.len());
    for mapping in &COLUMN_MAPPINGS {
        if !columns.contains(&mapping.source) {
            columns.push(mapping.source);
        }
    }
    columns
}

/// Pipeline stage, used to attribute schema failures and log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    SelectRename,
    NormalizeShape,
    CleanFilter,
    Categorize,
}

impl PipelineStage {
    pub fn as_str(self) -> &'static str {
        match self {
            PipelineStage::SelectRename => "select_rename",
            PipelineStage::NormalizeShape => "normalize_shape",
            PipelineStage::CleanFilter => "clean_filter",
            PipelineStage::Categorize => "categorize",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
