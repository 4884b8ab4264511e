//! Address data model for the ABP conversion pipeline.
//!
//! This crate holds the static tables that drive the transformation:
//!
//! - **Schema**: source-to-target column mapping, fixed-position inserted
//!   columns, placeholder naming, and the base layout width
//! - **Categories**: exclusion set and the detailed-to-coarse category taxonomy
//! - **Errors**: [`SchemaError`] raised when a stage cannot find the columns it
//!   expects

pub mod category;
pub mod error;
pub mod schema;

pub use category::{
    BUSINESS_CATEGORIES, EXCLUDED_CATEGORIES, MainCategory, RESIDENTIAL_CATEGORIES, is_excluded,
};
pub use error::{Result, SchemaError};
pub use schema::{
    BASE_COLUMN_COUNT, COLUMN_MAPPINGS, CATEGORY, CLASSIFICATION_CODE, ColumnMapping,
    INSERTED_COLUMNS, InsertedColumn, MAIN_CATEGORY, PLACEHOLDER_MARKER, PipelineStage,
    YEAR_CREATED, placeholder_name, required_source_columns,
};
