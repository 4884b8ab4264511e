//! Address conversion stages.
//!
//! Turns an AddressBase Premium core export into the fixed downstream layout.
//! Each stage is a pure function from one DataFrame to a new one:
//!
//! 1. [`select_and_rename`] projects and renames the source columns
//! 2. [`normalize_shape`] pads to the base width and inserts fixed columns
//! 3. [`clean_and_filter`] drops padding and excluded categories
//! 4. [`assign_main_category`] and [`drop_residual`] derive the coarse
//!    category and remove the residual bucket
//!
//! [`convert_addresses`] runs all of them and reports row accounting.
//!
//! # Example
//!
//! ```ignore
//! use abp_transform::convert_addresses;
//!
//! let output = convert_addresses(&source_df)?;
//! println!("{} of {} rows kept", output.stats.output_rows, output.stats.input_rows);
//! ```

mod categorize;
mod clean;
mod error;
mod frame;
mod pipeline;
mod select;
mod shape;

// Error type
pub use error::{Result, TransformError};

// Stages
pub use categorize::{CategoryCounts, assign_main_category, count_main_categories, drop_residual};
pub use clean::clean_and_filter;
pub use select::select_and_rename;
pub use shape::normalize_shape;

// Pipeline
pub use frame::column_names;
pub use pipeline::{ConversionOutput, ConversionStats, convert_addresses};
