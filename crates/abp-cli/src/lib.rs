//! CLI library components for the ABP address converter.

pub mod convert;
pub mod logging;

pub use convert::{ConversionReport, ConvertOptions, run_convert};
