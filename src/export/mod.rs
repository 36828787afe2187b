//! Export module for the expense tracker
//!
//! Writes the whole collection to any writer:
//! - CSV: the same layout as the CSV data file
//! - JSON: machine-readable export with metadata
//! - YAML: human-readable export with metadata

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;

use clap::ValueEnum;

use crate::error::ExpenseResult;
use crate::models::ExpenseCollection;

pub use self::csv::export_expenses_csv;
pub use self::json::{export_expenses_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_expenses_yaml;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows with a header line
    Csv,
    /// JSON document with metadata
    Json,
    /// YAML document with metadata
    Yaml,
}

/// Export the collection in `format`
pub fn export_expenses<W: Write>(
    collection: &ExpenseCollection,
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    match format {
        ExportFormat::Csv => export_expenses_csv(collection, writer),
        ExportFormat::Json => export_expenses_json(collection, writer),
        ExportFormat::Yaml => export_expenses_yaml(collection, writer),
    }
}
