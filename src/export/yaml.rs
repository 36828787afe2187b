//! YAML Export functionality
//!
//! Same document as the JSON export, preceded by a comment header.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::ExpenseCollection;

/// Export all expenses as YAML
pub fn export_expenses_yaml<W: Write>(
    collection: &ExpenseCollection,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = ExpenseExport::from_collection(collection)?;

    writeln!(writer, "# Expense Tracker Export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export)?;

    Ok(())
}
