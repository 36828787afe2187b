//! CSV Export functionality

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseCollection;
use crate::storage::StorageFormat;

/// Export all expenses as CSV
pub fn export_expenses_csv<W: Write>(
    collection: &ExpenseCollection,
    writer: &mut W,
) -> ExpenseResult<()> {
    let bytes = StorageFormat::Csv.encode(collection)?;
    writer
        .write_all(&bytes)
        .map_err(|e| ExpenseError::Export(e.to_string()))
}
