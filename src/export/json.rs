//! JSON Export functionality
//!
//! Wraps the expenses with a schema version and summary metadata.

use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCollection};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Number of exported expenses
    pub expense_count: usize,

    /// Sum of all amounts
    pub total: i64,

    /// All expenses, in insertion order
    pub expenses: Vec<Expense>,
}

impl ExpenseExport {
    /// Snapshot the collection
    pub fn from_collection(collection: &ExpenseCollection) -> ExpenseResult<Self> {
        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now().trunc_subsecs(0),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expense_count: collection.len(),
            total: collection.sum(None)?,
            expenses: collection.as_slice().to_vec(),
        })
    }
}

/// Export all expenses as pretty-printed JSON
pub fn export_expenses_json<W: Write>(
    collection: &ExpenseCollection,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = ExpenseExport::from_collection(collection)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
