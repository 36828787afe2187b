//! Expense repository
//!
//! Loads and saves the whole [`ExpenseCollection`] to a single data file.
//! Every command runs one load, at most one mutation, and one save; nothing
//! is cached between invocations.

use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseCollection;

use super::file_io::{read_optional, write_atomic, write_in_place};
use super::format::StorageFormat;

/// Repository for expense persistence
#[derive(Debug, Clone)]
pub struct ExpenseRepository {
    path: PathBuf,
    format: StorageFormat,
    atomic_writes: bool,
}

impl ExpenseRepository {
    /// Create a repository for the data file at `path`
    pub fn new(path: PathBuf, format: StorageFormat) -> Self {
        Self {
            path,
            format,
            atomic_writes: true,
        }
    }

    /// Choose between temp-file-and-rename saves and in-place overwrites
    pub fn with_atomic_writes(mut self, atomic_writes: bool) -> Self {
        self.atomic_writes = atomic_writes;
        self
    }

    /// Path of the data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format of the data file
    pub fn format(&self) -> StorageFormat {
        self.format
    }

    /// Load the collection
    ///
    /// A missing or blank file is an empty collection. Unreadable or
    /// undecodable contents are a `StorageRead` error.
    pub fn load(&self) -> ExpenseResult<ExpenseCollection> {
        let Some(text) = read_optional(&self.path)? else {
            tracing::debug!(path = %self.path.display(), "no data file yet");
            return Ok(ExpenseCollection::new());
        };

        if text.trim().is_empty() {
            return Ok(ExpenseCollection::new());
        }

        let records = self
            .format
            .decode(&text)
            .map_err(|e| ExpenseError::storage_read(&self.path, e))?;
        let collection = ExpenseCollection::from_records(records)
            .map_err(|e| ExpenseError::storage_read(&self.path, e))?;

        tracing::debug!(
            path = %self.path.display(),
            format = %self.format,
            count = collection.len(),
            "loaded expenses"
        );
        Ok(collection)
    }

    /// Load the collection, falling back to an empty one on read errors
    ///
    /// The failure is logged; callers cannot tell it apart from "no data".
    pub fn load_or_empty(&self) -> ExpenseCollection {
        match self.load() {
            Ok(collection) => collection,
            Err(err) => {
                tracing::error!("{}", err);
                ExpenseCollection::new()
            }
        }
    }

    /// Write the full collection, replacing the previous contents
    pub fn save(&self, collection: &ExpenseCollection) -> ExpenseResult<()> {
        let bytes = self
            .format
            .encode(collection)
            .map_err(|e| ExpenseError::storage_write(&self.path, e))?;

        if self.atomic_writes {
            write_atomic(&self.path, &bytes)?;
        } else {
            write_in_place(&self.path, &bytes)?;
        }

        tracing::debug!(
            path = %self.path.display(),
            count = collection.len(),
            atomic = self.atomic_writes,
            "saved expenses"
        );
        Ok(())
    }
}
