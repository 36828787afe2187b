//! Storage layer for the expense tracker
//!
//! A single data file holds the whole collection, as CSV or JSON. Saves are
//! atomic (temp file + rename) unless configured otherwise. There is no
//! file locking: two concurrent invocations can still lose an update.

pub mod expenses;
pub mod file_io;
pub mod format;

pub use expenses::ExpenseRepository;
pub use file_io::{read_optional, write_atomic, write_in_place};
pub use format::StorageFormat;
