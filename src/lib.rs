//! Expense Tracker - command-line personal expense tracking
//!
//! Records expenses (description, amount, date) in a local CSV or JSON
//! file, lists them, totals them (optionally for one calendar month), and
//! deletes them by id.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Expense records and the collection that holds them
//! - `storage`: Whole-file CSV/JSON persistence
//! - `services`: Load-mutate-save logic behind each command
//! - `display`: Terminal formatting
//! - `export`: CSV/JSON/YAML export
//! - `cli`: Command handlers
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::ExpenseService;
//! use expense_tracker::storage::ExpenseRepository;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! let repo = ExpenseRepository::new(
//!     paths.expenses_file(settings.storage_format),
//!     settings.storage_format,
//! );
//! let expense = ExpenseService::new(&repo).add(Some("coffee"), Some("5"))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
