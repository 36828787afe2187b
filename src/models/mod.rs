//! Core data models for the expense tracker
//!
//! An [`Expense`] is one entry; an [`ExpenseCollection`] is every entry,
//! the unit that is loaded and saved.

pub mod collection;
pub mod expense;
pub mod ids;
pub mod month;

pub use collection::ExpenseCollection;
pub use expense::{Expense, ExpenseValidationError};
pub use ids::ExpenseId;
pub use month::Month;
