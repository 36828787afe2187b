//! Service layer for the expense tracker
//!
//! Services turn raw command input into validated values and run one
//! load-mutate-save cycle against the repository per call.

pub mod expense;

pub use expense::{DeleteOutcome, ExpenseService, SumReport};
