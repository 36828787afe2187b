//! Display formatting for terminal output
//!
//! Pure string builders; the CLI layer decides where the text goes.

pub mod expense;

pub use expense::{
    format_added, format_deleted, format_expense_list, format_sum, ListLayout,
};
