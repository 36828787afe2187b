//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod config;
pub mod expense;
pub mod export;

pub use config::handle_config_command;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::handle_export_command;

use crate::error::ExpenseError;

/// Report a failed command without ending the process with an error
///
/// Input mistakes go to the user as a plain message; anything else is
/// logged.
pub fn report_error(err: &ExpenseError) {
    if err.is_validation() {
        tracing::debug!("{}", err);
        eprintln!("Error: {}", err);
    } else {
        tracing::error!("{}", err);
    }
}
