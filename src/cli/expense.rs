//! Expense CLI commands
//!
//! `add`, `list`, `sum` and `del`. Options are taken as plain strings so a
//! missing or malformed value becomes a diagnostic rather than a usage
//! error.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_added, format_deleted, format_expense_list, format_sum, ListLayout};
use crate::error::ExpenseResult;
use crate::services::ExpenseService;
use crate::storage::ExpenseRepository;

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        #[arg(short, long)]
        description: Option<String>,
        /// Whole-number amount (negative for refunds)
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// List all expenses
    List,
    /// Show the total of all expenses, or of one month
    Sum {
        /// Month number (1-12), any year
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Delete an expense by id
    #[command(alias = "delete")]
    Del {
        /// Id of the expense to delete
        #[arg(short, long)]
        id: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    repo: &ExpenseRepository,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let service = ExpenseService::new(repo);

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
        } => {
            let expense = service.add(description.as_deref(), amount.as_deref())?;
            println!("{}", format_added(&expense, &settings.date_format));
        }

        ExpenseCommands::List => {
            let layout = ListLayout {
                date_format: settings.date_format.clone(),
                description_width: settings.description_width,
            };
            print!("{}", format_expense_list(&service.list(), &layout));
        }

        ExpenseCommands::Sum { month } => {
            let report = service.sum(month.as_deref())?;
            println!("{}", format_sum(&report));
        }

        ExpenseCommands::Del { id } => {
            let outcome = service.delete(id.as_deref())?;
            println!("{}", format_deleted(&outcome));
        }
    }

    Ok(())
}
