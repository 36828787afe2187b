//! Expense service
//!
//! Business logic behind `add`, `list`, `sum` and `del`. Input arrives as
//! the raw strings the user typed; validation happens here, before any file
//! is touched.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCollection, ExpenseId, Month};
use crate::storage::ExpenseRepository;

/// Result of a `sum` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SumReport {
    /// Month filter, if one was given
    pub month: Option<Month>,
    /// Number of records that contributed to the total
    pub count: usize,
    /// Sum of their amounts
    pub total: i64,
}

/// Result of a `del` request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub id: ExpenseId,
    /// Whether a record with that id existed
    pub removed: bool,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    repo: &'a ExpenseRepository,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(repo: &'a ExpenseRepository) -> Self {
        Self { repo }
    }

    /// Record a new expense and persist it
    ///
    /// A data file that cannot be read is left untouched rather than
    /// overwritten with the new record alone.
    pub fn add(&self, description: Option<&str>, amount: Option<&str>) -> ExpenseResult<Expense> {
        let (Some(description), Some(amount)) = (description, amount) else {
            return Err(ExpenseError::Validation(
                "Both a description (-d) and an amount (-a) are required".into(),
            ));
        };
        let amount = parse_amount(amount)?;

        let mut collection = self.repo.load()?;
        let expense = collection.append(Some(description), Some(amount))?;
        collection.push(expense.clone())?;
        self.repo.save(&collection)?;

        tracing::info!(id = %expense.id, amount = expense.amount, "added expense");
        Ok(expense)
    }

    /// All expenses in insertion order
    ///
    /// Read failures are logged and reported as an empty list.
    pub fn list(&self) -> ExpenseCollection {
        self.repo.load_or_empty()
    }

    /// Total of all expenses, or of those in one calendar month
    ///
    /// An empty month argument means no filter.
    pub fn sum(&self, month: Option<&str>) -> ExpenseResult<SumReport> {
        let month = month
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::parse::<Month>)
            .transpose()?;
        let collection = self.repo.load_or_empty();

        let count = match month {
            Some(m) => collection.in_month(m, &chrono::Local).count(),
            None => collection.len(),
        };

        Ok(SumReport {
            month,
            count,
            total: collection.sum(month)?,
        })
    }

    /// Delete the expense with the given id and persist the result
    ///
    /// Deleting an id that does not exist is not an error.
    pub fn delete(&self, id: Option<&str>) -> ExpenseResult<DeleteOutcome> {
        let id: ExpenseId = id
            .ok_or_else(|| ExpenseError::Validation("An expense id (-i) is required".into()))?
            .parse()?;

        let collection = self.repo.load()?;
        let remaining = collection.remove(id);
        let removed = remaining.len() != collection.len();
        self.repo.save(&remaining)?;

        if removed {
            tracing::info!(id = %id, "deleted expense");
        } else {
            tracing::debug!(id = %id, "no expense to delete");
        }
        Ok(DeleteOutcome { id, removed })
    }
}

/// Parse a whole-number amount; negative values are allowed
pub fn parse_amount(text: &str) -> ExpenseResult<i64> {
    let text = text.trim();
    text.parse()
        .map_err(|_| ExpenseError::Validation(format!("Invalid amount: '{}'. Use a whole number", text)))
}
