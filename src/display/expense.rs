//! Expense display formatting
//!
//! Table layout for `list` and one-line confirmations for the other
//! commands. Dates are shown in local time.

use std::fmt::Write;

use chrono::{DateTime, Local, Utc};

use crate::models::{Expense, ExpenseCollection};
use crate::services::{DeleteOutcome, SumReport};

const ID_WIDTH: usize = 5;
const DATE_WIDTH: usize = 12;
const AMOUNT_WIDTH: usize = 12;

/// Column settings for the expense table
#[derive(Debug, Clone)]
pub struct ListLayout {
    /// strftime format for the date column
    pub date_format: String,
    /// Width of the description column, including its trailing gap
    pub description_width: usize,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            description_width: 30,
        }
    }
}

/// Format the full collection as a table
pub fn format_expense_list(collection: &ExpenseCollection, layout: &ListLayout) -> String {
    if collection.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let desc_width = layout.description_width.max(4);
    let mut output = String::new();

    output.push_str(&format!(
        "{:id$}{:date$}{:desc$}{}\n",
        "ID",
        "Date",
        "Description",
        "Amount",
        id = ID_WIDTH,
        date = DATE_WIDTH,
        desc = desc_width
    ));
    output.push_str(&format!(
        "{} {} {} {}\n",
        "-".repeat(ID_WIDTH - 1),
        "-".repeat(DATE_WIDTH - 1),
        "-".repeat(desc_width - 1),
        "-".repeat(AMOUNT_WIDTH - 1)
    ));

    for expense in collection {
        output.push_str(&format_expense_row(expense, layout, desc_width));
        output.push('\n');
    }

    output
}

fn format_expense_row(expense: &Expense, layout: &ListLayout, desc_width: usize) -> String {
    let date = expense
        .date
        .map(|d| local_date(&d, &layout.date_format))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "{:id$}{:date_w$}{:desc$}{}",
        expense.id.to_string(),
        date,
        truncate(&expense.description, desc_width - 1),
        expense.amount,
        id = ID_WIDTH,
        date_w = DATE_WIDTH,
        desc = desc_width
    )
}

/// Confirmation printed after `add`
pub fn format_added(expense: &Expense, date_format: &str) -> String {
    let date = expense
        .date
        .map(|d| local_date(&d, date_format))
        .unwrap_or_else(|| "N/A".to_string());

    format!(
        "Expense added. id: {} | date: {} | description: {} | amount: {}",
        expense.id, date, expense.description, expense.amount
    )
}

/// Lines printed for `sum`
pub fn format_sum(report: &SumReport) -> String {
    match report.month {
        Some(month) if report.count == 0 => {
            format!("No expenses recorded for month {}.\nTotal: 0", month)
        }
        Some(month) => format!("Total expenses for month {}: {}", month, report.total),
        None if report.count == 0 => "No expenses recorded.\nTotal expenses: 0".to_string(),
        None => format!("Total expenses: {}", report.total),
    }
}

/// Confirmation printed after `del`
pub fn format_deleted(outcome: &DeleteOutcome) -> String {
    if outcome.removed {
        format!("Deleted expense with id {}.", outcome.id)
    } else {
        format!("No expense with id {}; nothing deleted.", outcome.id)
    }
}

/// Local date in `format`, or `YYYY-MM-DD` if the format is invalid
fn local_date(date: &DateTime<Utc>, format: &str) -> String {
    let local = date.with_timezone(&Local);
    let mut output = String::new();
    if write!(output, "{}", local.format(format)).is_err() {
        return local.format("%Y-%m-%d").to_string();
    }
    output
}

/// Shorten `s` to at most `max_chars` characters, ending in "..." when cut
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= 3 {
        ".".repeat(max_chars)
    } else {
        let kept: String = s.chars().take(max_chars - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseId, Month};
    use chrono::TimeZone;

    fn expense(id: u64, description: &str, amount: i64) -> Expense {
        let date = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        Expense::new(ExpenseId::new(id).unwrap(), description, amount, date)
    }

    #[test]
    fn test_empty_list() {
        let output = format_expense_list(&ExpenseCollection::new(), &ListLayout::default());
        assert_eq!(output, "No expenses recorded.\n");
    }

    #[test]
    fn test_list_table() {
        let mut undated = expense(2, "old", 7);
        undated.date = None;
        let collection =
            ExpenseCollection::from_records(vec![expense(1, "coffee", 5), undated]).unwrap();

        let output = format_expense_list(&collection, &ListLayout::default());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID   Date        Description"));
        assert!(lines[0].ends_with("Amount"));
        assert!(lines[1].starts_with("---- ----------- ---"));
        assert_eq!(
            lines[2],
            format!("1    2024-03-15  {:30}5", "coffee")
        );
        assert_eq!(lines[3], format!("2    N/A         {:30}7", "old"));
    }

    #[test]
    fn test_long_description_truncated() {
        let long = "a".repeat(40);
        let collection = ExpenseCollection::from_records(vec![expense(1, &long, 9)]).unwrap();
        let output = format_expense_list(&collection, &ListLayout::default());
        let row = output.lines().nth(2).unwrap();
        assert!(row.contains(&format!("{}... 9", "a".repeat(26))));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("점심 식사 비용", 5), "점심...");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 2), "..");
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let collection = ExpenseCollection::from_records(vec![expense(1, "coffee", 5)]).unwrap();
        let layout = ListLayout {
            date_format: "%Q".to_string(),
            ..ListLayout::default()
        };

        let output = format_expense_list(&collection, &layout);
        assert!(output.lines().nth(2).unwrap().starts_with("1    2024-03-15"));
        assert!(format_added(&expense(1, "coffee", 5), "%Q").contains("date: 2024-03-15"));
    }

    #[test]
    fn test_format_added() {
        let line = format_added(&expense(4, "coffee", 5), "%Y-%m-%d");
        assert_eq!(
            line,
            "Expense added. id: 4 | date: 2024-03-15 | description: coffee | amount: 5"
        );
    }

    #[test]
    fn test_format_sum() {
        let all = SumReport { month: None, count: 2, total: 15 };
        assert_eq!(format_sum(&all), "Total expenses: 15");

        let march = SumReport { month: Some(Month::new(3).unwrap()), count: 1, total: 10 };
        assert_eq!(format_sum(&march), "Total expenses for month 3: 10");

        let empty = SumReport { month: Some(Month::new(1).unwrap()), count: 0, total: 0 };
        assert_eq!(format_sum(&empty), "No expenses recorded for month 1.\nTotal: 0");

        let nothing = SumReport { month: None, count: 0, total: 0 };
        assert!(format_sum(&nothing).ends_with("Total expenses: 0"));
    }

    #[test]
    fn test_format_deleted() {
        let id = ExpenseId::new(2).unwrap();
        assert_eq!(
            format_deleted(&DeleteOutcome { id, removed: true }),
            "Deleted expense with id 2."
        );
        assert!(format_deleted(&DeleteOutcome { id, removed: false }).contains("nothing deleted"));
    }
}
