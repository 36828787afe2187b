//! The ordered collection of expenses
//!
//! The collection is the unit of persistence: it is loaded whole, queried
//! and mutated in memory, then written back whole. Records keep insertion
//! order regardless of id.

use std::collections::HashSet;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::expense::Expense;
use super::ids::ExpenseId;
use super::month::Month;
use crate::error::{ExpenseError, ExpenseResult};

/// All recorded expenses, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseCollection {
    expenses: Vec<Expense>,
}

impl ExpenseCollection {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from decoded records, rejecting duplicate ids
    pub fn from_records(expenses: Vec<Expense>) -> ExpenseResult<Self> {
        let mut seen = HashSet::with_capacity(expenses.len());
        for expense in &expenses {
            if !seen.insert(expense.id) {
                return Err(ExpenseError::Validation(format!(
                    "Duplicate expense id: {}",
                    expense.id
                )));
            }
        }
        Ok(Self { expenses })
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the collection holds no records
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Iterate records in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Expense> {
        self.expenses.iter()
    }

    /// Records as a slice
    pub fn as_slice(&self) -> &[Expense] {
        &self.expenses
    }

    /// Get a record by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Id for the next new record: one past the highest id, or 1 when empty
    ///
    /// Freed ids below the maximum are never handed out again.
    pub fn next_id(&self) -> ExpenseId {
        self.expenses
            .iter()
            .map(|e| e.id)
            .max()
            .map(|max| max.next())
            .unwrap_or(ExpenseId::FIRST)
    }

    /// Build a new record stamped with the current time
    ///
    /// The record is not added to the collection; see [`Self::push`].
    pub fn append(&self, description: Option<&str>, amount: Option<i64>) -> ExpenseResult<Expense> {
        self.append_at(description, amount, Utc::now())
    }

    /// Build a new record stamped with `date`
    pub fn append_at(
        &self,
        description: Option<&str>,
        amount: Option<i64>,
        date: DateTime<Utc>,
    ) -> ExpenseResult<Expense> {
        let (description, amount) = match (description, amount) {
            (Some(d), Some(a)) => (d.trim(), a),
            _ => {
                return Err(ExpenseError::Validation(
                    "Both a description and an amount are required".into(),
                ))
            }
        };

        let expense = Expense::new(self.next_id(), description, amount, date);
        expense
            .validate()
            .map_err(|e| ExpenseError::Validation(e.to_string()))?;

        Ok(expense)
    }

    /// Add a record at the end of the collection
    pub fn push(&mut self, expense: Expense) -> ExpenseResult<()> {
        if self.get(expense.id).is_some() {
            return Err(ExpenseError::Validation(format!(
                "Duplicate expense id: {}",
                expense.id
            )));
        }
        self.expenses.push(expense);
        Ok(())
    }

    /// A copy of the collection without the record `id`
    ///
    /// Removing an id that is not present returns an identical collection.
    pub fn remove(&self, id: ExpenseId) -> ExpenseCollection {
        Self {
            expenses: self
                .expenses
                .iter()
                .filter(|e| e.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Records dated in `month` of any year, in the given time zone
    ///
    /// Records without a date never match.
    pub fn in_month<'a, Tz: TimeZone + 'a>(
        &'a self,
        month: Month,
        tz: &'a Tz,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses
            .iter()
            .filter(move |e| e.month_in(tz) == Some(month.number()))
    }

    /// Total amount, optionally restricted to one calendar month (local time)
    pub fn sum(&self, month: Option<Month>) -> ExpenseResult<i64> {
        self.sum_in(month, &Local)
    }

    /// Total amount, optionally restricted to one calendar month in `tz`
    ///
    /// Fails if the total does not fit in an `i64`.
    pub fn sum_in<Tz: TimeZone>(&self, month: Option<Month>, tz: &Tz) -> ExpenseResult<i64> {
        match month {
            Some(m) => checked_total(self.in_month(m, tz)),
            None => checked_total(self.expenses.iter()),
        }
    }
}

fn checked_total<'a>(mut expenses: impl Iterator<Item = &'a Expense>) -> ExpenseResult<i64> {
    expenses.try_fold(0i64, |total, e| {
        total.checked_add(e.amount).ok_or_else(|| {
            ExpenseError::Validation(format!(
                "Total exceeds the supported range ({} to {})",
                i64::MIN,
                i64::MAX
            ))
        })
    })
}

impl<'a> IntoIterator for &'a ExpenseCollection {
    type Item = &'a Expense;
    type IntoIter = std::slice::Iter<'a, Expense>;

    fn into_iter(self) -> Self::IntoIter {
        self.expenses.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> ExpenseId {
        ExpenseId::new(n).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    fn month(n: u32) -> Option<Month> {
        Some(Month::new(n).unwrap())
    }

    fn collection_with_ids(ids: &[u64]) -> ExpenseCollection {
        let records = ids
            .iter()
            .map(|&n| Expense::new(id(n), format!("item {}", n), n as i64, at(2024, 1, 1)))
            .collect();
        ExpenseCollection::from_records(records).unwrap()
    }

    #[test]
    fn test_ids_are_sequential_without_deletions() {
        let mut collection = ExpenseCollection::new();
        for expected in 1..=5 {
            let expense = collection.append(Some("snack"), Some(2)).unwrap();
            assert_eq!(expense.id.get(), expected);
            collection.push(expense).unwrap();
        }
    }

    #[test]
    fn test_first_add_on_empty_store() {
        let collection = ExpenseCollection::new();
        let before = Utc::now() - chrono::Duration::seconds(1);
        let expense = collection.append(Some("coffee"), Some(5)).unwrap();

        assert_eq!(expense.id.get(), 1);
        assert_eq!(expense.description, "coffee");
        assert_eq!(expense.amount, 5);
        assert!(expense.date.unwrap() >= before);

        let mut collection = collection;
        collection.push(expense).unwrap();
        assert_eq!(collection.sum(None).unwrap(), 5);
    }

    #[test]
    fn test_freed_highest_id_not_reused() {
        let collection = collection_with_ids(&[1, 2, 3]).remove(id(3));
        assert_eq!(collection.next_id().get(), 4);
    }

    #[test]
    fn test_remove_middle_then_add() {
        let mut collection = collection_with_ids(&[1, 2, 3]).remove(id(2));
        let ids: Vec<u64> = collection.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 3]);

        let expense = collection.append(Some("tea"), Some(3)).unwrap();
        assert_eq!(expense.id.get(), 4);
        collection.push(expense).unwrap();
    }

    #[test]
    fn test_next_id_with_unordered_ids() {
        let collection = collection_with_ids(&[7, 2, 5]);
        assert_eq!(collection.next_id().get(), 8);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let collection = collection_with_ids(&[1, 2]);
        assert_eq!(collection.remove(id(99)), collection);
    }

    #[test]
    fn test_append_requires_fields() {
        let collection = ExpenseCollection::new();
        assert!(collection.append(None, Some(5)).unwrap_err().is_validation());
        assert!(collection.append(Some("coffee"), None).unwrap_err().is_validation());
        assert!(collection.append(Some("   "), Some(5)).unwrap_err().is_validation());
        assert!(collection.is_empty());
    }

    #[test]
    fn test_append_trims_description() {
        let collection = ExpenseCollection::new();
        let expense = collection.append(Some("  bagel "), Some(4)).unwrap();
        assert_eq!(expense.description, "bagel");
    }

    #[test]
    fn test_push_rejects_duplicate() {
        let mut collection = collection_with_ids(&[1]);
        let dup = Expense::new(id(1), "again", 1, at(2024, 1, 1));
        assert!(collection.push(dup).is_err());
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let records = vec![
            Expense::new(id(1), "a", 1, at(2024, 1, 1)),
            Expense::new(id(1), "b", 2, at(2024, 1, 1)),
        ];
        assert!(ExpenseCollection::from_records(records).is_err());
    }

    #[test]
    fn test_sum_all() {
        assert_eq!(ExpenseCollection::new().sum(None).unwrap(), 0);
        assert_eq!(collection_with_ids(&[1, 2, 3]).sum(None).unwrap(), 6);
    }

    #[test]
    fn test_sum_by_month() {
        let collection = ExpenseCollection::from_records(vec![
            Expense::new(id(1), "rent", 10, at(2024, 3, 5)),
            Expense::new(id(2), "trip", 20, at(2024, 7, 1)),
        ])
        .unwrap();

        assert_eq!(collection.sum_in(month(3), &Utc).unwrap(), 10);
        assert_eq!(collection.sum_in(month(7), &Utc).unwrap(), 20);
        assert_eq!(collection.sum_in(month(1), &Utc).unwrap(), 0);
    }

    #[test]
    fn test_month_filter_ignores_year() {
        let collection = ExpenseCollection::from_records(vec![
            Expense::new(id(1), "spring 2023", 8, at(2023, 3, 14)),
            Expense::new(id(2), "spring 2024", 4, at(2024, 3, 20)),
            Expense::new(id(3), "summer", 100, at(2024, 6, 20)),
        ])
        .unwrap();

        assert_eq!(collection.sum_in(month(3), &Utc).unwrap(), 12);
        assert_eq!(collection.in_month(Month::new(3).unwrap(), &Utc).count(), 2);
    }

    #[test]
    fn test_month_filter_skips_undated() {
        let mut undated = Expense::new(id(2), "old entry", 50, at(2024, 3, 1));
        undated.date = None;
        let collection = ExpenseCollection::from_records(vec![
            Expense::new(id(1), "dated", 5, at(2024, 3, 10)),
            undated,
        ])
        .unwrap();

        assert_eq!(collection.sum_in(month(3), &Utc).unwrap(), 5);
        assert_eq!(collection.sum_in(None, &Utc).unwrap(), 55);
    }

    #[test]
    fn test_negative_amounts_sum() {
        let collection = ExpenseCollection::from_records(vec![
            Expense::new(id(1), "shoes", 80, at(2024, 5, 2)),
            Expense::new(id(2), "shoes refund", -80, at(2024, 5, 9)),
        ])
        .unwrap();
        assert_eq!(collection.sum(None).unwrap(), 0);
    }

    #[test]
    fn test_sum_overflow_is_error() {
        let mut collection = ExpenseCollection::new();
        for _ in 0..2 {
            let expense = collection.append(Some("big"), Some(i64::MAX)).unwrap();
            collection.push(expense).unwrap();
        }

        assert!(collection.sum(None).unwrap_err().is_validation());
    }

    #[test]
    fn test_sum_at_limits() {
        let collection = ExpenseCollection::from_records(vec![
            Expense::new(id(1), "max", i64::MAX, at(2024, 2, 1)),
            Expense::new(id(2), "refund", -1, at(2024, 2, 2)),
            Expense::new(id(3), "again", 1, at(2024, 2, 3)),
        ])
        .unwrap();
        assert_eq!(collection.sum(None).unwrap(), i64::MAX);
    }
}
