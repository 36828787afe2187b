//! Strongly-typed expense identifier
//!
//! Ids are positive integers assigned by the collection, never by the caller.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::num::NonZeroU64;
use std::str::FromStr;

use crate::error::ExpenseError;

/// Identifier of a single expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ExpenseId(NonZeroU64);

impl ExpenseId {
    /// The id given to the first record of an empty collection
    pub const FIRST: ExpenseId = ExpenseId(NonZeroU64::MIN);

    /// Create an id from a raw value, rejecting zero
    pub fn new(value: u64) -> Option<Self> {
        NonZeroU64::new(value).map(Self)
    }

    /// Get the raw integer value
    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// The id following this one
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value: u64 = s
            .parse()
            .map_err(|_| ExpenseError::Validation(format!("Invalid expense id: '{}'", s)))?;
        Self::new(value)
            .ok_or_else(|| ExpenseError::Validation("Expense id must be a positive integer".into()))
    }
}

impl<'de> Deserialize<'de> for ExpenseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u64::deserialize(deserializer)?;
        Self::new(value).ok_or_else(|| serde::de::Error::custom("expense id must be positive"))
    }
}
