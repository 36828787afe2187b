//! Expense model
//!
//! A single recorded expense: what it was, how much, and when it was entered.

use chrono::{DateTime, Datelike, NaiveDate, SubsecRound, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;

/// One expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by the collection
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Whole-unit amount; negative values are refunds
    pub amount: i64,

    /// When the expense was recorded. Older data files may lack it.
    #[serde(default, with = "timestamp")]
    pub date: Option<DateTime<Utc>>,
}

impl Expense {
    /// Create an expense recorded at `date`
    ///
    /// The timestamp is truncated to milliseconds, the precision it is
    /// persisted with.
    pub fn new(
        id: ExpenseId,
        description: impl Into<String>,
        amount: i64,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date: Some(date.trunc_subsecs(3)),
        }
    }

    /// Calendar month (1-12) of the record date as seen from `tz`
    pub fn month_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<u32> {
        self.date.map(|d| d.with_timezone(tz).month())
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} ({})", self.id, self.description, self.amount)
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Expense description cannot be empty"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

/// Format a timestamp the way it is persisted (`2024-03-05T10:00:00.000Z`)
pub fn format_timestamp(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Parse a persisted timestamp
///
/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates, the latter
/// taken as UTC midnight.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Serde adapter for optional ISO-8601 timestamps
///
/// Missing and empty values both decode to `None`.
mod timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        date: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => serializer.serialize_str(&super::format_timestamp(d)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => super::parse_timestamp(s)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("invalid date: '{}'", s))),
        }
    }
}
