//! Calendar month used to filter expenses
//!
//! Months are year-independent: March 2023 and March 2024 are the same
//! `Month`.

use std::fmt;
use std::str::FromStr;

use crate::error::ExpenseError;

/// A calendar month, 1 (January) through 12 (December)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u32);

impl Month {
    /// Create a month from its 1-based number
    pub fn new(number: u32) -> Result<Self, ExpenseError> {
        if (1..=12).contains(&number) {
            Ok(Self(number))
        } else {
            Err(ExpenseError::Validation(format!(
                "Month must be between 1 and 12, got {}",
                number
            )))
        }
    }

    /// The 1-based month number
    pub fn number(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Month {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number: u32 = s
            .parse()
            .map_err(|_| ExpenseError::Validation(format!("Invalid month: '{}'", s)))?;
        Self::new(number)
    }
}
