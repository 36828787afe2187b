//! On-disk formats for the expense collection
//!
//! CSV: a header row `id,description,amount,date` followed by one row per
//! expense. JSON: a pretty-printed array of expense objects.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCollection};

/// CSV column names, in write order
pub const CSV_HEADER: [&str; 4] = ["id", "description", "amount", "date"];

/// Storage format for the data file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// Comma-separated rows with a header line
    #[default]
    Csv,
    /// Indented JSON array
    Json,
}

impl StorageFormat {
    /// File extension used for the data file
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    /// Decode file contents into records
    ///
    /// Callers handle blank input before calling this.
    pub fn decode(&self, text: &str) -> ExpenseResult<Vec<Expense>> {
        match self {
            Self::Csv => decode_csv(text),
            Self::Json => Ok(serde_json::from_str(text)?),
        }
    }

    /// Encode the full collection
    pub fn encode(&self, collection: &ExpenseCollection) -> ExpenseResult<Vec<u8>> {
        match self {
            Self::Csv => encode_csv(collection),
            Self::Json => {
                let mut bytes = serde_json::to_vec_pretty(collection)?;
                bytes.push(b'\n');
                Ok(bytes)
            }
        }
    }
}

impl fmt::Display for StorageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for StorageFormat {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ExpenseError::Config(format!(
                "Unknown storage format: '{}'. Valid formats: csv, json",
                other
            ))),
        }
    }
}

fn decode_csv(text: &str) -> ExpenseResult<Vec<Expense>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut expenses = Vec::new();
    for (index, row) in reader.deserialize::<Expense>().enumerate() {
        // Line 1 is the header
        let expense = row.map_err(|e| ExpenseError::Csv(format!("line {}: {}", index + 2, e)))?;
        expenses.push(expense);
    }
    Ok(expenses)
}

fn encode_csv(collection: &ExpenseCollection) -> ExpenseResult<Vec<u8>> {
    // Header written by hand so an empty collection still gets one
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for expense in collection {
        writer.serialize(expense)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExpenseError::Csv(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpenseId;
    use chrono::{TimeZone, Utc};

    fn sample() -> ExpenseCollection {
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 9, 30, 0).unwrap();
        let mut undated = Expense::new(ExpenseId::new(4).unwrap(), "legacy", 7, date);
        undated.date = None;
        ExpenseCollection::from_records(vec![
            Expense::new(ExpenseId::new(1).unwrap(), "coffee", 5, date),
            Expense::new(ExpenseId::new(2).unwrap(), "book, \"used\"", -12, date),
            undated,
        ])
        .unwrap()
    }

    #[test]
    fn test_csv_empty_collection_has_header() {
        let bytes = StorageFormat::Csv.encode(&ExpenseCollection::new()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "id,description,amount,date\n");
    }

    #[test]
    fn test_csv_layout() {
        let text = String::from_utf8(StorageFormat::Csv.encode(&sample()).unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,description,amount,date");
        assert_eq!(lines[1], "1,coffee,5,2024-03-05T09:30:00.000Z");
        assert_eq!(lines[2], "2,\"book, \"\"used\"\"\",-12,2024-03-05T09:30:00.000Z");
        assert_eq!(lines[3], "4,legacy,7,");
    }

    #[test]
    fn test_csv_reload_preserves_records() {
        let collection = sample();
        let text = String::from_utf8(StorageFormat::Csv.encode(&collection).unwrap()).unwrap();
        let decoded = StorageFormat::Csv.decode(&text).unwrap();
        assert_eq!(decoded, collection.as_slice());
    }

    #[test]
    fn test_csv_decode_bare_dates_and_blank_lines() {
        let text = "id,description,amount,date\n1,rent,10,2024-03-05\n\n2,trip,20,2024-07-01\n";
        let decoded = StorageFormat::Csv.decode(text).unwrap();
        assert_eq!(decoded.len(), 2);
        assert_eq!(decoded[1].amount, 20);
        assert_eq!(
            decoded[0].date,
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_csv_decode_header_only() {
        assert!(StorageFormat::Csv
            .decode("id,description,amount,date\n")
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_csv_decode_rejects_malformed() {
        assert!(StorageFormat::Csv
            .decode("id,description,amount,date\nx,coffee,5,\n")
            .is_err());
        assert!(StorageFormat::Csv
            .decode("id,description,amount,date\n1,coffee,lots,\n")
            .is_err());
        assert!(StorageFormat::Csv
            .decode("id,description,amount,date\n1,coffee,5,someday\n")
            .is_err());
        assert!(StorageFormat::Csv.decode("name,cost\ncoffee,5\n").is_err());
    }

    #[test]
    fn test_json_layout_and_reload() {
        let collection = sample();
        let text = String::from_utf8(StorageFormat::Json.encode(&collection).unwrap()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"id\": 1,"));
        assert!(text.contains("\"date\": null"));

        let decoded = StorageFormat::Json.decode(&text).unwrap();
        assert_eq!(decoded, collection.as_slice());
    }

    #[test]
    fn test_json_empty_collection() {
        let bytes = StorageFormat::Json.encode(&ExpenseCollection::new()).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "[]\n");
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("CSV".parse::<StorageFormat>().unwrap(), StorageFormat::Csv);
        assert_eq!("json".parse::<StorageFormat>().unwrap(), StorageFormat::Json);
        assert!("xml".parse::<StorageFormat>().is_err());
    }
}
