use std::{fmt, str::FromStr};

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::{LedgerError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const MONTH_FORMAT: &str = "%Y-%m";

/// Direction of an entry. Amounts are magnitudes; the sign always comes from here.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    #[default]
    Expense,
}

impl EntryKind {
    pub const ALL: [EntryKind; 2] = [EntryKind::Income, EntryKind::Expense];

    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    /// +1 for income, -1 for expense.
    pub fn sign(&self) -> f64 {
        match self {
            EntryKind::Income => 1.0,
            EntryKind::Expense => -1.0,
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryKind {
    type Err = LedgerError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "income" => Ok(EntryKind::Income),
            "expense" => Ok(EntryKind::Expense),
            _ => Err(LedgerError::InvalidKind(value.trim().to_string())),
        }
    }
}

/// Accepted shapes for an entry date. Any time component is dropped.
#[derive(Debug, Clone)]
pub enum DateInput {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

impl DateInput {
    pub fn resolve(self) -> Result<NaiveDate> {
        match self {
            DateInput::Date(date) => Ok(date),
            DateInput::DateTime(stamp) => Ok(stamp.date()),
            DateInput::Text(text) => parse_date(&text),
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<NaiveDateTime> for DateInput {
    fn from(value: NaiveDateTime) -> Self {
        DateInput::DateTime(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

/// Parses `YYYY-MM-DD HH:MM:SS` first, then falls back to `YYYY-MM-DD`.
pub fn parse_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    NaiveDateTime::parse_from_str(trimmed, DATE_TIME_FORMAT)
        .map(|stamp| stamp.date())
        .or_else(|_| NaiveDate::parse_from_str(trimmed, DATE_FORMAT))
        .map_err(|_| {
            LedgerError::Parse(format!(
                "invalid date `{trimmed}`, expected YYYY-MM-DD or YYYY-MM-DD HH:MM:SS"
            ))
        })
}

/// Parses user-entered amount text.
pub fn parse_amount(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| LedgerError::Parse(format!("amount `{trimmed}` is not a number")))?;
    magnitude(value)
}

/// Normalizes an amount to its non-negative magnitude, rejecting NaN and infinities.
pub fn magnitude(value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(LedgerError::Parse(format!("amount `{value}` is not a finite number")));
    }
    Ok(value.abs())
}

/// Trimmed, lower-cased label used for description lookup and category grouping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedLabel(String);

impl NormalizedLabel {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recorded income or expense. Fields are fixed once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    amount: f64,
    description: String,
    category: String,
    date: NaiveDate,
    kind: EntryKind,
}

impl Entry {
    pub fn new(
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: impl Into<DateInput>,
        kind: EntryKind,
    ) -> Result<Self> {
        Ok(Self {
            amount: magnitude(amount)?,
            description: description.into(),
            category: category.into(),
            date: date.into().resolve()?,
            kind,
        })
    }

    /// Builds an entry from raw text fields as typed at a prompt.
    pub fn parse(
        amount: &str,
        description: impl Into<String>,
        category: impl Into<String>,
        date: &str,
        kind: &str,
    ) -> Result<Self> {
        let amount = parse_amount(amount)?;
        let date = parse_date(date)?;
        let kind = kind.parse()?;
        Self::new(amount, description, category, date, kind)
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn signed_amount(&self) -> f64 {
        self.kind.sign() * self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_income(&self) -> bool {
        self.kind == EntryKind::Income
    }

    pub fn normalized_description(&self) -> NormalizedLabel {
        NormalizedLabel::new(&self.description)
    }

    pub fn normalized_category(&self) -> NormalizedLabel {
        NormalizedLabel::new(&self.category)
    }

    pub fn date_text(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }

    pub fn month_key(&self) -> String {
        self.date.format(MONTH_FORMAT).to_string()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} | {:.2} | {} | {}",
            self.date_text(),
            self.description,
            self.amount,
            self.category,
            self.kind
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_both_date_formats() {
        assert_eq!(parse_date("2025-01-15").unwrap(), ymd(2025, 1, 15));
        assert_eq!(parse_date("2025-01-15 18:30:00").unwrap(), ymd(2025, 1, 15));
        assert_eq!(parse_date("  2025-01-15 ").unwrap(), ymd(2025, 1, 15));
    }

    #[test]
    fn rejects_malformed_dates() {
        for raw in ["15/01/2025", "2025-13-01", "2025-01-15T10:00:00", ""] {
            let err = parse_date(raw).expect_err("date should be rejected");
            assert!(matches!(err, LedgerError::Parse(_)), "{raw}: {err}");
        }
    }

    #[test]
    fn rejects_non_numeric_amounts() {
        assert!(matches!(parse_amount("ten"), Err(LedgerError::Parse(_))));
        assert!(matches!(parse_amount("NaN"), Err(LedgerError::Parse(_))));
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
    }

    #[test]
    fn negative_amounts_are_stored_as_magnitude() {
        let entry = Entry::new(-40.0, "Groceries", "Food", "2025-01-15", EntryKind::Expense)
            .unwrap();
        assert_eq!(entry.amount(), 40.0);
        assert_eq!(entry.signed_amount(), -40.0);
    }

    #[test]
    fn kind_parsing_is_case_and_whitespace_insensitive() {
        assert_eq!(" Income ".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!("EXPENSE".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert!(matches!(
            "transfer".parse::<EntryKind>(),
            Err(LedgerError::InvalidKind(value)) if value == "transfer"
        ));
    }

    #[test]
    fn time_of_day_is_dropped() {
        let stamp = ymd(2025, 3, 9).and_hms_opt(23, 59, 59).unwrap();
        let entry = Entry::new(1.0, "Late", "Misc", stamp, EntryKind::Income).unwrap();
        assert_eq!(entry.date_text(), "2025-03-09");
        assert_eq!(entry.month_key(), "2025-03");
    }

    #[test]
    fn display_matches_listing_layout() {
        let entry = Entry::parse("100", "Paycheck", "Salary", "2025-01-01", "income").unwrap();
        assert_eq!(entry.to_string(), "2025-01-01: Paycheck | 100.00 | Salary | income");
    }

    #[test]
    fn labels_normalize_once() {
        let entry = Entry::new(3.0, "  Coffee ", " FOOD ", ymd(2025, 1, 1), EntryKind::Expense)
            .unwrap();
        assert_eq!(entry.normalized_description(), NormalizedLabel::new("coffee"));
        assert_eq!(entry.normalized_category().as_str(), "food");
    }
}
