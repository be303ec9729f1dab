//! Calendar month used to key income, variable expenses, and payments
//!
//! Every engine calculation is scoped to one `BudgetMonth`.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A (year, month) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BudgetMonth {
    pub year: i32,
    pub month: u32,
}

impl BudgetMonth {
    /// Create a month, rejecting month numbers outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn is_valid(&self) -> bool {
        (1..=12).contains(&self.month)
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Human-friendly form, e.g. "January 2025"
    pub fn friendly(&self) -> String {
        match MONTH_NAMES.get(self.month.wrapping_sub(1) as usize) {
            Some(name) => format!("{} {}", name, self.year),
            None => self.to_string(),
        }
    }

    /// Parse a month string or fall back to the current month
    pub fn parse_or_current(s: Option<&str>) -> Result<Self, MonthParseError> {
        match s {
            Some(s) => Self::parse_relative(s, Local::now().date_naive()),
            None => Ok(Self::current()),
        }
    }

    /// Parse a month string, resolving relative references against `today`
    ///
    /// Formats:
    /// - "2025-01", "2025/01"
    /// - "January 2025", "Jan 2025", "jan" (most recent January)
    /// - "current", "last", "next"
    pub fn parse_relative(s: &str, today: NaiveDate) -> Result<Self, MonthParseError> {
        let lower = s.trim().to_lowercase();
        let this_month = Self::containing(today);

        match lower.as_str() {
            "current" | "now" | "this" => return Ok(this_month),
            "last" | "previous" | "prev" => return Ok(this_month.prev()),
            "next" => return Ok(this_month.next()),
            _ => {}
        }

        if let Some(month) = parse_month_name(&lower, today)? {
            return Ok(month);
        }

        Self::parse(&lower)
    }

    /// Parse a strict "YYYY-MM" (or "YYYY/MM") string
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (year, month) = s
            .split_once('-')
            .or_else(|| s.split_once('/'))
            .ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

fn parse_month_name(s: &str, today: NaiveDate) -> Result<Option<BudgetMonth>, MonthParseError> {
    let Some(first) = s.split_whitespace().next() else {
        return Ok(None);
    };
    if first.len() < 3 || !first.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(None);
    }

    let Some(index) = MONTH_NAMES
        .iter()
        .position(|name| name.to_lowercase().starts_with(first))
    else {
        return Err(MonthParseError::InvalidFormat(s.to_string()));
    };
    let month = index as u32 + 1;

    let rest = s[first.len()..].trim();
    let year = if rest.is_empty() {
        // A bare month name means its most recent occurrence
        if month > today.month() {
            today.year() - 1
        } else {
            today.year()
        }
    } else {
        rest.parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?
    };

    Ok(Some(BudgetMonth { year, month }))
}

impl fmt::Display for BudgetMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month format: {}", s),
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}
