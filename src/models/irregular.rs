//! Irregular (less-than-monthly) expenses
//!
//! An irregular expense is a lump sum such as an annual insurance premium.
//! Budgeting sets aside a monthly sinking-fund share of it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::default_active;
use super::ids::IrregularExpenseId;
use super::money::Money;

/// How often an irregular expense comes due
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Frequency {
    Annual,
    SemiAnnual,
    Quarterly,
}

impl Frequency {
    /// Number of months between occurrences
    pub const fn months(self) -> i64 {
        match self {
            Self::Annual => 12,
            Self::SemiAnnual => 6,
            Self::Quarterly => 3,
        }
    }

    /// The monthly share of `amount`, rounded half-up to the cent
    pub fn monthly_share(self, amount: Money) -> Money {
        amount.div_round_half_up(self.months())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Annual => "Annual",
            Self::SemiAnnual => "Semi-annual",
            Self::Quarterly => "Quarterly",
        };
        f.pad(name)
    }
}

/// A lump-sum expense recurring less often than monthly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IrregularExpense {
    pub id: IrregularExpenseId,
    pub name: String,
    pub amount: Money,
    pub frequency: Frequency,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<NaiveDate>,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl IrregularExpense {
    pub fn new(name: impl Into<String>, amount: Money, frequency: Frequency) -> Self {
        Self {
            id: IrregularExpenseId::new(),
            name: name.into(),
            amount,
            frequency,
            next_due_date: None,
            active: true,
        }
    }

    /// Monthly sinking-fund contribution for this expense
    pub fn monthly_contribution(&self) -> Money {
        self.frequency.monthly_share(self.amount)
    }

    pub fn validate(&self) -> Result<(), IrregularValidationError> {
        if self.name.trim().is_empty() {
            return Err(IrregularValidationError::EmptyName);
        }
        if self.amount.is_negative() {
            return Err(IrregularValidationError::NegativeAmount(self.name.clone()));
        }
        if self.amount.exceeds_record_limit() {
            return Err(IrregularValidationError::AmountTooLarge(self.name.clone()));
        }
        Ok(())
    }
}

/// Validation errors for irregular expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrregularValidationError {
    EmptyName,
    NegativeAmount(String),
    AmountTooLarge(String),
}

impl fmt::Display for IrregularValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Irregular expense name cannot be empty"),
            Self::NegativeAmount(name) => {
                write!(f, "Irregular expense amount cannot be negative: {}", name)
            }
            Self::AmountTooLarge(name) => write!(
                f,
                "Irregular expense amount cannot exceed {}: {}",
                Money::MAX_RECORD,
                name
            ),
        }
    }
}

impl std::error::Error for IrregularValidationError {}
