//! Monthly income record
//!
//! At most one income record exists per month. A month without one is treated
//! by the engine as "nothing entered yet", not as zero income.

use serde::{Deserialize, Serialize};

use super::ids::IncomeId;
use super::money::Money;
use super::month::BudgetMonth;

/// Income received for one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    pub id: IncomeId,
    #[serde(flatten)]
    pub period: BudgetMonth,
    pub amount: Money,
    #[serde(default)]
    pub notes: String,
}

impl Income {
    pub fn new(period: BudgetMonth, amount: Money) -> Self {
        Self {
            id: IncomeId::new(),
            period,
            amount,
            notes: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), IncomeValidationError> {
        if !self.period.is_valid() {
            return Err(IncomeValidationError::InvalidMonth(self.period.month));
        }
        if self.amount.is_negative() {
            return Err(IncomeValidationError::NegativeAmount);
        }
        if self.amount.exceeds_record_limit() {
            return Err(IncomeValidationError::AmountTooLarge);
        }
        Ok(())
    }
}

/// Validation errors for income records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IncomeValidationError {
    NegativeAmount,
    AmountTooLarge,
    InvalidMonth(u32),
}

impl std::fmt::Display for IncomeValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Income cannot be negative"),
            Self::AmountTooLarge => write!(f, "Income cannot exceed {}", Money::MAX_RECORD),
            Self::InvalidMonth(m) => write!(f, "Invalid income month: {}", m),
        }
    }
}

impl std::error::Error for IncomeValidationError {}
