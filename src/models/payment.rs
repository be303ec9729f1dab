//! Payments made against a debt account in a given month

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::{DebtAccountId, DebtPaymentId};
use super::money::Money;
use super::month::BudgetMonth;

/// One month's payment toward a debt account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtPayment {
    pub id: DebtPaymentId,
    pub debt_account_id: DebtAccountId,
    #[serde(flatten)]
    pub period: BudgetMonth,
    pub amount_paid: Money,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
}

impl DebtPayment {
    pub fn new(debt_account_id: DebtAccountId, period: BudgetMonth, amount_paid: Money) -> Self {
        Self {
            id: DebtPaymentId::new(),
            debt_account_id,
            period,
            amount_paid,
            payment_date: None,
        }
    }

    pub fn validate(&self) -> Result<(), PaymentValidationError> {
        if !self.period.is_valid() {
            return Err(PaymentValidationError::InvalidMonth(self.period.month));
        }
        if self.amount_paid.is_negative() {
            return Err(PaymentValidationError::NegativeAmount);
        }
        if self.amount_paid.exceeds_record_limit() {
            return Err(PaymentValidationError::AmountTooLarge);
        }
        Ok(())
    }
}

/// Validation errors for debt payments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentValidationError {
    NegativeAmount,
    AmountTooLarge,
    InvalidMonth(u32),
}

impl std::fmt::Display for PaymentValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeAmount => write!(f, "Payment amount cannot be negative"),
            Self::AmountTooLarge => {
                write!(f, "Payment amount cannot exceed {}", Money::MAX_RECORD)
            }
            Self::InvalidMonth(m) => write!(f, "Invalid payment month: {}", m),
        }
    }
}

impl std::error::Error for PaymentValidationError {}
