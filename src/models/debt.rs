//! Debt account model
//!
//! Covers both revolving credit (cards, lines of credit) and installment
//! loans. An account is revolving when it has a positive credit limit.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::expense::default_active;
use super::ids::DebtAccountId;
use super::money::{div_round_half_up, div_round_half_up_wide, Money};

/// Kind of debt account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DebtAccountType {
    #[default]
    CreditCard,
    LineOfCredit,
    PersonalLoan,
    AutoLoan,
    StudentLoan,
    Mortgage,
    Medical,
    Other,
}

impl fmt::Display for DebtAccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CreditCard => "Credit Card",
            Self::LineOfCredit => "Line of Credit",
            Self::PersonalLoan => "Personal Loan",
            Self::AutoLoan => "Auto Loan",
            Self::StudentLoan => "Student Loan",
            Self::Mortgage => "Mortgage",
            Self::Medical => "Medical",
            Self::Other => "Other",
        };
        f.pad(name)
    }
}

/// A debt being paid down
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebtAccount {
    pub id: DebtAccountId,
    pub name: String,
    #[serde(default)]
    pub account_type: DebtAccountType,
    pub current_balance: Money,
    /// Set for revolving accounts; absent (or zero) for installment loans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_limit: Option<Money>,
    pub minimum_payment: Money,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl DebtAccount {
    /// Create an active revolving account
    pub fn revolving(
        name: impl Into<String>,
        current_balance: Money,
        credit_limit: Money,
        minimum_payment: Money,
    ) -> Self {
        Self {
            id: DebtAccountId::new(),
            name: name.into(),
            account_type: DebtAccountType::CreditCard,
            current_balance,
            credit_limit: Some(credit_limit),
            minimum_payment,
            active: true,
        }
    }

    /// Create an active installment loan
    pub fn loan(
        name: impl Into<String>,
        account_type: DebtAccountType,
        current_balance: Money,
        minimum_payment: Money,
    ) -> Self {
        Self {
            id: DebtAccountId::new(),
            name: name.into(),
            account_type,
            current_balance,
            credit_limit: None,
            minimum_payment,
            active: true,
        }
    }

    pub fn is_revolving(&self) -> bool {
        self.credit_limit.is_some_and(|limit| limit.is_positive())
    }

    /// Balance over limit; zero for loans
    pub fn utilization(&self) -> Utilization {
        match self.credit_limit {
            Some(limit) if !limit.is_zero() => Utilization::of(self.current_balance, limit),
            _ => Utilization::zero(),
        }
    }

    pub fn validate(&self) -> Result<(), DebtValidationError> {
        if self.name.trim().is_empty() {
            return Err(DebtValidationError::EmptyName);
        }
        let negative = self.current_balance.is_negative()
            || self.minimum_payment.is_negative()
            || self.credit_limit.is_some_and(|l| l.is_negative());
        if negative {
            return Err(DebtValidationError::NegativeAmount(self.name.clone()));
        }
        let too_large = self.current_balance.exceeds_record_limit()
            || self.minimum_payment.exceeds_record_limit()
            || self.credit_limit.is_some_and(|l| l.exceeds_record_limit());
        if too_large {
            return Err(DebtValidationError::AmountTooLarge(self.name.clone()));
        }
        Ok(())
    }
}

impl fmt::Display for DebtAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.account_type)
    }
}

/// Balance-to-limit ratio held at four decimal places
///
/// Stored as ten-thousandths, so `Utilization::from_basis(2000)` is 0.2000.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Utilization(i64);

impl Utilization {
    const SCALE: i128 = 10_000;

    pub const fn zero() -> Self {
        Self(0)
    }

    pub const fn from_basis(ten_thousandths: i64) -> Self {
        Self(ten_thousandths)
    }

    /// `balance / limit`, rounded half-up to four decimals
    ///
    /// Ratios beyond the range of `i64` saturate.
    ///
    /// # Panics
    ///
    /// Panics if `limit` is zero.
    pub fn of(balance: Money, limit: Money) -> Self {
        assert!(!limit.is_zero(), "utilization of a zero credit limit");
        let scaled = i128::from(balance.cents()) * Self::SCALE;
        let ratio = div_round_half_up_wide(scaled, i128::from(limit.cents()));
        Self(i64::try_from(ratio).unwrap_or(if ratio < 0 { i64::MIN } else { i64::MAX }))
    }

    pub const fn basis(&self) -> i64 {
        self.0
    }

    /// Percentage with one decimal, rounded half-up ("45.7")
    pub fn percent_display(&self) -> String {
        let tenths = div_round_half_up(self.0, 10);
        let sign = if tenths < 0 { "-" } else { "" };
        format!("{}{}.{}", sign, (tenths / 10).abs(), (tenths % 10).abs())
    }
}

impl fmt::Display for Utilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let s = format!("{}{}.{:04}", sign, (self.0 / 10_000).abs(), (self.0 % 10_000).abs());
        f.pad(&s)
    }
}

/// Validation errors for debt accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DebtValidationError {
    EmptyName,
    NegativeAmount(String),
    AmountTooLarge(String),
}

impl fmt::Display for DebtValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Debt account name cannot be empty"),
            Self::NegativeAmount(name) => {
                write!(f, "Debt account amounts cannot be negative: {}", name)
            }
            Self::AmountTooLarge(name) => write!(
                f,
                "Debt account amounts cannot exceed {}: {}",
                Money::MAX_RECORD,
                name
            ),
        }
    }
}

impl std::error::Error for DebtValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revolving_utilization() {
        let maxed = DebtAccount::revolving(
            "A",
            Money::from_dollars(5000),
            Money::from_dollars(5000),
            Money::from_dollars(100),
        );
        assert!(maxed.is_revolving());
        assert_eq!(maxed.utilization(), Utilization::from_basis(10_000));

        let light = DebtAccount::revolving(
            "B",
            Money::from_dollars(2000),
            Money::from_dollars(10000),
            Money::from_dollars(50),
        );
        assert_eq!(light.utilization(), Utilization::from_basis(2000));
    }

    #[test]
    fn test_utilization_rounds_half_up() {
        // 1/3 = 0.33333 -> 0.3333
        let u = Utilization::of(Money::from_dollars(1), Money::from_dollars(3));
        assert_eq!(u.basis(), 3333);
        // 2/3 = 0.66667 -> 0.6667
        let u = Utilization::of(Money::from_dollars(2), Money::from_dollars(3));
        assert_eq!(u.basis(), 6667);
        // 0.00005 -> 0.0001
        let u = Utilization::of(Money::from_cents(1), Money::from_cents(20000));
        assert_eq!(u.basis(), 1);
    }

    #[test]
    fn test_loans_have_zero_utilization() {
        let car = DebtAccount::loan(
            "Car",
            DebtAccountType::AutoLoan,
            Money::from_dollars(12000),
            Money::from_dollars(350),
        );
        assert!(!car.is_revolving());
        assert_eq!(car.utilization(), Utilization::zero());

        let mut zero_limit = car.clone();
        zero_limit.credit_limit = Some(Money::zero());
        assert!(!zero_limit.is_revolving());
        assert_eq!(zero_limit.utilization(), Utilization::zero());
    }

    #[test]
    fn test_utilization_display() {
        assert_eq!(Utilization::from_basis(10_000).to_string(), "1.0000");
        assert_eq!(Utilization::from_basis(2000).to_string(), "0.2000");
        assert_eq!(Utilization::from_basis(10_000).percent_display(), "100.0");
        assert_eq!(Utilization::from_basis(4567).percent_display(), "45.7");
        assert_eq!(Utilization::from_basis(4565).percent_display(), "45.7");
        assert_eq!(Utilization::from_basis(4564).percent_display(), "45.6");
        assert_eq!(Utilization::zero().percent_display(), "0.0");
    }

    #[test]
    fn test_validation() {
        let mut debt = DebtAccount::revolving(
            "Visa",
            Money::from_dollars(100),
            Money::from_dollars(1000),
            Money::from_dollars(25),
        );
        assert!(debt.validate().is_ok());

        debt.minimum_payment = Money::from_cents(-1);
        assert!(matches!(
            debt.validate(),
            Err(DebtValidationError::NegativeAmount(_))
        ));

        debt.minimum_payment = Money::from_dollars(25);
        debt.current_balance = Money::MAX_RECORD;
        assert!(debt.validate().is_ok());

        debt.current_balance = Money::from_cents(1_000_000_000_000_000);
        assert!(matches!(
            debt.validate(),
            Err(DebtValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_huge_utilization_stays_positive() {
        let u = Utilization::of(Money::from_cents(1_000_000_000_000_000), Money::from_cents(1));
        assert_eq!(u, Utilization::from_basis(i64::MAX));
        assert!(u > Utilization::from_basis(1000));

        let u = Utilization::of(Money::MAX_RECORD, Money::from_cents(1));
        assert_eq!(u.basis(), 99_999_999_990_000);
    }
}
