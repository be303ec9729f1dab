//! Essential expense models
//!
//! Fixed expenses cost the same every month. Variable expenses record a
//! separate amount for each month they occur in.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{ExpenseId, VariableEntryId};
use super::money::Money;
use super::month::BudgetMonth;

/// Whether an expense is charged at a fixed amount or varies by month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseType {
    Fixed,
    Variable,
}

/// Broad grouping for essential expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Housing,
    Utilities,
    Transportation,
    Insurance,
    Groceries,
    Healthcare,
    Childcare,
    #[default]
    Other,
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Transportation => "Transportation",
            Self::Insurance => "Insurance",
            Self::Groceries => "Groceries",
            Self::Healthcare => "Healthcare",
            Self::Childcare => "Childcare",
            Self::Other => "Other",
        };
        f.pad(name)
    }
}

/// An essential expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    pub name: String,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub expense_type: ExpenseType,
    /// Monthly amount for fixed expenses; unused for variable ones
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_amount: Option<Money>,
    #[serde(default = "default_active")]
    pub active: bool,
}

pub(crate) fn default_active() -> bool {
    true
}

impl Expense {
    /// Create an active fixed expense
    pub fn fixed(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            category: ExpenseCategory::default(),
            expense_type: ExpenseType::Fixed,
            fixed_amount: Some(amount),
            active: true,
        }
    }

    /// Create an active variable expense
    pub fn variable(name: impl Into<String>) -> Self {
        Self {
            id: ExpenseId::new(),
            name: name.into(),
            category: ExpenseCategory::default(),
            expense_type: ExpenseType::Variable,
            fixed_amount: None,
            active: true,
        }
    }

    pub fn with_category(mut self, category: ExpenseCategory) -> Self {
        self.category = category;
        self
    }

    pub fn is_fixed(&self) -> bool {
        self.expense_type == ExpenseType::Fixed
    }

    /// The monthly amount this expense contributes, zero when unset
    pub fn monthly_amount(&self) -> Money {
        self.fixed_amount.unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.name.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyName);
        }
        if self.fixed_amount.is_some_and(|m| m.is_negative()) {
            return Err(ExpenseValidationError::NegativeAmount(self.name.clone()));
        }
        if self.fixed_amount.is_some_and(|m| m.exceeds_record_limit()) {
            return Err(ExpenseValidationError::AmountTooLarge(self.name.clone()));
        }
        Ok(())
    }
}

/// The amount a variable expense came to in one month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableExpenseEntry {
    pub id: VariableEntryId,
    pub expense_id: ExpenseId,
    #[serde(flatten)]
    pub period: BudgetMonth,
    pub amount: Money,
    #[serde(default)]
    pub notes: String,
}

impl VariableExpenseEntry {
    pub fn new(expense_id: ExpenseId, period: BudgetMonth, amount: Money) -> Self {
        Self {
            id: VariableEntryId::new(),
            expense_id,
            period,
            amount,
            notes: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if !self.period.is_valid() {
            return Err(ExpenseValidationError::InvalidMonth(self.period.month));
        }
        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.id.to_string()));
        }
        if self.amount.exceeds_record_limit() {
            return Err(ExpenseValidationError::AmountTooLarge(self.id.to_string()));
        }
        Ok(())
    }
}

/// Validation errors for expenses and variable entries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyName,
    NegativeAmount(String),
    AmountTooLarge(String),
    InvalidMonth(u32),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::NegativeAmount(name) => write!(f, "Expense amount cannot be negative: {}", name),
            Self::AmountTooLarge(name) => write!(
                f,
                "Expense amount cannot exceed {}: {}",
                Money::MAX_RECORD,
                name
            ),
            Self::InvalidMonth(m) => write!(f, "Invalid expense month: {}", m),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_expense() {
        let rent = Expense::fixed("Rent", Money::from_dollars(1500))
            .with_category(ExpenseCategory::Housing);
        assert!(rent.is_fixed());
        assert_eq!(rent.monthly_amount(), Money::from_dollars(1500));
        assert!(rent.validate().is_ok());
    }

    #[test]
    fn test_variable_expense_has_no_monthly_amount() {
        let groceries = Expense::variable("Groceries");
        assert!(!groceries.is_fixed());
        assert_eq!(groceries.monthly_amount(), Money::zero());
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            Expense::fixed("  ", Money::zero()).validate(),
            Err(ExpenseValidationError::EmptyName)
        );
        assert!(Expense::fixed("Rent", Money::from_cents(-1))
            .validate()
            .is_err());
        assert_eq!(
            Expense::fixed("Rent", Money::from_cents(i64::MAX / 2 + 1)).validate(),
            Err(ExpenseValidationError::AmountTooLarge("Rent".to_string()))
        );
    }

    #[test]
    fn test_variable_entry_validation() {
        let groceries = Expense::variable("Groceries");
        let period = BudgetMonth::new(2025, 1).unwrap();

        let entry = VariableExpenseEntry::new(groceries.id, period, Money::MAX_RECORD);
        assert!(entry.validate().is_ok());

        let entry = VariableExpenseEntry::new(groceries.id, period, Money::from_cents(10_000_000_000));
        assert!(matches!(
            entry.validate(),
            Err(ExpenseValidationError::AmountTooLarge(_))
        ));
    }

    #[test]
    fn test_deserialize_defaults() {
        let json = r#"{
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "name": "Rent",
            "expense_type": "FIXED",
            "fixed_amount": 150000
        }"#;
        let expense: Expense = serde_json::from_str(json).unwrap();
        assert!(expense.active);
        assert_eq!(expense.category, ExpenseCategory::Other);
        assert_eq!(expense.monthly_amount().cents(), 150000);
    }
}
