//! Record snapshot file format
//!
//! `records.json` holds every record the engine reads, one list per record
//! type. The file is produced by whatever tool manages the records; this
//! crate only reads it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{DebtError, DebtResult};
use crate::models::{
    BudgetMonth, DebtAccount, DebtAccountId, DebtPayment, Expense, ExpenseId, Income,
    IrregularExpense, VariableExpenseEntry,
};

/// Serializable snapshot of all records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub income: Vec<Income>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub variable_entries: Vec<VariableExpenseEntry>,
    #[serde(default)]
    pub irregular_expenses: Vec<IrregularExpense>,
    #[serde(default)]
    pub debts: Vec<DebtAccount>,
    #[serde(default)]
    pub payments: Vec<DebtPayment>,
}

impl RecordSet {
    /// Check the guarantees the engine relies on
    ///
    /// Amounts are never negative or above [`Money::MAX_RECORD`], months are
    /// in range, and there is at most one income per month and one payment
    /// per (debt, month). Variable entries must refer to known expenses and
    /// payments to known debts.
    ///
    /// [`Money::MAX_RECORD`]: crate::models::Money::MAX_RECORD
    pub fn validate(&self) -> DebtResult<()> {
        let mut income_months: HashSet<BudgetMonth> = HashSet::new();
        for income in &self.income {
            income.validate().map_err(invalid)?;
            if !income_months.insert(income.period) {
                return Err(DebtError::Duplicate {
                    entity_type: "Income",
                    identifier: income.period.to_string(),
                });
            }
        }

        for expense in &self.expenses {
            expense.validate().map_err(invalid)?;
        }

        let expense_ids: HashSet<ExpenseId> = self.expenses.iter().map(|e| e.id).collect();
        for entry in &self.variable_entries {
            entry.validate().map_err(invalid)?;
            if !expense_ids.contains(&entry.expense_id) {
                return Err(DebtError::expense_not_found(entry.expense_id.to_string()));
            }
        }

        for irregular in &self.irregular_expenses {
            irregular.validate().map_err(invalid)?;
        }

        for debt in &self.debts {
            debt.validate().map_err(invalid)?;
        }

        let debt_ids: HashSet<DebtAccountId> = self.debts.iter().map(|d| d.id).collect();
        let mut paid: HashSet<(DebtAccountId, BudgetMonth)> = HashSet::new();
        for payment in &self.payments {
            payment.validate().map_err(invalid)?;
            if !debt_ids.contains(&payment.debt_account_id) {
                return Err(DebtError::debt_not_found(payment.debt_account_id.to_string()));
            }
            if !paid.insert((payment.debt_account_id, payment.period)) {
                return Err(DebtError::Duplicate {
                    entity_type: "Payment",
                    identifier: format!("{} {}", payment.debt_account_id, payment.period),
                });
            }
        }

        Ok(())
    }

    /// Total number of records across all lists
    pub fn len(&self) -> usize {
        self.income.len()
            + self.expenses.len()
            + self.variable_entries.len()
            + self.irregular_expenses.len()
            + self.debts.len()
            + self.payments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn invalid(err: impl std::fmt::Display) -> DebtError {
    DebtError::Validation(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DebtAccountType, Frequency, Money};

    fn jan() -> BudgetMonth {
        BudgetMonth::new(2025, 1).unwrap()
    }

    fn sample() -> RecordSet {
        let debt = DebtAccount::loan(
            "Car",
            DebtAccountType::AutoLoan,
            Money::from_dollars(9000),
            Money::from_dollars(300),
        );
        RecordSet {
            income: vec![Income::new(jan(), Money::from_dollars(4000))],
            expenses: vec![Expense::fixed("Rent", Money::from_dollars(1500))],
            variable_entries: vec![],
            irregular_expenses: vec![IrregularExpense::new(
                "Insurance",
                Money::from_dollars(600),
                Frequency::SemiAnnual,
            )],
            payments: vec![DebtPayment::new(debt.id, jan(), Money::from_dollars(300))],
            debts: vec![debt],
        }
    }

    #[test]
    fn test_valid_set() {
        let set = sample();
        assert!(set.validate().is_ok());
        assert_eq!(set.len(), 5);
        assert!(!set.is_empty());
        assert!(RecordSet::default().is_empty());
    }

    #[test]
    fn test_duplicate_income_month_rejected() {
        let mut set = sample();
        set.income.push(Income::new(jan(), Money::from_dollars(1)));

        let err = set.validate().unwrap_err();
        assert!(matches!(err, DebtError::Duplicate { entity_type: "Income", .. }));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut set = sample();
        set.irregular_expenses[0].amount = Money::from_cents(-100);

        assert!(set.validate().unwrap_err().is_validation());
    }

    #[test]
    fn test_oversized_amounts_rejected() {
        let mut set = sample();
        set.expenses = vec![
            Expense::fixed("Rent", Money::from_cents(i64::MAX / 2 + 1)),
            Expense::fixed("Mortgage", Money::from_cents(i64::MAX / 2 + 1)),
        ];
        assert!(set.validate().unwrap_err().is_validation());

        let mut set = sample();
        set.debts[0].current_balance = Money::from_cents(1_000_000_000_000_000);
        let err = set.validate().unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Car"));

        let mut set = sample();
        set.income[0].amount = Money::MAX_RECORD;
        set.debts[0].current_balance = Money::MAX_RECORD;
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_variable_entry_for_unknown_expense_rejected() {
        let mut set = sample();
        let groceries = Expense::variable("Groceries");
        set.variable_entries
            .push(VariableExpenseEntry::new(groceries.id, jan(), Money::from_dollars(400)));

        let err = set.validate().unwrap_err();
        assert!(err.is_not_found());
        assert!(matches!(err, DebtError::NotFound { entity_type: "Expense", .. }));

        set.expenses.push(groceries);
        assert!(set.validate().is_ok());
    }

    #[test]
    fn test_payment_for_unknown_debt_rejected() {
        let mut set = sample();
        set.payments
            .push(DebtPayment::new(DebtAccountId::new(), jan(), Money::from_dollars(1)));

        assert!(set.validate().unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_payment_rejected() {
        let mut set = sample();
        let again = DebtPayment::new(set.debts[0].id, jan(), Money::from_dollars(5));
        set.payments.push(again);

        assert!(matches!(
            set.validate().unwrap_err(),
            DebtError::Duplicate { entity_type: "Payment", .. }
        ));
    }

    #[test]
    fn test_missing_lists_default_to_empty() {
        let set: RecordSet = serde_json::from_str(r#"{"income": []}"#).unwrap();
        assert!(set.is_empty());
    }
}
