//! Essentials calculator
//!
//! Sums the monthly cost of essentials: fixed expenses, the month's variable
//! expenses, and the sinking-fund share of irregular expenses.

use serde::Serialize;

use crate::error::DebtResult;
use crate::models::{BudgetMonth, Money};

use super::supplier::RecordSupplier;

/// The three components of a month's essentials and their total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EssentialsBreakdown {
    pub fixed: Money,
    pub variable: Money,
    pub sinking_fund: Money,
    pub total: Money,
}

/// Computes essential costs from supplied records
pub struct EssentialsCalculator<'a, S: ?Sized> {
    records: &'a S,
}

impl<'a, S: RecordSupplier + ?Sized> EssentialsCalculator<'a, S> {
    pub fn new(records: &'a S) -> Self {
        Self { records }
    }

    /// Sum of the monthly amount of every active fixed expense
    pub fn fixed_total(&self) -> DebtResult<Money> {
        let total: Money = self
            .records
            .active_fixed_expenses()?
            .iter()
            .map(|e| e.monthly_amount())
            .sum();
        tracing::debug!(%total, "fixed expenses");
        Ok(total)
    }

    /// Sum of every variable-expense entry recorded for `month`
    ///
    /// Entries count even when their parent expense has since been
    /// deactivated: an entry records what was spent that month.
    pub fn variable_total(&self, month: BudgetMonth) -> DebtResult<Money> {
        let total: Money = self
            .records
            .variable_entries(month)?
            .iter()
            .map(|v| v.amount)
            .sum();
        tracing::debug!(%month, %total, "variable expenses");
        Ok(total)
    }

    /// Monthly set-aside for active irregular expenses
    ///
    /// Each expense is divided by its frequency in months and rounded to the
    /// cent before summing.
    pub fn sinking_fund_total(&self) -> DebtResult<Money> {
        let total: Money = self
            .records
            .active_irregular_expenses()?
            .iter()
            .map(|i| i.monthly_contribution())
            .sum();
        tracing::debug!(%total, "sinking fund");
        Ok(total)
    }

    /// fixed + variable + sinking fund for `month`
    pub fn total_essentials(&self, month: BudgetMonth) -> DebtResult<Money> {
        Ok(self.breakdown(month)?.total)
    }

    pub fn breakdown(&self, month: BudgetMonth) -> DebtResult<EssentialsBreakdown> {
        let fixed = self.fixed_total()?;
        let variable = self.variable_total(month)?;
        let sinking_fund = self.sinking_fund_total()?;

        Ok(EssentialsBreakdown {
            fixed,
            variable,
            sinking_fund,
            total: fixed + variable + sinking_fund,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Frequency, IrregularExpense, VariableExpenseEntry};
    use crate::services::test_support::{month, store_with, FailingSupplier};
    use crate::storage::RecordSet;

    #[test]
    fn test_fixed_total_counts_only_active_fixed() {
        let mut cancelled = Expense::fixed("Gym", Money::from_dollars(40));
        cancelled.active = false;
        let mut unpriced = Expense::fixed("Parking", Money::zero());
        unpriced.fixed_amount = None;

        let store = store_with(RecordSet {
            expenses: vec![
                Expense::fixed("Rent", Money::from_dollars(1500)),
                Expense::fixed("Phone", Money::from_cents(4599)),
                Expense::variable("Groceries"),
                cancelled,
                unpriced,
            ],
            ..RecordSet::default()
        });

        let calc = EssentialsCalculator::new(&store);
        assert_eq!(calc.fixed_total().unwrap(), Money::from_cents(154599));
    }

    #[test]
    fn test_variable_total_is_month_scoped() {
        let groceries = Expense::variable("Groceries");
        let store = store_with(RecordSet {
            variable_entries: vec![
                VariableExpenseEntry::new(groceries.id, month(2025, 1), Money::from_dollars(400)),
                VariableExpenseEntry::new(groceries.id, month(2025, 2), Money::from_dollars(350)),
                VariableExpenseEntry::new(groceries.id, month(2024, 1), Money::from_dollars(999)),
            ],
            expenses: vec![groceries],
            ..RecordSet::default()
        });

        let calc = EssentialsCalculator::new(&store);
        assert_eq!(
            calc.variable_total(month(2025, 1)).unwrap(),
            Money::from_dollars(400)
        );
        assert_eq!(calc.variable_total(month(2025, 3)).unwrap(), Money::zero());
    }

    #[test]
    fn test_variable_total_includes_inactive_parents() {
        let mut retired = Expense::variable("Takeout");
        retired.active = false;
        let store = store_with(RecordSet {
            variable_entries: vec![VariableExpenseEntry::new(
                retired.id,
                month(2025, 1),
                Money::from_dollars(120),
            )],
            expenses: vec![retired],
            ..RecordSet::default()
        });

        let calc = EssentialsCalculator::new(&store);
        assert_eq!(
            calc.variable_total(month(2025, 1)).unwrap(),
            Money::from_dollars(120)
        );
    }

    #[test]
    fn test_sinking_fund_rounds_each_expense() {
        let hundred = Money::from_dollars(100);
        let mut lapsed = IrregularExpense::new("Lapsed", hundred, Frequency::Annual);
        lapsed.active = false;

        let store = store_with(RecordSet {
            irregular_expenses: vec![
                IrregularExpense::new("Annual", hundred, Frequency::Annual),
                IrregularExpense::new("Semi", hundred, Frequency::SemiAnnual),
                IrregularExpense::new("Quarterly", hundred, Frequency::Quarterly),
                lapsed,
            ],
            ..RecordSet::default()
        });

        let calc = EssentialsCalculator::new(&store);
        // 8.33 + 16.67 + 33.33
        assert_eq!(calc.sinking_fund_total().unwrap(), Money::from_cents(5833));
    }

    #[test]
    fn test_total_is_sum_of_parts() {
        let groceries = Expense::variable("Groceries");
        let store = store_with(RecordSet {
            variable_entries: vec![VariableExpenseEntry::new(
                groceries.id,
                month(2025, 1),
                Money::from_cents(31255),
            )],
            expenses: vec![Expense::fixed("Rent", Money::from_dollars(2000)), groceries],
            irregular_expenses: vec![IrregularExpense::new(
                "Insurance",
                Money::from_dollars(1200),
                Frequency::Annual,
            )],
            ..RecordSet::default()
        });

        let calc = EssentialsCalculator::new(&store);
        let breakdown = calc.breakdown(month(2025, 1)).unwrap();

        assert_eq!(breakdown.fixed, Money::from_dollars(2000));
        assert_eq!(breakdown.variable, Money::from_cents(31255));
        assert_eq!(breakdown.sinking_fund, Money::from_dollars(100));
        assert_eq!(
            breakdown.total,
            breakdown.fixed + breakdown.variable + breakdown.sinking_fund
        );
        assert_eq!(
            calc.total_essentials(month(2025, 1)).unwrap(),
            Money::from_cents(241255)
        );
    }

    #[test]
    fn test_no_records_is_zero() {
        let store = store_with(RecordSet::default());
        let calc = EssentialsCalculator::new(&store);
        assert_eq!(calc.total_essentials(month(2025, 1)).unwrap(), Money::zero());
    }

    #[test]
    fn test_supplier_error_propagates() {
        let calc = EssentialsCalculator::new(&FailingSupplier);
        let err = calc.total_essentials(month(2025, 1)).unwrap_err();
        assert_eq!(err.to_string(), FailingSupplier::MESSAGE);
    }
}
