//! Leftover calculator
//!
//! Income minus essentials for a month, never below zero.

use crate::error::DebtResult;
use crate::models::{BudgetMonth, Money};

use super::essentials::EssentialsCalculator;
use super::supplier::RecordSupplier;

pub struct LeftoverCalculator<'a, S: ?Sized> {
    records: &'a S,
}

impl<'a, S: RecordSupplier + ?Sized> LeftoverCalculator<'a, S> {
    pub fn new(records: &'a S) -> Self {
        Self { records }
    }

    /// Cash available for debt payments in `month`
    ///
    /// Zero when no income is recorded for the month. Essentials are not
    /// computed in that case.
    pub fn leftover(&self, month: BudgetMonth) -> DebtResult<Money> {
        let Some(income) = self.records.income(month)? else {
            tracing::debug!(%month, "no income recorded");
            return Ok(Money::zero());
        };

        let essentials = EssentialsCalculator::new(self.records).total_essentials(month)?;
        let leftover = (income.amount - essentials).floor_zero();
        tracing::debug!(%month, income = %income.amount, %essentials, %leftover, "leftover");
        Ok(leftover)
    }

    /// How far essentials exceed income, if they do
    ///
    /// `None` when no income is recorded or income covers essentials.
    pub fn shortfall(&self, month: BudgetMonth) -> DebtResult<Option<Money>> {
        let Some(income) = self.records.income(month)? else {
            return Ok(None);
        };

        let essentials = EssentialsCalculator::new(self.records).total_essentials(month)?;
        let gap = essentials - income.amount;
        Ok(gap.is_positive().then_some(gap))
    }
}
