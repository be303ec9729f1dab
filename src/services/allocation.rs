//! Debt allocation engine
//!
//! Turns a month's leftover cash into a ranked payment plan. Every active
//! debt gets at least its minimum; any surplus goes to the most utilized
//! revolving accounts first, capped at what each account still owes above
//! its minimum.

use crate::error::DebtResult;
use crate::models::{
    BudgetMonth, DebtAccount, DebtRecommendation, Money, RecommendationReason, Utilization,
};

use super::leftover::LeftoverCalculator;
use super::supplier::RecordSupplier;

pub struct AllocationEngine<'a, S: ?Sized> {
    records: &'a S,
}

impl<'a, S: RecordSupplier + ?Sized> AllocationEngine<'a, S> {
    pub fn new(records: &'a S) -> Self {
        Self { records }
    }

    /// Sum of minimum payments across active debts
    pub fn total_minimums(&self) -> DebtResult<Money> {
        Ok(sum_minimums(&self.records.active_debt_accounts()?))
    }

    /// Ranked payment plan for `month`
    ///
    /// Empty when there is no leftover cash or no active debt. When leftover
    /// cannot cover every minimum, each debt is listed at its minimum with
    /// rank 0 in supplier order.
    pub fn recommendations(&self, month: BudgetMonth) -> DebtResult<Vec<DebtRecommendation>> {
        let leftover = LeftoverCalculator::new(self.records).leftover(month)?;
        if !leftover.is_positive() {
            tracing::debug!(%month, "no leftover cash, empty plan");
            return Ok(Vec::new());
        }

        let debts = self.records.active_debt_accounts()?;
        if debts.is_empty() {
            tracing::debug!(%month, "no active debts, empty plan");
            return Ok(Vec::new());
        }

        let total_minimums = sum_minimums(&debts);
        if leftover < total_minimums {
            tracing::info!(%month, %leftover, %total_minimums, "leftover below minimums");
            return Ok(minimums_only(debts));
        }

        let extra = leftover - total_minimums;
        tracing::info!(%month, %leftover, %total_minimums, %extra, "allocating surplus");
        Ok(allocate(debts, extra))
    }
}

fn sum_minimums(debts: &[DebtAccount]) -> Money {
    debts.iter().map(|d| d.minimum_payment).sum()
}

fn minimums_only(debts: Vec<DebtAccount>) -> Vec<DebtRecommendation> {
    debts
        .into_iter()
        .map(|debt| DebtRecommendation {
            debt_account_id: debt.id,
            account_name: debt.name,
            recommended_payment: debt.minimum_payment,
            priority_rank: 0,
            reason: RecommendationReason::MinimumPaymentOnly,
            utilization: None,
        })
        .collect()
}

fn allocate(debts: Vec<DebtAccount>, mut extra: Money) -> Vec<DebtRecommendation> {
    let mut ranked: Vec<(DebtAccount, Utilization)> = debts
        .into_iter()
        .map(|debt| {
            let utilization = debt.utilization();
            (debt, utilization)
        })
        .collect();

    // sort_by is stable: equal utilization keeps supplier order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    ranked
        .into_iter()
        .zip(1u32..)
        .map(|((debt, utilization), rank)| {
            let mut payment = debt.minimum_payment;
            let reason = if extra.is_positive() {
                // A balance already below its minimum gets no extra, never less
                let headroom = (debt.current_balance - debt.minimum_payment).floor_zero();
                let additional = extra.min(headroom);
                payment += additional;
                extra -= additional;
                RecommendationReason::HighUtilization(utilization)
            } else {
                RecommendationReason::MinimumPayment
            };

            tracing::debug!(
                debt = %debt.name,
                rank,
                %utilization,
                %payment,
                "recommendation"
            );

            DebtRecommendation {
                debt_account_id: debt.id,
                account_name: debt.name,
                recommended_payment: payment,
                priority_rank: rank,
                reason,
                utilization: Some(utilization),
            }
        })
        .collect()
}
