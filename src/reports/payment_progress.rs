//! Payment Progress Report
//!
//! Compares what has been paid toward each debt this month with what the
//! plan recommends.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::DebtResult;
use crate::models::{BudgetMonth, DebtAccountId, Money};
use crate::services::{AllocationEngine, RecordSupplier};

/// Progress toward one recommended payment
#[derive(Debug, Clone, Serialize)]
pub struct ProgressRow {
    pub debt_account_id: DebtAccountId,
    pub account_name: String,
    pub priority_rank: u32,
    pub recommended: Money,
    pub paid: Money,
    /// Recommended minus paid, never below zero
    pub remaining: Money,
}

impl ProgressRow {
    pub fn is_complete(&self) -> bool {
        self.remaining.is_zero()
    }
}

/// Payment Progress Report
#[derive(Debug, Clone, Serialize)]
pub struct PaymentProgressReport {
    pub month: BudgetMonth,
    pub rows: Vec<ProgressRow>,
    pub total_recommended: Money,
    pub total_paid: Money,
    pub total_remaining: Money,
}

impl PaymentProgressReport {
    /// Generate a progress report for a month
    pub fn generate<S: RecordSupplier + ?Sized>(records: &S, month: BudgetMonth) -> DebtResult<Self> {
        let recommendations = AllocationEngine::new(records).recommendations(month)?;

        let mut paid_by_debt: HashMap<DebtAccountId, Money> = HashMap::new();
        for payment in records.debt_payments(month)? {
            *paid_by_debt.entry(payment.debt_account_id).or_default() += payment.amount_paid;
        }

        let mut rows = Vec::with_capacity(recommendations.len());
        let mut total_recommended = Money::zero();
        let mut total_paid = Money::zero();
        let mut total_remaining = Money::zero();

        for rec in recommendations {
            let paid = paid_by_debt
                .get(&rec.debt_account_id)
                .copied()
                .unwrap_or_default();
            let remaining = (rec.recommended_payment - paid).floor_zero();

            total_recommended += rec.recommended_payment;
            total_paid += paid;
            total_remaining += remaining;

            rows.push(ProgressRow {
                debt_account_id: rec.debt_account_id,
                account_name: rec.account_name,
                priority_rank: rec.priority_rank,
                recommended: rec.recommended_payment,
                paid,
                remaining,
            });
        }

        tracing::debug!(%month, %total_paid, %total_remaining, "payment progress");

        Ok(Self {
            month,
            rows,
            total_recommended,
            total_paid,
            total_remaining,
        })
    }

    /// Number of debts whose recommended payment is fully covered
    pub fn completed_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_complete()).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency);
        let mut output = String::new();

        output.push_str(&format!("Payment Progress - {}\n", self.month.friendly()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        if self.rows.is_empty() {
            output.push_str("No payments recommended.\n");
            return output;
        }

        output.push_str(&format!(
            "{:<28} {:>13} {:>13} {:>13}\n",
            "Account", "Recommended", "Paid", "Remaining"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for row in &self.rows {
            let remaining = if row.is_complete() {
                "done".to_string()
            } else {
                money(row.remaining)
            };
            output.push_str(&format!(
                "{:<28} {:>13} {:>13} {:>13}\n",
                row.account_name,
                money(row.recommended),
                money(row.paid),
                remaining
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>13} {:>13} {:>13}\n",
            "TOTAL",
            money(self.total_recommended),
            money(self.total_paid),
            money(self.total_remaining)
        ));
        output.push_str(&format!(
            "\n{} of {} payments complete\n",
            self.completed_count(),
            self.rows.len()
        ));

        output
    }
}
