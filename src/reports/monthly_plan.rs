//! Monthly Plan Report
//!
//! Everything behind a month's debt plan in one place: income, the
//! essentials breakdown, leftover cash and the ranked recommendations.

use serde::Serialize;

use crate::error::DebtResult;
use crate::models::{BudgetMonth, DebtRecommendation, Money};
use crate::services::{
    AllocationEngine, EssentialsBreakdown, EssentialsCalculator, LeftoverCalculator,
    RecordSupplier,
};

/// Monthly Plan Report
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyPlanReport {
    /// The month this plan is for
    pub month: BudgetMonth,
    /// Recorded income, if any
    pub income: Option<Money>,
    /// Fixed, variable and sinking-fund essentials
    pub essentials: EssentialsBreakdown,
    /// Income minus essentials, floored at zero
    pub leftover: Money,
    /// Amount essentials exceed income by
    pub shortfall: Option<Money>,
    /// Sum of minimum payments across active debts
    pub total_minimums: Money,
    /// Ranked payment recommendations
    pub recommendations: Vec<DebtRecommendation>,
}

impl MonthlyPlanReport {
    /// Generate the plan for a month
    pub fn generate<S: RecordSupplier + ?Sized>(records: &S, month: BudgetMonth) -> DebtResult<Self> {
        let income = records.income(month)?.map(|i| i.amount);
        let essentials = EssentialsCalculator::new(records).breakdown(month)?;

        let leftover_calc = LeftoverCalculator::new(records);
        let leftover = leftover_calc.leftover(month)?;
        let shortfall = leftover_calc.shortfall(month)?;

        let engine = AllocationEngine::new(records);
        let total_minimums = engine.total_minimums()?;
        let recommendations = engine.recommendations(month)?;

        Ok(Self {
            month,
            income,
            essentials,
            leftover,
            shortfall,
            total_minimums,
            recommendations,
        })
    }

    /// Sum of every recommended payment
    pub fn total_recommended(&self) -> Money {
        self.recommendations
            .iter()
            .map(|r| r.recommended_payment)
            .sum()
    }

    /// Leftover cash the plan could not place
    pub fn unallocated(&self) -> Money {
        (self.leftover - self.total_recommended()).floor_zero()
    }

    /// True when leftover could not cover every minimum payment
    pub fn is_minimums_only(&self) -> bool {
        self.recommendations.iter().any(|r| r.priority_rank == 0)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let money = |m: Money| m.format_with_symbol(currency);
        let mut output = String::new();

        output.push_str(&format!("Debt Plan - {}\n", self.month.friendly()));
        output.push_str(&"=".repeat(72));
        output.push('\n');

        let income = self
            .income
            .map(money)
            .unwrap_or_else(|| "(none recorded)".to_string());
        output.push_str(&format!("{:<24} {:>14}\n", "Income:", income));
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Essentials:",
            money(self.essentials.total)
        ));
        output.push_str(&format!("  {:<22} {:>14}\n", "Fixed", money(self.essentials.fixed)));
        output.push_str(&format!(
            "  {:<22} {:>14}\n",
            "Variable",
            money(self.essentials.variable)
        ));
        output.push_str(&format!(
            "  {:<22} {:>14}\n",
            "Sinking fund",
            money(self.essentials.sinking_fund)
        ));
        output.push_str(&format!("{:<24} {:>14}\n", "Leftover:", money(self.leftover)));
        if let Some(shortfall) = self.shortfall {
            output.push_str(&format!(
                "{:<24} {:>14}  (essentials exceed income)\n",
                "Shortfall:",
                money(shortfall)
            ));
        }
        output.push_str(&format!(
            "{:<24} {:>14}\n",
            "Total minimums:",
            money(self.total_minimums)
        ));

        output.push('\n');
        if self.recommendations.is_empty() {
            output.push_str("No payments recommended.\n");
            return output;
        }

        if self.is_minimums_only() {
            output.push_str("Leftover does not cover every minimum payment.\n\n");
        }

        output.push_str(&format!(
            "{:>4}  {:<28} {:>14}  {}\n",
            "Rank", "Account", "Payment", "Reason"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for rec in &self.recommendations {
            let rank = match rec.priority_rank {
                0 => "-".to_string(),
                n => n.to_string(),
            };
            output.push_str(&format!(
                "{:>4}  {:<28} {:>14}  {}\n",
                rank,
                rec.account_name,
                money(rec.recommended_payment),
                rec.reason
            ));
        }

        output.push_str(&"-".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:>4}  {:<28} {:>14}\n",
            "",
            "TOTAL",
            money(self.total_recommended())
        ));

        let unallocated = self.unallocated();
        if unallocated.is_positive() {
            output.push_str(&format!(
                "\n{} of leftover exceeds what the listed debts still owe.\n",
                money(unallocated)
            ));
        }

        output
    }
}
