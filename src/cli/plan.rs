//! CLI commands for the monthly figures
//!
//! Essentials, leftover cash, the debt plan and payment progress, each for a
//! single month.

use crate::config::settings::Settings;
use crate::error::{DebtError, DebtResult};
use crate::models::{BudgetMonth, Money};
use crate::reports::{MonthlyPlanReport, PaymentProgressReport};
use crate::services::{EssentialsCalculator, LeftoverCalculator, RecordSupplier};

/// Resolve a `--period` argument, defaulting to the current month
pub fn parse_period(period: Option<&str>) -> DebtResult<BudgetMonth> {
    BudgetMonth::parse_or_current(period).map_err(|e| {
        DebtError::Validation(format!(
            "{}. Use YYYY-MM (e.g., 2025-01), a month name, or current/last/next",
            e
        ))
    })
}

/// Print the essentials breakdown for a month
pub fn handle_essentials<S: RecordSupplier + ?Sized>(
    records: &S,
    settings: &Settings,
    period: Option<String>,
) -> DebtResult<()> {
    let month = parse_period(period.as_deref())?;
    let breakdown = EssentialsCalculator::new(records).breakdown(month)?;
    let money = |m: Money| m.format_with_symbol(&settings.currency_symbol);

    println!("Essentials - {}", month.friendly());
    println!("{}", "=".repeat(40));
    println!("{:<20} {:>14}", "Fixed:", money(breakdown.fixed));
    println!("{:<20} {:>14}", "Variable:", money(breakdown.variable));
    println!("{:<20} {:>14}", "Sinking fund:", money(breakdown.sinking_fund));
    println!("{}", "-".repeat(40));
    println!("{:<20} {:>14}", "Total:", money(breakdown.total));

    Ok(())
}

/// Print income minus essentials for a month
pub fn handle_leftover<S: RecordSupplier + ?Sized>(
    records: &S,
    settings: &Settings,
    period: Option<String>,
) -> DebtResult<()> {
    let month = parse_period(period.as_deref())?;
    let calc = LeftoverCalculator::new(records);
    let symbol = settings.currency_symbol.as_str();

    if records.income(month)?.is_none() {
        println!("No income recorded for {}.", month.friendly());
    }

    let leftover = calc.leftover(month)?;
    println!(
        "Leftover for {}: {}",
        month.friendly(),
        leftover.format_with_symbol(symbol)
    );

    if let Some(shortfall) = calc.shortfall(month)? {
        println!(
            "Essentials exceed income by {}.",
            shortfall.format_with_symbol(symbol)
        );
    }

    Ok(())
}

/// Print the ranked debt plan for a month
pub fn handle_plan<S: RecordSupplier + ?Sized>(
    records: &S,
    settings: &Settings,
    period: Option<String>,
) -> DebtResult<()> {
    let month = parse_period(period.as_deref())?;
    let report = MonthlyPlanReport::generate(records, month)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}

/// Print payments made so far against the plan
pub fn handle_progress<S: RecordSupplier + ?Sized>(
    records: &S,
    settings: &Settings,
    period: Option<String>,
) -> DebtResult<()> {
    let month = parse_period(period.as_deref())?;
    let report = PaymentProgressReport::generate(records, month)?;
    print!("{}", report.format_terminal(&settings.currency_symbol));
    Ok(())
}
