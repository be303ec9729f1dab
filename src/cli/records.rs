//! CLI command listing the loaded records

use crate::config::settings::Settings;
use crate::error::DebtResult;
use crate::models::Money;
use crate::storage::RecordStore;

/// Print every loaded record, grouped by type
pub fn handle_records_command(store: &RecordStore, settings: &Settings) -> DebtResult<()> {
    let records = store.records();
    let money = |m: Money| m.format_with_symbol(&settings.currency_symbol);

    if records.is_empty() {
        println!("No records loaded.");
        return Ok(());
    }

    println!("Income ({})", records.income.len());
    for income in &records.income {
        println!("  {}  {:>14}", income.period, money(income.amount));
    }

    println!("\nExpenses ({})", records.expenses.len());
    for expense in &records.expenses {
        let amount = if expense.is_fixed() {
            money(expense.monthly_amount())
        } else {
            "variable".to_string()
        };
        println!(
            "  {:<28} {:<16} {:>14}{}",
            expense.name,
            expense.category.to_string(),
            amount,
            inactive_marker(expense.active)
        );
    }

    println!("\nVariable entries ({})", records.variable_entries.len());
    for entry in &records.variable_entries {
        let name = records
            .expenses
            .iter()
            .find(|e| e.id == entry.expense_id)
            .map(|e| e.name.as_str())
            .unwrap_or("Unknown");
        println!("  {}  {:<28} {:>14}", entry.period, name, money(entry.amount));
    }

    println!("\nIrregular expenses ({})", records.irregular_expenses.len());
    for irregular in &records.irregular_expenses {
        println!(
            "  {:<28} {:>14} {:<12} {:>10}/mo{}",
            irregular.name,
            money(irregular.amount),
            irregular.frequency.to_string(),
            money(irregular.monthly_contribution()),
            inactive_marker(irregular.active)
        );
    }

    println!("\nDebts ({})", records.debts.len());
    for debt in &records.debts {
        let utilization = if debt.is_revolving() {
            format!("{}%", debt.utilization().percent_display())
        } else {
            String::new()
        };
        println!(
            "  {:<28} {:<16} {:>14} min {:>10} {:>7}{}",
            debt.name,
            debt.account_type.to_string(),
            money(debt.current_balance),
            money(debt.minimum_payment),
            utilization,
            inactive_marker(debt.active)
        );
    }

    println!("\nPayments ({})", records.payments.len());
    for payment in &records.payments {
        let name = records
            .debts
            .iter()
            .find(|d| d.id == payment.debt_account_id)
            .map(|d| d.name.as_str())
            .unwrap_or("Unknown");
        println!("  {}  {:<28} {:>14}", payment.period, name, money(payment.amount_paid));
    }

    Ok(())
}

fn inactive_marker(active: bool) -> &'static str {
    if active {
        ""
    } else {
        "  (inactive)"
    }
}
