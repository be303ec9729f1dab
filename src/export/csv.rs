//! CSV Export functionality
//!
//! Exports a month's recommendations, one row per debt, for spreadsheets.

use std::io::Write;

use crate::error::DebtResult;
use crate::models::BudgetMonth;
use crate::services::{AllocationEngine, RecordSupplier};

const HEADER: [&str; 7] = [
    "Month",
    "Rank",
    "Account",
    "Recommended Payment",
    "Reason",
    "Utilization %",
    "Debt ID",
];

/// Export a month's recommendations to CSV
///
/// Amounts are plain decimals ("450.00"). Utilization is blank in the
/// minimums-only case.
pub fn export_plan_csv<S, W>(records: &S, month: BudgetMonth, writer: &mut W) -> DebtResult<()>
where
    S: RecordSupplier + ?Sized,
    W: Write,
{
    let recommendations = AllocationEngine::new(records).recommendations(month)?;

    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;

    let period = month.to_string();
    for rec in &recommendations {
        let rank = rec.priority_rank.to_string();
        let payment = rec.recommended_payment.to_decimal_string();
        let reason = rec.reason.to_string();
        let utilization = rec
            .utilization
            .map(|u| u.percent_display())
            .unwrap_or_default();
        let id = rec.debt_account_id.as_uuid().to_string();

        csv.write_record([
            period.as_str(),
            rank.as_str(),
            rec.account_name.as_str(),
            payment.as_str(),
            reason.as_str(),
            utilization.as_str(),
            id.as_str(),
        ])?;
    }

    csv.flush()?;
    tracing::debug!(%month, rows = recommendations.len(), "exported plan csv");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DebtAccount, Income, Money};
    use crate::storage::{RecordSet, RecordStore};

    fn jan() -> BudgetMonth {
        BudgetMonth::new(2025, 1).unwrap()
    }

    fn export(income: i64) -> String {
        let store = RecordStore::new(RecordSet {
            income: vec![Income::new(jan(), Money::from_dollars(income))],
            debts: vec![
                DebtAccount::revolving(
                    "Visa, Rewards",
                    Money::from_dollars(1000),
                    Money::from_dollars(1000),
                    Money::from_dollars(50),
                ),
                DebtAccount::revolving(
                    "Store Card",
                    Money::from_dollars(500),
                    Money::from_dollars(1000),
                    Money::from_dollars(50),
                ),
            ],
            ..RecordSet::default()
        })
        .unwrap();

        let mut output = Vec::new();
        export_plan_csv(&store, jan(), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_csv_export() {
        let csv = export(500);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Month,Rank,Account,Recommended Payment"));
        assert!(lines[1].starts_with("2025-01,1,\"Visa, Rewards\",450.00,High utilization (100.0%),100.0,"));
        assert!(lines[2].starts_with("2025-01,2,Store Card,50.00,Minimum payment,50.0,"));
    }

    #[test]
    fn test_csv_minimums_only_leaves_utilization_blank() {
        let csv = export(80);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("2025-01,0,\"Visa, Rewards\",50.00,Minimum payment only,,"));
    }

    #[test]
    fn test_csv_empty_plan_has_header_only() {
        let csv = export(0);
        assert_eq!(csv.lines().count(), 1);
    }
}
