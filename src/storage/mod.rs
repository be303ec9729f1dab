//! Storage layer for debt-destroyer
//!
//! Loads a read-only snapshot of records from JSON and serves it through the
//! [`RecordSupplier`] boundary. Nothing here writes records back.

pub mod file_io;
pub mod records;

pub use file_io::{read_json, read_json_required};
pub use records::RecordSet;

use std::path::Path;

use crate::config::paths::DebtPaths;
use crate::error::DebtResult;
use crate::models::{
    BudgetMonth, DebtAccount, DebtPayment, Expense, Income, IrregularExpense,
    VariableExpenseEntry,
};
use crate::services::RecordSupplier;

/// Immutable record snapshot backing the calculation services
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: RecordSet,
}

impl RecordStore {
    /// Wrap an already-loaded record set after validating it
    pub fn new(records: RecordSet) -> DebtResult<Self> {
        records.validate()?;
        tracing::debug!(records = records.len(), "record snapshot ready");
        Ok(Self { records })
    }

    /// Load `data/records.json`, treating a missing file as no records yet
    pub fn open(paths: &DebtPaths) -> DebtResult<Self> {
        let path = paths.records_file();
        let records: RecordSet = read_json(&path)?;
        tracing::info!(path = %path.display(), records = records.len(), "loaded records");
        Self::new(records)
    }

    /// Load a specific snapshot file, which must exist
    pub fn from_file(path: impl AsRef<Path>) -> DebtResult<Self> {
        let path = path.as_ref();
        let records: RecordSet = read_json_required(path)?;
        tracing::info!(path = %path.display(), records = records.len(), "loaded records");
        Self::new(records)
    }

    pub fn records(&self) -> &RecordSet {
        &self.records
    }
}

impl RecordSupplier for RecordStore {
    fn active_fixed_expenses(&self) -> DebtResult<Vec<Expense>> {
        Ok(self
            .records
            .expenses
            .iter()
            .filter(|e| e.active && e.is_fixed())
            .cloned()
            .collect())
    }

    fn variable_entries(&self, month: BudgetMonth) -> DebtResult<Vec<VariableExpenseEntry>> {
        // Month-scoped lookup only; the parent expense's active flag is not consulted
        Ok(self
            .records
            .variable_entries
            .iter()
            .filter(|v| v.period == month)
            .cloned()
            .collect())
    }

    fn active_irregular_expenses(&self) -> DebtResult<Vec<IrregularExpense>> {
        Ok(self
            .records
            .irregular_expenses
            .iter()
            .filter(|i| i.active)
            .cloned()
            .collect())
    }

    fn income(&self, month: BudgetMonth) -> DebtResult<Option<Income>> {
        Ok(self
            .records
            .income
            .iter()
            .find(|i| i.period == month)
            .cloned())
    }

    fn active_debt_accounts(&self) -> DebtResult<Vec<DebtAccount>> {
        Ok(self
            .records
            .debts
            .iter()
            .filter(|d| d.active)
            .cloned()
            .collect())
    }

    fn debt_payments(&self, month: BudgetMonth) -> DebtResult<Vec<DebtPayment>> {
        Ok(self
            .records
            .payments
            .iter()
            .filter(|p| p.period == month)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DebtAccountType, Frequency, Money};
    use tempfile::TempDir;

    fn jan() -> BudgetMonth {
        BudgetMonth::new(2025, 1).unwrap()
    }

    fn store() -> RecordStore {
        let mut closed_card = DebtAccount::revolving(
            "Closed",
            Money::zero(),
            Money::from_dollars(500),
            Money::zero(),
        );
        closed_card.active = false;

        let mut old_gym = Expense::fixed("Gym", Money::from_dollars(40));
        old_gym.active = false;

        let mut retired_food = Expense::variable("Takeout");
        retired_food.active = false;

        let mut old_sub = IrregularExpense::new("Magazine", Money::from_dollars(24), Frequency::Annual);
        old_sub.active = false;

        let records = RecordSet {
            income: vec![Income::new(jan(), Money::from_dollars(4000))],
            expenses: vec![
                Expense::fixed("Rent", Money::from_dollars(1500)),
                Expense::variable("Groceries"),
                old_gym,
                retired_food.clone(),
            ],
            variable_entries: vec![
                VariableExpenseEntry::new(retired_food.id, jan(), Money::from_dollars(80)),
                VariableExpenseEntry::new(retired_food.id, jan().next(), Money::from_dollars(90)),
            ],
            irregular_expenses: vec![
                IrregularExpense::new("Insurance", Money::from_dollars(600), Frequency::SemiAnnual),
                old_sub,
            ],
            debts: vec![
                closed_card,
                DebtAccount::loan(
                    "Car",
                    DebtAccountType::AutoLoan,
                    Money::from_dollars(9000),
                    Money::from_dollars(300),
                ),
            ],
            payments: vec![],
        };
        RecordStore::new(records).unwrap()
    }

    #[test]
    fn test_active_filters() {
        let store = store();

        let fixed = store.active_fixed_expenses().unwrap();
        assert_eq!(fixed.len(), 1);
        assert_eq!(fixed[0].name, "Rent");

        let irregular = store.active_irregular_expenses().unwrap();
        assert_eq!(irregular.len(), 1);
        assert_eq!(irregular[0].name, "Insurance");

        let debts = store.active_debt_accounts().unwrap();
        assert_eq!(debts.len(), 1);
        assert_eq!(debts[0].name, "Car");
    }

    #[test]
    fn test_variable_entries_ignore_parent_active_flag() {
        let store = store();
        let entries = store.variable_entries(jan()).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].amount, Money::from_dollars(80));
    }

    #[test]
    fn test_income_lookup() {
        let store = store();
        assert!(store.income(jan()).unwrap().is_some());
        assert!(store.income(jan().prev()).unwrap().is_none());
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let paths = DebtPaths::with_base_dir(temp_dir.path().to_path_buf());

        let store = RecordStore::open(&paths).unwrap();
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_from_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        let original = store();
        std::fs::write(&path, serde_json::to_string_pretty(original.records()).unwrap()).unwrap();

        let loaded = RecordStore::from_file(&path).unwrap();
        assert_eq!(loaded.records(), original.records());
    }

    #[test]
    fn test_from_file_missing_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(RecordStore::from_file(temp_dir.path().join("nope.json")).is_err());
    }

    #[test]
    fn test_invalid_snapshot_rejected() {
        let mut records = store().records().clone();
        records.debts[1].current_balance = Money::from_cents(-1);
        assert!(RecordStore::new(records).unwrap_err().is_validation());
    }
}
