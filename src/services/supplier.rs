//! Read boundary between the calculation services and record storage
//!
//! The calculators receive a supplier by reference and never reach for
//! storage on their own, so any implementation (the JSON record store, an
//! in-memory fake in tests) can back them.

use crate::error::DebtResult;
use crate::models::{
    BudgetMonth, DebtAccount, DebtPayment, Expense, Income, IrregularExpense,
    VariableExpenseEntry,
};

/// Read operations the calculation services depend on
///
/// Errors returned here are passed through the calculators unchanged.
pub trait RecordSupplier {
    /// Active expenses of type FIXED
    fn active_fixed_expenses(&self) -> DebtResult<Vec<Expense>>;

    /// Every variable-expense entry recorded for `month`
    ///
    /// Entries are month-scoped facts: they are returned whether or not their
    /// parent expense is still active.
    fn variable_entries(&self, month: BudgetMonth) -> DebtResult<Vec<VariableExpenseEntry>>;

    fn active_irregular_expenses(&self) -> DebtResult<Vec<IrregularExpense>>;

    /// The income record for `month`, if one has been entered
    fn income(&self, month: BudgetMonth) -> DebtResult<Option<Income>>;

    /// Active debt accounts in their stored order
    fn active_debt_accounts(&self) -> DebtResult<Vec<DebtAccount>>;

    /// Payments recorded against any debt for `month`
    fn debt_payments(&self, month: BudgetMonth) -> DebtResult<Vec<DebtPayment>>;
}
