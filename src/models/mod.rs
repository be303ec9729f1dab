//! Core data models for debt-destroyer
//!
//! This module contains the records the engine reads (income, expenses,
//! irregular expenses, debt accounts, payments) and the recommendations it
//! produces.

pub mod debt;
pub mod expense;
pub mod ids;
pub mod income;
pub mod irregular;
pub mod money;
pub mod month;
pub mod payment;
pub mod recommendation;

pub use debt::{DebtAccount, DebtAccountType, Utilization};
pub use expense::{Expense, ExpenseCategory, ExpenseType, VariableExpenseEntry};
pub use ids::{
    DebtAccountId, DebtPaymentId, ExpenseId, IncomeId, IrregularExpenseId, VariableEntryId,
};
pub use income::Income;
pub use irregular::{Frequency, IrregularExpense};
pub use money::Money;
pub use month::BudgetMonth;
pub use payment::DebtPayment;
pub use recommendation::{DebtRecommendation, RecommendationReason};
