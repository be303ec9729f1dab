//! Reports module for debt-destroyer
//!
//! The monthly plan (income, essentials, leftover and recommendations) and
//! payment progress against that plan.

pub mod monthly_plan;
pub mod payment_progress;

pub use monthly_plan::MonthlyPlanReport;
pub use payment_progress::{PaymentProgressReport, ProgressRow};
