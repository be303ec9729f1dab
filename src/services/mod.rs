//! Calculation services for debt-destroyer
//!
//! The services read records through a [`RecordSupplier`] and compute the
//! essentials, leftover cash and debt payment plan for a month. They hold no
//! state of their own.

pub mod allocation;
pub mod essentials;
pub mod leftover;
pub mod supplier;

pub use allocation::AllocationEngine;
pub use essentials::{EssentialsBreakdown, EssentialsCalculator};
pub use leftover::LeftoverCalculator;
pub use supplier::RecordSupplier;
