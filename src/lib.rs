//! debt-destroyer - monthly budget and debt allocation engine
//!
//! Turns a month of financial records into a leftover-cash figure and a
//! ranked debt payment plan. Essentials (fixed expenses, the month's variable
//! spending and a sinking fund for irregular expenses) come off income first;
//! what remains pays every minimum, and any surplus goes to the most
//! utilized revolving accounts.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Records, money and month types, recommendations
//! - `services`: The calculators and the [`services::RecordSupplier`] boundary
//! - `storage`: Read-only JSON record snapshot implementing the supplier
//! - `reports`: Monthly plan and payment progress reports
//! - `export`: CSV, JSON and YAML plan export
//! - `cli`: Command handlers for the `debt` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use debt_destroyer::config::paths::DebtPaths;
//! use debt_destroyer::models::BudgetMonth;
//! use debt_destroyer::services::AllocationEngine;
//! use debt_destroyer::storage::RecordStore;
//!
//! let paths = DebtPaths::new()?;
//! let store = RecordStore::open(&paths)?;
//! let plan = AllocationEngine::new(&store).recommendations(BudgetMonth::current())?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{DebtError, DebtResult};
