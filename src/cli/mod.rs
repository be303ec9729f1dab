//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the calculation services.

pub mod export;
pub mod plan;
pub mod records;

pub use export::{handle_export_command, ExportFormat};
pub use plan::{handle_essentials, handle_leftover, handle_plan, handle_progress, parse_period};
pub use records::handle_records_command;
