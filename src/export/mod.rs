//! Export module for debt-destroyer
//!
//! Writes a month's debt plan in several formats:
//! - CSV: one row per recommendation (spreadsheet-compatible)
//! - JSON: the full plan with a schema-versioned envelope
//! - YAML: the same envelope, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_plan_csv;
pub use json::{export_plan_json, ExportMetadata, PlanExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_plan_yaml;
