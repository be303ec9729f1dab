//! YAML Export functionality
//!
//! Exports a month's debt plan to YAML for human-readable records.

use std::io::Write;

use crate::error::{DebtError, DebtResult};
use crate::export::json::PlanExport;
use crate::models::BudgetMonth;
use crate::services::RecordSupplier;

/// Export a month's plan to YAML
pub fn export_plan_yaml<S, W>(records: &S, month: BudgetMonth, writer: &mut W) -> DebtResult<()>
where
    S: RecordSupplier + ?Sized,
    W: Write,
{
    let export = PlanExport::from_records(records, month)?;

    writeln!(writer, "# Debt plan for {}", month.friendly())?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer, "# Amounts are in cents.")?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| DebtError::Export(e.to_string()))?;

    Ok(())
}
