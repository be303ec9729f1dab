//! JSON Export functionality
//!
//! Exports a month's debt plan to JSON with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{DebtError, DebtResult};
use crate::models::{BudgetMonth, Money};
use crate::reports::MonthlyPlanReport;
use crate::services::RecordSupplier;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported plan with provenance
#[derive(Debug, Clone, Serialize)]
pub struct PlanExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// The plan itself
    pub plan: MonthlyPlanReport,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Summary figures for quick reference
#[derive(Debug, Clone, Serialize)]
pub struct ExportMetadata {
    /// Number of debts in the plan
    pub debt_count: usize,

    /// Debts that were offered part of the surplus
    pub receiving_extra: usize,

    /// Sum of recommended payments
    pub total_recommended: Money,

    /// Leftover the plan could not place
    pub unallocated: Money,
}

impl PlanExport {
    /// Wrap an already generated plan
    pub fn new(plan: MonthlyPlanReport) -> Self {
        let metadata = ExportMetadata {
            debt_count: plan.recommendations.len(),
            receiving_extra: plan
                .recommendations
                .iter()
                .filter(|r| r.receives_extra())
                .count(),
            total_recommended: plan.total_recommended(),
            unallocated: plan.unallocated(),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            plan,
            metadata,
        }
    }

    /// Generate the plan for `month` and wrap it
    pub fn from_records<S: RecordSupplier + ?Sized>(
        records: &S,
        month: BudgetMonth,
    ) -> DebtResult<Self> {
        Ok(Self::new(MonthlyPlanReport::generate(records, month)?))
    }
}

/// Export a month's plan to JSON
pub fn export_plan_json<S, W>(
    records: &S,
    month: BudgetMonth,
    writer: &mut W,
    pretty: bool,
) -> DebtResult<()>
where
    S: RecordSupplier + ?Sized,
    W: Write,
{
    let export = PlanExport::from_records(records, month)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| DebtError::Export(e.to_string()))?;

    Ok(())
}
