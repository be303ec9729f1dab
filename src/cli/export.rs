//! CLI commands for plan export
//!
//! Writes a month's plan as CSV, JSON or YAML.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::config::paths::DebtPaths;
use crate::error::{DebtError, DebtResult};
use crate::export::{csv, json, yaml};
use crate::models::BudgetMonth;
use crate::services::RecordSupplier;

use super::plan::parse_period;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (one row per recommendation)
    Csv,
    /// JSON format (full plan)
    Json,
    /// YAML format (full plan, human-readable)
    Yaml,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    /// Default file name inside the export directory
    pub fn default_file_name(&self, month: BudgetMonth) -> String {
        format!("debt-plan-{}.{}", month, self.extension())
    }
}

/// Handle `debt export`
///
/// Without `output` the file lands in the export directory. An output of
/// `-` writes to stdout.
pub fn handle_export_command<S: RecordSupplier + ?Sized>(
    records: &S,
    paths: &DebtPaths,
    format: ExportFormat,
    period: Option<String>,
    output: Option<PathBuf>,
    pretty: bool,
) -> DebtResult<()> {
    let month = parse_period(period.as_deref())?;

    if output.as_deref() == Some(Path::new("-")) {
        let stdout = std::io::stdout();
        let mut writer = stdout.lock();
        write_plan(records, month, format, pretty, &mut writer)?;
        writer.flush()?;
        return Ok(());
    }

    let output = match output {
        Some(path) => path,
        None => {
            paths.ensure_directories()?;
            paths.export_dir().join(format.default_file_name(month))
        }
    };

    let file = File::create(&output).map_err(|e| {
        DebtError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    write_plan(records, month, format, pretty, &mut writer)?;
    writer.flush()?;

    tracing::info!(path = %output.display(), %month, ?format, "exported plan");
    println!(
        "Plan for {} exported to: {}",
        month.friendly(),
        output.display()
    );

    Ok(())
}

fn write_plan<S, W>(
    records: &S,
    month: BudgetMonth,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> DebtResult<()>
where
    S: RecordSupplier + ?Sized,
    W: Write,
{
    match format {
        ExportFormat::Csv => csv::export_plan_csv(records, month, writer),
        ExportFormat::Json => json::export_plan_json(records, month, writer, pretty),
        ExportFormat::Yaml => yaml::export_plan_yaml(records, month, writer),
    }
}
