use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use debt_destroyer::cli::{
    handle_essentials, handle_export_command, handle_leftover, handle_plan, handle_progress,
    handle_records_command, ExportFormat,
};
use debt_destroyer::config::{paths::DebtPaths, settings::Settings};
use debt_destroyer::storage::RecordStore;

#[derive(Parser)]
#[command(
    name = "debt",
    version,
    about = "Monthly budget and debt payoff planner",
    long_about = "debt-destroyer works out what is left of a month's income after \
                  essentials and recommends how to split it across your debts, \
                  paying every minimum first and the most utilized cards next."
)]
struct Cli {
    /// Read records from this file instead of the data directory
    #[arg(long, global = true, value_name = "FILE")]
    records: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show fixed, variable and sinking-fund essentials
    Essentials {
        /// Budget month (e.g., "2025-01", "jan", "last")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show income left after essentials
    Leftover {
        /// Budget month (e.g., "2025-01", "jan", "last")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show the ranked debt payment plan
    #[command(alias = "recommend")]
    Plan {
        /// Budget month (e.g., "2025-01", "jan", "last")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Compare payments made with the plan
    Progress {
        /// Budget month (e.g., "2025-01", "jan", "last")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Export the plan to a file
    Export {
        /// Export format
        #[arg(value_enum)]
        format: ExportFormat,

        /// Budget month (e.g., "2025-01", "jan", "last")
        #[arg(short, long)]
        period: Option<String>,

        /// Output file path ("-" for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the loaded records
    Records,

    /// Show current configuration and paths
    Config {
        /// Write the current settings to disk
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = DebtPaths::new()?;
    let settings = Settings::load_or_default(&paths)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(command) = cli.command else {
        println!("debt-destroyer - monthly budget and debt payoff planner");
        println!();
        println!("Run 'debt --help' for usage information.");
        println!("Run 'debt plan' to see this month's recommendations.");
        return Ok(());
    };

    if let Commands::Config { init } = command {
        if init {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
            println!();
        }
        println!("debt-destroyer Configuration");
        println!("============================");
        println!("Base directory:   {}", paths.base_dir().display());
        println!("Settings file:    {}", paths.settings_file().display());
        println!("Records file:     {}", paths.records_file().display());
        println!("Export directory: {}", paths.export_dir().display());
        println!();
        println!("Settings:");
        println!("  Currency symbol: {}", settings.currency_symbol);
        println!("  Log level:       {}", settings.log_level);
        return Ok(());
    }

    let store = match &cli.records {
        Some(path) => RecordStore::from_file(path)?,
        None => RecordStore::open(&paths)?,
    };

    match command {
        Commands::Essentials { period } => handle_essentials(&store, &settings, period)?,
        Commands::Leftover { period } => handle_leftover(&store, &settings, period)?,
        Commands::Plan { period } => handle_plan(&store, &settings, period)?,
        Commands::Progress { period } => handle_progress(&store, &settings, period)?,
        Commands::Export {
            format,
            period,
            output,
            pretty,
        } => handle_export_command(&store, &paths, format, period, output, pretty)?,
        Commands::Records => handle_records_command(&store, &settings)?,
        Commands::Config { .. } => {}
    }

    Ok(())
}
