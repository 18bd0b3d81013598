//! SpendTrack CLI
//!
//! Runs the analytics core against report JSON exported from the backend.
//!
//! ```bash
//! spendtrack alerts reports.json --limits limits.json
//! spendtrack series reports.json line
//! spendtrack export reports.json --out-dir exports/
//! spendtrack summary reports.json
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spendtrack_shared::AppConfig;

mod commands;
mod lookup;

/// SpendTrack expense analytics
#[derive(Parser)]
#[command(name = "spendtrack")]
#[command(version)]
#[command(about = "Budget alerts, chart series and exports for monthly expense reports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate every category's budget for the first report's month
    Alerts {
        /// Monthly reports JSON
        reports: PathBuf,
        /// Configured limits JSON; categories without one use the default limit
        #[arg(long)]
        limits: Option<PathBuf>,
    },

    /// Print chart series data
    Series {
        /// Monthly reports JSON
        reports: PathBuf,
        /// Chart kind: line, bar or pie
        #[arg(default_value = "line")]
        kind: String,
    },

    /// Write the reports as a CSV file
    Export {
        /// Monthly reports JSON
        reports: PathBuf,
        /// Directory to write into
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Print totals, category shares and payment method totals
    Summary {
        /// Monthly reports JSON
        reports: PathBuf,
    },

    /// Build a monthly report from raw expenses
    Summarize {
        /// Expenses JSON
        expenses: PathBuf,
        /// Month in YYYY-MM form
        month: String,
    },

    /// List the months offered by the report picker
    Months {
        /// Last month listed, defaults to the current month
        end: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Help and usage errors must not depend on a valid configuration
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spendtrack=info,spendtrack_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load()?;

    match cli.command {
        Commands::Alerts { reports, limits } => {
            println!("{}", commands::alerts(&config, &reports, limits.as_deref()).await?);
        }
        Commands::Series { reports, kind } => {
            println!("{}", commands::series(&reports, &kind)?);
        }
        Commands::Export { reports, out_dir } => {
            let path = commands::export(&reports, &out_dir)?;
            println!("{}", path.display());
        }
        Commands::Summary { reports } => {
            println!("{}", commands::summary(&reports)?);
        }
        Commands::Summarize { expenses, month } => {
            println!("{}", commands::summarize(&expenses, &month)?);
        }
        Commands::Months { end } => {
            println!("{}", commands::months(&config, end.as_deref())?);
        }
    }

    Ok(())
}
