pub mod config;
pub mod export;
pub mod report;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::session::Session;
use crate::settings::load_settings;

pub(crate) fn open_session(file: &Path, fee: Option<f64>) -> Session {
    Session::new(file, load_settings()).with_fee(fee)
}

#[derive(Parser)]
#[command(
    name = "kyte-stays",
    version,
    about = "Overnight-stay and Kurtaxe statistics from Kyte sales exports."
)]
pub struct Cli {
    /// Per-person Kurtaxe fee for this run (default from settings: 3.20)
    #[arg(long, global = true)]
    pub fee: Option<f64>,
    /// Log more: -v for info, -vv for debug
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a Kyte CSV export and print a report.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
    /// Write the analyzed table (CSV) or the full analysis (JSON).
    Export {
        /// Kyte sales export (CSV)
        file: PathBuf,
        #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
        /// Output file path (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Show or change saved settings.
    Config {
        /// Save a new default per-person Kurtaxe fee
        #[arg(long = "kurtaxe-fee")]
        kurtaxe_fee: Option<f64>,
        /// Save a new currency code for amounts
        #[arg(long)]
        currency: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Overview: stays, guests and cost split.
    Summary {
        /// Kyte sales export (CSV)
        file: PathBuf,
    },
    /// Stays per room type.
    Rooms { file: PathBuf },
    /// Stays per calendar month.
    Monthly { file: PathBuf },
    /// Vouchers and dog fees.
    Extras { file: PathBuf },
    /// Every booking with its derived columns.
    Rows { file: PathBuf },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}
