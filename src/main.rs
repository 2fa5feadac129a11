mod cli;
mod error;
mod extractor;
mod fmt;
mod importer;
mod metrics;
mod models;
mod reports;
mod session;
mod settings;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{open_session, Cli, Commands, ReportCommands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let fee = cli.fee;

    let result = match cli.command {
        Commands::Report { command } => match command {
            ReportCommands::Summary { file } => cli::report::summary(&open_session(&file, fee)),
            ReportCommands::Rooms { file } => cli::report::rooms(&open_session(&file, fee)),
            ReportCommands::Monthly { file } => cli::report::monthly(&open_session(&file, fee)),
            ReportCommands::Extras { file } => cli::report::extras(&open_session(&file, fee)),
            ReportCommands::Rows { file } => cli::report::rows(&open_session(&file, fee)),
        },
        Commands::Export {
            file,
            format,
            output,
        } => cli::export::run(&open_session(&file, fee), format, output.as_deref()),
        Commands::Config {
            kurtaxe_fee,
            currency,
        } => cli::config::run(kurtaxe_fee, currency),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
