use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::cli::ExportFormat;
use crate::error::Result;
use crate::reports::Analysis;
use crate::session::Session;

/// Columns appended after the input columns, in this order.
pub const DERIVED_COLUMNS: [&str; 5] = [
    "Totals Cleaned",
    "Kurtaxe Quantity",
    "Kurtaxe Cost",
    "Übernachtung Cost",
    "Monat",
];

/// Write the input table as read, followed by the derived columns. Numbers are
/// written unrounded so that cost and total columns still add up.
pub fn write_csv<W: Write>(analysis: &Analysis, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(
        analysis
            .headers
            .iter()
            .map(String::as_str)
            .chain(DERIVED_COLUMNS),
    )?;
    for r in &analysis.rows {
        let derived = [
            r.cleaned_total.to_string(),
            r.kurtaxe_quantity.to_string(),
            r.kurtaxe_cost.to_string(),
            r.stay_cost.to_string(),
            r.month_bucket.clone(),
        ];
        wtr.write_record(r.fields.iter().chain(derived.iter()))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(analysis: &Analysis, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, analysis)?;
    writeln!(writer)?;
    Ok(())
}

fn write_to<W: Write>(analysis: &Analysis, format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Csv => write_csv(analysis, writer),
        ExportFormat::Json => write_json(analysis, writer),
    }
}

pub fn run(session: &Session, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let analysis = session.analyze()?;
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::File::create(path)?;
            write_to(&analysis, format, std::io::BufWriter::new(file))?;
            info!(path = %path.display(), rows = analysis.rows.len(), "export written");
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_to(&analysis, format, stdout.lock())?;
        }
    }
    Ok(())
}
