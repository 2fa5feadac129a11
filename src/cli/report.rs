use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Table};

use crate::error::Result;
use crate::fmt::{bar, money, percent, range_label};
use crate::reports::Analysis;
use crate::session::Session;

const BAR_WIDTH: usize = 30;

fn header(title: &str, analysis: &Analysis) -> String {
    format!(
        "{}\nPeriod: {}",
        title.bold(),
        range_label(analysis.summary.date_range.as_ref())
    )
}

fn right(text: impl ToString) -> Cell {
    Cell::new(text.to_string()).set_alignment(CellAlignment::Right)
}

pub fn summary_table(analysis: &Analysis, currency: &str) -> Table {
    let s = &analysis.summary;
    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![Cell::new("Total stays (Übernachtungen)"), right(s.total_stays)]);
    table.add_row(vec![Cell::new("Total guests (Kurtaxe)"), right(s.total_kurtaxe)]);
    table.add_row(vec![Cell::new("Kurtaxe fee per guest"), right(money(s.kurtaxe_fee, currency))]);
    table.add_row(vec![Cell::new(""), Cell::new("")]);
    table.add_row(vec![Cell::new("Stay cost"), right(money(s.total_stay_cost, currency))]);
    table.add_row(vec![Cell::new("Kurtaxe cost"), right(money(s.total_kurtaxe_cost, currency))]);
    table.add_row(vec![
        Cell::new("Stays + Kurtaxe".bold()),
        right(money(s.combined_cost, currency)),
    ]);
    table
}

pub fn rooms_table(analysis: &Analysis) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Room", "Stays", "Share"]);
    for r in &analysis.summary.rooms {
        table.add_row(vec![
            Cell::new(r.room.name()),
            right(r.stays),
            right(percent(r.share_pct)),
        ]);
    }
    let room_sum: u64 = analysis.summary.rooms.iter().map(|r| r.stays).sum();
    table.add_row(vec![Cell::new("Rooms total".bold()), right(room_sum), Cell::new("")]);
    table
}

pub fn monthly_table(analysis: &Analysis) -> Table {
    let max = analysis.monthly.iter().map(|m| m.stays).max().unwrap_or(0);
    let mut table = Table::new();
    table.set_header(vec!["Month", "Stays", ""]);
    for m in &analysis.monthly {
        table.add_row(vec![
            Cell::new(&m.month),
            right(m.stays),
            Cell::new(bar(m.stays, max, BAR_WIDTH).cyan().to_string()),
        ]);
    }
    table
}

pub fn extras_table(analysis: &Analysis) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Item", "Count"]);
    table.add_row(vec![Cell::new("Vouchers sold (Gutschein)"), right(analysis.summary.vouchers)]);
    table.add_row(vec![Cell::new("Dogs (Hundepauschale)"), right(analysis.summary.dog_fees)]);
    table
}

pub fn rows_table(analysis: &Analysis, currency: &str) -> Table {
    let mut table = Table::new();
    let mut head: Vec<Cell> = analysis.headers.iter().map(Cell::new).collect();
    head.extend(
        ["Total (clean)", "Kurtaxe", "Kurtaxe Cost", "Stay Cost", "Month"].map(Cell::new),
    );
    table.set_header(head);
    for r in &analysis.rows {
        let stay = if r.stay_cost < 0.0 {
            money(r.stay_cost, currency).red().to_string()
        } else {
            money(r.stay_cost, currency)
        };
        let mut cells: Vec<Cell> = r.fields.iter().map(Cell::new).collect();
        cells.extend([
            right(money(r.cleaned_total, currency)),
            right(r.kurtaxe_quantity),
            right(money(r.kurtaxe_cost, currency)),
            right(stay),
            Cell::new(&r.month_bucket),
        ]);
        table.add_row(cells);
    }
    table
}

pub fn summary(session: &Session) -> Result<()> {
    let analysis = session.analyze()?;
    let table = summary_table(&analysis, session.currency());
    println!("{}\n{table}", header("Overview", &analysis));
    Ok(())
}

pub fn rooms(session: &Session) -> Result<()> {
    let analysis = session.analyze()?;
    println!(
        "{}\nTotal stays: {}\n{}",
        header("Stays by Room", &analysis),
        analysis.summary.total_stays,
        rooms_table(&analysis)
    );
    Ok(())
}

pub fn monthly(session: &Session) -> Result<()> {
    let analysis = session.analyze()?;
    if analysis.monthly.is_empty() {
        println!("No bookings in {}.", session.input().display());
        return Ok(());
    }
    println!(
        "{}\nTotal stays: {}\n{}",
        header("Monthly Stays", &analysis),
        analysis.summary.total_stays,
        monthly_table(&analysis)
    );
    Ok(())
}

pub fn extras(session: &Session) -> Result<()> {
    let analysis = session.analyze()?;
    println!("{}\n{}", header("Additional Services", &analysis), extras_table(&analysis));
    Ok(())
}

pub fn rows(session: &Session) -> Result<()> {
    let analysis = session.analyze()?;
    if analysis.rows.is_empty() {
        println!("No bookings in {}.", session.input().display());
        return Ok(());
    }
    println!(
        "{} ({} rows)\n{}",
        header("Raw Data", &analysis),
        analysis.rows.len(),
        rows_table(&analysis, session.currency())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::read_bookings;
    use crate::reports::analyze;
    use crate::settings::ColumnNames;

    fn sample() -> Analysis {
        let content = "\
Date/Time,Total,Items Description,Order ID
01/15/2024 10:00 AM,\"1,250.00\",2xKurtaxe 1xÜbernachtung Rosmarin,1001
01/31/2024 06:00 PM,300.00,3xÜbernachtung Lavendel 1xGutschein,1002
02/01/2024 09:00 AM,90.00,1xÜbernachtung Lavendel 1xHundepauschale,1003
";
        let dataset = read_bookings(content.as_bytes(), &ColumnNames::default()).unwrap();
        analyze(&dataset, 3.2).unwrap()
    }

    #[test]
    fn test_summary_table() {
        let out = summary_table(&sample(), "CHF").to_string();
        assert!(out.contains("1,633.60 CHF"));
        assert!(out.contains("6.40 CHF"));
        assert!(out.contains("1,640.00 CHF"));
    }

    #[test]
    fn test_rooms_table_lists_every_room() {
        let out = rooms_table(&sample()).to_string();
        for name in ["Rosmarin", "Lavendel", "Salbei", "Thymian", "Dachzimmer", "Steinsuite", "Holzsuite"] {
            assert!(out.contains(name), "missing {name}");
        }
        assert!(out.contains("80.0%"));
    }

    #[test]
    fn test_monthly_table() {
        let out = monthly_table(&sample()).to_string();
        assert!(out.contains("2024-01"));
        assert!(out.contains("2024-02"));
    }

    #[test]
    fn test_extras_table() {
        let out = extras_table(&sample()).to_string();
        assert!(out.contains("Gutschein"));
        assert!(out.contains("Hundepauschale"));
    }

    #[test]
    fn test_rows_table() {
        let out = rows_table(&sample(), "CHF").to_string();
        assert!(out.contains("01/15/2024 10:00 AM"));
        assert!(out.contains("1,243.60 CHF"));
    }

    #[test]
    fn test_rows_table_shows_extra_columns() {
        let out = rows_table(&sample(), "CHF").to_string();
        assert!(out.contains("Order ID"));
        assert!(out.contains("1003"));
        assert!(out.contains("Total (clean)"));
    }
}
