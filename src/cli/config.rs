use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::settings::{load_settings, save_settings, settings_path, Settings};

fn settings_table(settings: &Settings) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Setting", "Value"]);
    table.add_row(vec![
        Cell::new("Kurtaxe fee per guest"),
        Cell::new(money(settings.kurtaxe_fee, &settings.currency)),
    ]);
    table.add_row(vec![Cell::new("Currency"), Cell::new(&settings.currency)]);
    table.add_row(vec![Cell::new("Timestamp column"), Cell::new(&settings.columns.timestamp)]);
    table.add_row(vec![Cell::new("Total column"), Cell::new(&settings.columns.total)]);
    table.add_row(vec![
        Cell::new("Description column"),
        Cell::new(&settings.columns.description),
    ]);
    table
}

pub fn run(kurtaxe_fee: Option<f64>, currency: Option<String>) -> Result<()> {
    let mut settings = load_settings();
    let changed = kurtaxe_fee.is_some() || currency.is_some();
    if let Some(fee) = kurtaxe_fee {
        settings.kurtaxe_fee = fee;
    }
    if let Some(code) = currency {
        settings.currency = code;
    }
    if changed {
        save_settings(&settings)?;
        println!("Saved {}", settings_path().display());
    }
    println!("{}", settings_table(&settings));
    Ok(())
}
