use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::extractor::{extract_total, Extractor};
use crate::metrics::compute_costs;
use crate::models::{AnalyzedRow, Booking, Dataset, Keyword, RoomType};

/// `YYYY-MM` bucket label of a timestamp.
pub fn month_bucket(ts: &NaiveDateTime) -> String {
    format!("{:04}-{:02}", ts.year(), ts.month())
}

// ---------------------------------------------------------------------------
// Monthly stays
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyStays {
    pub month: String,
    pub stays: u64,
}

/// Generic `Übernachtung` totals per calendar month, oldest month first.
pub fn monthly_stays<S: AsRef<str>>(
    timestamps: &[NaiveDateTime],
    descriptions: &[S],
) -> Result<Vec<MonthlyStays>> {
    let mut groups: BTreeMap<(i32, u32), Vec<&str>> = BTreeMap::new();
    for (ts, desc) in timestamps.iter().zip(descriptions) {
        groups
            .entry((ts.year(), ts.month()))
            .or_default()
            .push(desc.as_ref());
    }

    let keyword = Keyword::Stay.literal();
    let mut months = Vec::with_capacity(groups.len());
    for ((year, month), descs) in groups {
        months.push(MonthlyStays {
            month: format!("{year:04}-{month:02}"),
            stays: extract_total(descs, &keyword)?.total,
        });
    }
    Ok(months)
}

// ---------------------------------------------------------------------------
// Summary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomTotal {
    pub room: RoomType,
    pub stays: u64,
    /// Share of the summed room counts, in percent.
    pub share_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub date_range: Option<DateRange>,
    pub kurtaxe_fee: f64,
    pub total_stays: u64,
    /// Guests, as counted by Kurtaxe tags.
    pub total_kurtaxe: u64,
    pub rooms: Vec<RoomTotal>,
    pub vouchers: u64,
    pub dog_fees: u64,
    pub total_kurtaxe_cost: f64,
    pub total_stay_cost: f64,
    pub combined_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Header row of the input file, in order.
    pub headers: Vec<String>,
    pub rows: Vec<AnalyzedRow>,
    pub summary: Summary,
    pub monthly: Vec<MonthlyStays>,
}

fn room_totals(descriptions: &[&str]) -> Result<Vec<RoomTotal>> {
    let mut rooms = Vec::with_capacity(RoomType::ALL.len());
    for room in RoomType::ALL {
        let stays = Extractor::for_keyword(Keyword::Room(room))?
            .extract(descriptions)?
            .total;
        rooms.push(RoomTotal {
            room,
            stays,
            share_pct: 0.0,
        });
    }
    let sum: u64 = rooms.iter().map(|r| r.stays).sum();
    if sum > 0 {
        for r in &mut rooms {
            r.share_pct = r.stays as f64 / sum as f64 * 100.0;
        }
    }
    Ok(rooms)
}

fn date_range(bookings: &[Booking]) -> Option<DateRange> {
    let start = bookings.iter().map(|b| b.timestamp).min()?;
    let end = bookings.iter().map(|b| b.timestamp).max()?;
    Some(DateRange { start, end })
}

/// Run every extraction and cost split over one dataset.
pub fn analyze(dataset: &Dataset, kurtaxe_fee: f64) -> Result<Analysis> {
    let bookings = dataset.bookings.as_slice();
    let descriptions: Vec<&str> = bookings.iter().map(|b| b.description.as_str()).collect();
    let timestamps: Vec<NaiveDateTime> = bookings.iter().map(|b| b.timestamp).collect();
    let cleaned: Vec<f64> = bookings.iter().map(|b| b.cleaned_total).collect();

    let kurtaxe = Extractor::for_keyword(Keyword::Kurtaxe)?.extract(&descriptions)?;
    let stays = Extractor::for_keyword(Keyword::Stay)?.extract(&descriptions)?;
    let vouchers = Extractor::for_keyword(Keyword::Voucher)?.extract(&descriptions)?;
    let dog_fees = Extractor::for_keyword(Keyword::DogFee)?.extract(&descriptions)?;
    let rooms = room_totals(&descriptions)?;
    let costs = compute_costs(&cleaned, &kurtaxe.per_row, kurtaxe_fee)?;
    let monthly = monthly_stays(&timestamps, &descriptions)?;
    debug!(
        rows = bookings.len(),
        months = monthly.len(),
        kurtaxe = kurtaxe.total,
        stays = stays.total,
        "dataset analyzed"
    );

    let rows = bookings
        .iter()
        .enumerate()
        .map(|(i, b)| AnalyzedRow {
            timestamp: b.timestamp,
            total_text: b.total_text.clone(),
            description: b.description.clone(),
            fields: b.fields.clone(),
            cleaned_total: b.cleaned_total,
            kurtaxe_quantity: kurtaxe.per_row[i],
            stay_quantity: stays.per_row[i],
            kurtaxe_cost: costs.kurtaxe_cost[i],
            stay_cost: costs.stay_cost[i],
            month_bucket: month_bucket(&b.timestamp),
        })
        .collect();

    let summary = Summary {
        date_range: date_range(bookings),
        kurtaxe_fee,
        total_stays: stays.total,
        total_kurtaxe: kurtaxe.total,
        rooms,
        vouchers: vouchers.total,
        dog_fees: dog_fees.total,
        total_kurtaxe_cost: costs.total_kurtaxe_cost,
        total_stay_cost: costs.total_stay_cost,
        combined_cost: costs.combined_total(),
    };

    Ok(Analysis {
        headers: dataset.headers.clone(),
        rows,
        summary,
        monthly,
    })
}
