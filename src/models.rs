use chrono::NaiveDateTime;
use serde::Serialize;

/// Chrono format of the `Date/Time` column in a Kyte sales export.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// One normalized booking row, straight out of the importer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub timestamp: NaiveDateTime,
    pub total_text: String,
    pub cleaned_total: f64,
    pub description: String,
    /// Every field of the input record, in header order.
    pub fields: Vec<String>,
}

/// An imported export: the header row and one booking per data row.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub bookings: Vec<Booking>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RoomType {
    Rosmarin,
    Lavendel,
    Salbei,
    Thymian,
    Dachzimmer,
    Steinsuite,
    Holzsuite,
}

impl RoomType {
    pub const ALL: [RoomType; 7] = [
        RoomType::Rosmarin,
        RoomType::Lavendel,
        RoomType::Salbei,
        RoomType::Thymian,
        RoomType::Dachzimmer,
        RoomType::Steinsuite,
        RoomType::Holzsuite,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Rosmarin => "Rosmarin",
            Self::Lavendel => "Lavendel",
            Self::Salbei => "Salbei",
            Self::Thymian => "Thymian",
            Self::Dachzimmer => "Dachzimmer",
            Self::Steinsuite => "Steinsuite",
            Self::Holzsuite => "Holzsuite",
        }
    }
}

/// Line-item keywords that can follow `<n>x` in an items description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Kurtaxe,
    /// Generic `Übernachtung`. Also matches inside every room-qualified tag.
    Stay,
    Room(RoomType),
    Voucher,
    DogFee,
}

impl Keyword {
    /// The literal text matched after the `x`.
    pub fn literal(&self) -> String {
        match self {
            Self::Kurtaxe => "Kurtaxe".to_string(),
            Self::Stay => "Übernachtung".to_string(),
            Self::Room(room) => format!("Übernachtung {}", room.name()),
            Self::Voucher => "Gutschein".to_string(),
            Self::DogFee => "Hundepauschale".to_string(),
        }
    }
}

/// A booking with every derived column attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedRow {
    pub timestamp: NaiveDateTime,
    pub total_text: String,
    pub description: String,
    /// Input fields, aligned with `Analysis::headers`.
    pub fields: Vec<String>,
    pub cleaned_total: f64,
    pub kurtaxe_quantity: u64,
    pub stay_quantity: u64,
    pub kurtaxe_cost: f64,
    pub stay_cost: f64,
    pub month_bucket: String,
}
