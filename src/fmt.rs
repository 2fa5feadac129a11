use chrono::NaiveDateTime;

use crate::reports::DateRange;

/// Format an amount with thousands separators and a trailing currency code: 1,234.56 CHF
pub fn money(val: f64, currency: &str) -> String {
    let negative = val < 0.0;
    let abs = val.abs();
    let cents = format!("{:.2}", abs);
    let (int_part, dec_part) = cents.split_once('.').unwrap_or((cents.as_str(), "00"));

    let mut with_commas = String::new();
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            with_commas.push(',');
        }
        with_commas.push(c);
    }
    let with_commas: String = with_commas.chars().rev().collect();

    if negative && cents != "0.00" {
        format!("-{with_commas}.{dec_part} {currency}")
    } else {
        format!("{with_commas}.{dec_part} {currency}")
    }
}

pub fn date_label(ts: &NaiveDateTime) -> String {
    ts.format("%d.%m.%Y").to_string()
}

/// `dd.mm.yyyy - dd.mm.yyyy`, or a dash for an empty dataset.
pub fn range_label(range: Option<&DateRange>) -> String {
    match range {
        Some(r) => format!("{} - {}", date_label(&r.start), date_label(&r.end)),
        None => "-".to_string(),
    }
}

pub fn percent(val: f64) -> String {
    format!("{val:.1}%")
}

/// Horizontal bar of `width` cells scaled against `max`.
pub fn bar(val: u64, max: u64, width: usize) -> String {
    if max == 0 {
        return String::new();
    }
    let cells = (val as f64 / max as f64 * width as f64).round() as usize;
    "\u{2588}".repeat(cells.min(width))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::parse_timestamp;

    #[test]
    fn test_money_formatting() {
        assert_eq!(money(1234.56, "CHF"), "1,234.56 CHF");
        assert_eq!(money(-500.00, "CHF"), "-500.00 CHF");
        assert_eq!(money(0.0, "CHF"), "0.00 CHF");
        assert_eq!(money(1000000.99, "EUR"), "1,000,000.99 EUR");
        assert_eq!(money(1243.6, "CHF"), "1,243.60 CHF");
        assert_eq!(money(-0.001, "CHF"), "0.00 CHF");
    }

    #[test]
    fn test_range_label() {
        let range = DateRange {
            start: parse_timestamp("01/15/2024 10:00 AM").unwrap(),
            end: parse_timestamp("02/01/2024 08:30 PM").unwrap(),
        };
        assert_eq!(range_label(Some(&range)), "15.01.2024 - 01.02.2024");
        assert_eq!(range_label(None), "-");
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(10, 10, 4).chars().count(), 4);
        assert_eq!(bar(5, 10, 4).chars().count(), 2);
        assert_eq!(bar(0, 10, 4), "");
        assert_eq!(bar(3, 0, 4), "");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(66.6666), "66.7%");
        assert_eq!(percent(0.0), "0.0%");
    }
}
