//! `<n>x<Keyword>` line-item extraction from Kyte items descriptions.
//!
//! Keywords are matched literally, so a generic keyword that is a prefix of a
//! more specific one (`Übernachtung` vs `Übernachtung Rosmarin`) counts the
//! same tag under both. The totals are never reconciled against each other.

use regex::Regex;

use crate::error::{Result, StayError};
use crate::models::Keyword;

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Extraction {
    pub total: u64,
    pub per_row: Vec<u64>,
}

pub struct Extractor {
    keyword: String,
    pattern: Regex,
}

impl Extractor {
    pub fn new(keyword: &str) -> Result<Self> {
        // ASCII digits only: `\d` would also take non-ASCII Unicode digits.
        let pattern = Regex::new(&format!(r"([0-9]+)x{}", regex::escape(keyword)))
            .map_err(|e| StayError::Other(format!("invalid keyword pattern {keyword:?}: {e}")))?;
        Ok(Self {
            keyword: keyword.to_string(),
            pattern,
        })
    }

    pub fn for_keyword(keyword: Keyword) -> Result<Self> {
        Self::new(&keyword.literal())
    }

    /// Sum of every `<n>x<keyword>` tag in one description.
    pub fn quantity(&self, description: &str) -> Result<u64> {
        let mut sum = 0u64;
        for caps in self.pattern.captures_iter(description) {
            let digits = &caps[1];
            let n: u64 = digits.parse().map_err(|_| self.overflow(digits))?;
            sum = sum.checked_add(n).ok_or_else(|| self.overflow(digits))?;
        }
        Ok(sum)
    }

    pub fn extract<I, S>(&self, descriptions: I) -> Result<Extraction>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = Extraction::default();
        for description in descriptions {
            let q = self.quantity(description.as_ref())?;
            out.total = out
                .total
                .checked_add(q)
                .ok_or_else(|| self.overflow(&q.to_string()))?;
            out.per_row.push(q);
        }
        Ok(out)
    }

    fn overflow(&self, digits: &str) -> StayError {
        StayError::Quantity {
            keyword: self.keyword.clone(),
            value: digits.to_string(),
        }
    }
}

/// One-shot extraction of `keyword` over `descriptions`.
pub fn extract_total<I, S>(descriptions: I, keyword: &str) -> Result<Extraction>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Extractor::new(keyword)?.extract(descriptions)
}
