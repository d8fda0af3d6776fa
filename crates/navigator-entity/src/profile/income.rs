//! Income brackets and eligibility bucket parsing.
//!
//! Users pick a coarse bracket during onboarding; programs state their
//! income eligibility as a free-form bucket label (`"under-30k"`,
//! `"15k-30k"`, `"75k+"`, `"Any"`). Matching is done on numeric ranges
//! rather than on the labels themselves.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Household income bracket selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IncomeBracket {
    /// Less than $15,000.
    #[serde(rename = "under-15k")]
    Under15k,
    /// $15,000 to $30,000.
    #[serde(rename = "15k-30k")]
    From15kTo30k,
    /// $30,000 to $50,000.
    #[serde(rename = "30k-50k")]
    From30kTo50k,
    /// $50,000 to $75,000.
    #[serde(rename = "50k-75k")]
    From50kTo75k,
    /// $75,000 or more.
    #[serde(rename = "over-75k")]
    Over75k,
}

impl IncomeBracket {
    /// All brackets, lowest first.
    pub const ALL: [IncomeBracket; 5] = [
        Self::Under15k,
        Self::From15kTo30k,
        Self::From30kTo50k,
        Self::From50kTo75k,
        Self::Over75k,
    ];

    /// Return the bracket label as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under15k => "under-15k",
            Self::From15kTo30k => "15k-30k",
            Self::From30kTo50k => "30k-50k",
            Self::From50kTo75k => "50k-75k",
            Self::Over75k => "over-75k",
        }
    }

    /// Numeric dollar range covered by the bracket.
    pub fn range(&self) -> IncomeRange {
        match self {
            Self::Under15k => IncomeRange::new(0, Some(15_000)),
            Self::From15kTo30k => IncomeRange::new(15_000, Some(30_000)),
            Self::From30kTo50k => IncomeRange::new(30_000, Some(50_000)),
            Self::From50kTo75k => IncomeRange::new(50_000, Some(75_000)),
            Self::Over75k => IncomeRange::new(75_000, None),
        }
    }
}

impl fmt::Display for IncomeBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IncomeBracket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|b| b.as_str() == wanted)
            .ok_or_else(|| {
                let labels: Vec<&str> = Self::ALL.iter().map(|b| b.as_str()).collect();
                format!("Unknown income bracket: '{s}' (expected one of {})", labels.join(", "))
            })
    }
}

/// Half-open dollar range `[min, max)`; `max = None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncomeRange {
    /// Inclusive lower bound.
    pub min: u32,
    /// Exclusive upper bound.
    pub max: Option<u32>,
}

impl IncomeRange {
    /// Create a range.
    pub fn new(min: u32, max: Option<u32>) -> Self {
        Self { min, max }
    }

    /// Parse a program's eligibility bucket label.
    ///
    /// Returns `None` when the label places no constraint on income:
    /// `"Any"`, an empty label, or anything that cannot be read as a range.
    pub fn parse(label: &str) -> Option<Self> {
        let s = label.trim().to_lowercase().replace(['$', ','], "");
        if s.is_empty() || matches!(s.as_str(), "any" | "all" | "none" | "n/a") {
            return None;
        }

        for prefix in ["under", "below", "up to", "less than", "<"] {
            if let Some(rest) = s.strip_prefix(prefix) {
                return parse_amount(rest).map(|max| Self::new(0, Some(max)));
            }
        }

        for prefix in ["over", "above", "more than", ">"] {
            if let Some(rest) = s.strip_prefix(prefix) {
                return parse_amount(rest).map(|min| Self::new(min, None));
            }
        }

        if let Some(rest) = s.strip_suffix('+') {
            return parse_amount(rest).map(|min| Self::new(min, None));
        }

        let (lo, hi) = s.split_once(" to ").or_else(|| s.split_once('-'))?;
        let (lo, hi) = (parse_amount(lo)?, parse_amount(hi)?);
        (lo < hi).then(|| Self::new(lo, Some(hi)))
    }

    /// Whether two ranges share at least one dollar amount.
    pub fn overlaps(&self, other: &Self) -> bool {
        let starts_before_other_ends = other.max.is_none_or(|max| self.min < max);
        let other_starts_before_end = self.max.is_none_or(|max| other.min < max);
        starts_before_other_ends && other_starts_before_end
    }
}

/// Parse `"30k"`, `"30000"` or `"27.5k"` into dollars.
fn parse_amount(raw: &str) -> Option<u32> {
    let s = raw.trim_matches(|c: char| c == '-' || c.is_whitespace());
    if let Some(thousands) = s.strip_suffix('k') {
        let value: f64 = thousands.trim().parse().ok()?;
        if value < 0.0 {
            return None;
        }
        return Some((value * 1000.0).round() as u32);
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracket_from_str() {
        assert_eq!(
            " 30K-50K ".parse::<IncomeBracket>().unwrap(),
            IncomeBracket::From30kTo50k
        );
        assert!("middle".parse::<IncomeBracket>().is_err());
    }

    #[test]
    fn test_parse_labels() {
        assert_eq!(
            IncomeRange::parse("under-30k"),
            Some(IncomeRange::new(0, Some(30_000)))
        );
        assert_eq!(
            IncomeRange::parse("$15,000 - $30,000"),
            Some(IncomeRange::new(15_000, Some(30_000)))
        );
        assert_eq!(IncomeRange::parse("75k+"), Some(IncomeRange::new(75_000, None)));
        assert_eq!(
            IncomeRange::parse("Over 50k"),
            Some(IncomeRange::new(50_000, None))
        );
        assert_eq!(IncomeRange::parse("Any"), None);
        assert_eq!(IncomeRange::parse("200% of poverty line"), None);
    }

    #[test]
    fn test_overlap_is_half_open() {
        let low = IncomeBracket::Under15k.range();
        let mid = IncomeBracket::From15kTo30k.range();
        let top = IncomeBracket::Over75k.range();

        assert!(!low.overlaps(&mid));
        assert!(mid.overlaps(&IncomeRange::new(0, Some(30_000))));
        assert!(top.overlaps(&IncomeRange::new(60_000, None)));
        assert!(!top.overlaps(&IncomeRange::new(0, Some(75_000))));
    }

    #[test]
    fn test_bracket_serde_labels() {
        let json = serde_json::to_string(&IncomeBracket::From30kTo50k).unwrap();
        assert_eq!(json, "\"30k-50k\"");
        let parsed: IncomeBracket = serde_json::from_str("\"over-75k\"").unwrap();
        assert_eq!(parsed, IncomeBracket::Over75k);
    }
}
