//! Assistance category enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of assistance. Used both as a program's category and as the
/// "primary needs" a user selects during onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeedCategory {
    /// Rent, shelter, home repair.
    Housing,
    /// Food assistance and pantries.
    Food,
    /// Medical and mental health care.
    Healthcare,
    /// Job training and placement.
    Employment,
    /// Schooling and adult education.
    Education,
    /// Child care and family support.
    Childcare,
    /// Transit and vehicle assistance.
    Transportation,
    /// Energy and water bills.
    Utilities,
    /// Legal aid.
    Legal,
    /// Cash assistance, tax help, financial coaching.
    Financial,
    /// Anything the catalog tags with an unknown category.
    #[serde(other)]
    Other,
}

impl NeedCategory {
    /// All concrete categories, in display order.
    pub const ALL: [NeedCategory; 11] = [
        Self::Housing,
        Self::Food,
        Self::Healthcare,
        Self::Employment,
        Self::Education,
        Self::Childcare,
        Self::Transportation,
        Self::Utilities,
        Self::Legal,
        Self::Financial,
        Self::Other,
    ];

    /// Return the category as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::Food => "food",
            Self::Healthcare => "healthcare",
            Self::Employment => "employment",
            Self::Education => "education",
            Self::Childcare => "childcare",
            Self::Transportation => "transportation",
            Self::Utilities => "utilities",
            Self::Legal => "legal",
            Self::Financial => "financial",
            Self::Other => "other",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Healthcare => "Healthcare",
            Self::Employment => "Employment",
            Self::Education => "Education",
            Self::Childcare => "Childcare",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Legal => "Legal Aid",
            Self::Financial => "Financial",
            Self::Other => "Other",
        }
    }

    /// Categories with the highest demand in the service area.
    pub fn is_high_demand(&self) -> bool {
        matches!(self, Self::Housing | Self::Employment | Self::Food)
    }
}

impl fmt::Display for NeedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NeedCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("Unknown category: '{s}'"))
    }
}
