//! Application status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where the user is with an application. Changed only by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    /// Bookmarked for later.
    Saved,
    /// Started but not yet submitted.
    Started,
    /// Submitted and awaiting a decision.
    Submitted,
    /// Approved.
    Approved,
    /// Denied.
    Denied,
}

impl ApplicationStatus {
    /// All statuses in pipeline order.
    pub const ALL: [ApplicationStatus; 5] = [
        Self::Saved,
        Self::Started,
        Self::Submitted,
        Self::Approved,
        Self::Denied,
    ];

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Saved => "saved",
            Self::Started => "started",
            Self::Submitted => "submitted",
            Self::Approved => "approved",
            Self::Denied => "denied",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|st| st.as_str() == wanted)
            .ok_or_else(|| format!("Invalid application status: '{s}'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "SUBMITTED".parse::<ApplicationStatus>().unwrap(),
            ApplicationStatus::Submitted
        );
        assert!("pending".parse::<ApplicationStatus>().is_err());
    }
}
