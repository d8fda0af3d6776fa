//! Program catalog entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use navigator_core::types::ProgramId;

use crate::profile::NeedCategory;

/// An assistance program from the static catalog. Never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    /// Catalog identifier.
    pub id: ProgramId,
    /// Program name.
    pub name: String,
    /// Assistance category.
    pub category: NeedCategory,
    /// Short description.
    #[serde(default)]
    pub description: String,
    /// Eligibility rules.
    #[serde(default)]
    pub eligibility: Eligibility,
    /// Benefits offered.
    #[serde(default)]
    pub benefits: Vec<String>,
    /// Documents an applicant must provide.
    #[serde(default)]
    pub required_documents: Vec<String>,
    /// Contact details.
    #[serde(default)]
    pub contact: ContactInfo,
    /// Languages service is offered in.
    #[serde(default)]
    pub languages: Vec<String>,
    /// External application URL.
    #[serde(default)]
    pub application_url: Option<String>,
    /// Eligibility or enrollment deadline.
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
}

/// Eligibility rules attached to a program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Eligibility {
    /// Income bucket label (`"under-30k"`, `"Any"`, ...).
    #[serde(default)]
    pub income: Option<String>,
    /// Whether households with children are specifically eligible.
    #[serde(default)]
    pub children: bool,
    /// Free-text requirements shown to the user.
    #[serde(default)]
    pub requirements: Vec<String>,
}

/// Contact details for a program.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    /// Phone number.
    #[serde(default)]
    pub phone: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Website.
    #[serde(default)]
    pub website: Option<String>,
    /// Physical office address; `None` for remote services.
    #[serde(default)]
    pub address: Option<String>,
}

impl Program {
    /// Number of distinct, non-blank benefits.
    pub fn distinct_benefit_count(&self) -> usize {
        let mut seen: Vec<String> = Vec::with_capacity(self.benefits.len());
        for benefit in &self.benefits {
            let key = benefit.trim().to_lowercase();
            if !key.is_empty() && !seen.contains(&key) {
                seen.push(key);
            }
        }
        seen.len()
    }

    /// Whether the program has an office the user must visit.
    pub fn has_physical_address(&self) -> bool {
        self.contact
            .address
            .as_deref()
            .is_some_and(|a| !a.trim().is_empty())
    }

    /// Whether the program lists `language` (case-insensitive).
    pub fn supports_language(&self, language: &str) -> bool {
        let wanted = language.trim();
        !wanted.is_empty()
            && self
                .languages
                .iter()
                .any(|l| l.trim().eq_ignore_ascii_case(wanted))
    }
}
