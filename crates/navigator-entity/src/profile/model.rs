//! User profile entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use navigator_core::types::ProfileId;

use super::income::IncomeBracket;
use super::need::NeedCategory;

/// The resident's onboarding profile. One per store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique profile identifier.
    pub id: ProfileId,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Number of people in the household.
    #[serde(default)]
    pub household_size: Option<u32>,
    /// Whether there are children in the household.
    #[serde(default)]
    pub has_children: bool,
    /// Household income bracket.
    #[serde(default)]
    pub income_bracket: Option<IncomeBracket>,
    /// Five-digit ZIP code.
    #[serde(default)]
    pub zip_code: Option<String>,
    /// Primary needs in the order the user selected them.
    #[serde(default)]
    pub primary_needs: Vec<NeedCategory>,
    /// Preferred language (e.g. `"English"`, `"Spanish"`, `"Arabic"`).
    #[serde(default)]
    pub preferred_language: Option<String>,
    /// When onboarding was completed.
    pub created_at: DateTime<Utc>,
    /// When the profile was last edited.
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Create an empty profile stamped at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: ProfileId::new(),
            name: None,
            household_size: None,
            has_children: false,
            income_bracket: None,
            zip_code: None,
            primary_needs: Vec::new(),
            preferred_language: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether `category` is one of the user's primary needs.
    pub fn needs(&self, category: NeedCategory) -> bool {
        self.primary_needs.contains(&category)
    }

    /// Primary needs with duplicates removed, keeping first occurrence order.
    pub fn distinct_needs(&self) -> Vec<NeedCategory> {
        let mut seen = Vec::with_capacity(self.primary_needs.len());
        for need in &self.primary_needs {
            if !seen.contains(need) {
                seen.push(*need);
            }
        }
        seen
    }

    /// ZIP code with surrounding whitespace and any `+4` suffix removed.
    pub fn normalized_zip(&self) -> Option<&str> {
        let zip = self.zip_code.as_deref()?.trim();
        let five = zip.split('-').next().unwrap_or(zip);
        (!five.is_empty()).then_some(five)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_needs_keeps_order() {
        let mut profile = UserProfile::new(Utc::now());
        profile.primary_needs = vec![
            NeedCategory::Food,
            NeedCategory::Housing,
            NeedCategory::Food,
        ];
        assert_eq!(
            profile.distinct_needs(),
            vec![NeedCategory::Food, NeedCategory::Housing]
        );
    }

    #[test]
    fn test_normalized_zip() {
        let mut profile = UserProfile::new(Utc::now());
        assert_eq!(profile.normalized_zip(), None);
        profile.zip_code = Some(" 48201-1234 ".to_string());
        assert_eq!(profile.normalized_zip(), Some("48201"));
    }

    #[test]
    fn test_minimal_json_deserializes() {
        let json = r#"{
            "id": "0190c6a0-0000-7000-8000-000000000001",
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-01T00:00:00Z"
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.primary_needs.is_empty());
        assert!(profile.income_bracket.is_none());
    }
}
