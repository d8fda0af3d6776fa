//! Additive program scoring.
//!
//! Every program is scored independently against the profile. Each rule
//! that fires adds a fixed number of points and one human-readable reason;
//! reasons keep rule order. Missing profile fields never match and never
//! error.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use navigator_core::config::RecommendationConfig;
use navigator_core::traits::clock::Clock;
use navigator_entity::profile::{IncomeRange, NeedCategory, UserProfile};
use navigator_entity::program::Program;

use super::history::ApplicationHistory;

const PRIMARY_NEED_POINTS: u32 = 50;
const INCOME_POINTS: u32 = 30;
const LOCATION_POINTS: u32 = 20;
const HOUSEHOLD_POINTS: u32 = 15;
const CHILDREN_POINTS: u32 = 10;
const LANGUAGE_POINTS: u32 = 10;
const HISTORY_POINTS_EACH: u32 = 5;
const HIGH_DEMAND_POINTS: u32 = 5;
const BENEFITS_POINTS: u32 = 3;

/// Household sizes the compatibility rule accepts.
const HOUSEHOLD_RANGE: std::ops::RangeInclusive<u32> = 1..=10;

/// More than this many distinct benefits earns the benefits bonus.
const BENEFITS_THRESHOLD: usize = 3;

const SECONDS_PER_DAY: i64 = 86_400;

/// One program's score against one profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationScore {
    /// The scored program.
    pub program: Program,
    /// Raw additive score.
    pub score: u32,
    /// Why points were awarded, in rule order.
    pub reasons: Vec<String>,
    /// Score as a 0 to 100 percentage of the configured maximum.
    pub match_percentage: u8,
}

/// Display priority of a recommendation group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupPriority {
    /// One of the user's primary needs.
    High,
    /// Everything else.
    Medium,
}

/// Recommendations grouped for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationGroup {
    /// The primary need this group covers; `None` for the "other" group.
    pub category: Option<NeedCategory>,
    /// Display label.
    pub label: String,
    /// Display priority.
    pub priority: GroupPriority,
    /// Scores, highest first.
    pub items: Vec<RecommendationScore>,
}

/// Scores programs against a profile.
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    /// Tunables.
    config: RecommendationConfig,
    /// Service-area ZIP codes.
    service_area: HashSet<String>,
    /// Time source for deadline urgency.
    clock: Arc<dyn Clock>,
}

impl RecommendationEngine {
    /// Creates a new engine.
    pub fn new(config: RecommendationConfig, clock: Arc<dyn Clock>) -> Self {
        let service_area = config
            .service_area_zips
            .iter()
            .map(|z| z.trim().to_string())
            .collect();
        Self {
            config,
            service_area,
            clock,
        }
    }

    /// Score one program.
    pub fn score(
        &self,
        profile: &UserProfile,
        program: &Program,
        history: &ApplicationHistory,
    ) -> RecommendationScore {
        let now = self.clock.now();
        let mut score = 0;
        let mut reasons = Vec::new();
        let mut award = |points: u32, reason: String| {
            score += points;
            reasons.push(reason);
        };

        if profile.needs(program.category) {
            award(
                PRIMARY_NEED_POINTS,
                format!("Matches your primary need: {}", program.category.label()),
            );
        }

        if income_matches(profile, program) {
            award(INCOME_POINTS, "Within income guidelines".to_string());
        }

        if let Some(reason) = self.location_reason(profile, program) {
            award(LOCATION_POINTS, reason.to_string());
        }

        if profile
            .household_size
            .is_some_and(|size| HOUSEHOLD_RANGE.contains(&size))
        {
            award(HOUSEHOLD_POINTS, "Fits your household size".to_string());
        }

        if profile.has_children && program.eligibility.children {
            award(CHILDREN_POINTS, "Supports families with children".to_string());
        }

        if let Some(language) = profile
            .preferred_language
            .as_deref()
            .filter(|l| program.supports_language(l))
        {
            award(LANGUAGE_POINTS, format!("Available in {}", language.trim()));
        }

        let similar = history.similar_count(program);
        if similar > 0 {
            award(
                HISTORY_POINTS_EACH * similar as u32,
                format!("Similar to {similar} program(s) you've applied to"),
            );
        }

        if program.category.is_high_demand() {
            award(HIGH_DEMAND_POINTS, "Popular with Detroit residents".to_string());
        }

        let benefits = program.distinct_benefit_count();
        if benefits > BENEFITS_THRESHOLD {
            award(
                BENEFITS_POINTS,
                format!("Offers {benefits} different benefits"),
            );
        }

        if let Some((points, reason)) = urgency(program.deadline, now) {
            award(points, reason);
        }

        RecommendationScore {
            program: program.clone(),
            score,
            reasons,
            match_percentage: self.match_percentage(score),
        }
    }

    /// Score every program, in catalog order.
    ///
    /// An absent profile or an empty catalog yields an empty result.
    pub fn recommend(
        &self,
        profile: Option<&UserProfile>,
        programs: &[Program],
        history: &ApplicationHistory,
    ) -> Vec<RecommendationScore> {
        let Some(profile) = profile else {
            return Vec::new();
        };
        programs
            .iter()
            .map(|program| self.score(profile, program, history))
            .collect()
    }

    /// The `n` best positive scores, highest first. Ties keep catalog order.
    pub fn top(
        &self,
        profile: Option<&UserProfile>,
        programs: &[Program],
        history: &ApplicationHistory,
        n: usize,
    ) -> Vec<RecommendationScore> {
        let mut ranked = self.ranked(profile, programs, history);
        ranked.truncate(n);
        ranked
    }

    /// Group positive scores by the user's primary needs, then "other".
    ///
    /// Each primary-need group holds at most `per_need_limit` programs at
    /// high priority; the "other" group holds at most `other_limit`
    /// programs outside every primary need at medium priority. Empty
    /// groups are omitted.
    pub fn categorize(
        &self,
        profile: Option<&UserProfile>,
        programs: &[Program],
        history: &ApplicationHistory,
    ) -> Vec<RecommendationGroup> {
        let Some(profile) = profile else {
            return Vec::new();
        };
        let ranked = self.ranked(Some(profile), programs, history);
        let mut groups = Vec::new();

        for need in profile.distinct_needs() {
            let items: Vec<RecommendationScore> = ranked
                .iter()
                .filter(|s| s.program.category == need)
                .take(self.config.per_need_limit)
                .cloned()
                .collect();
            if !items.is_empty() {
                groups.push(RecommendationGroup {
                    category: Some(need),
                    label: need.label().to_string(),
                    priority: GroupPriority::High,
                    items,
                });
            }
        }

        let other: Vec<RecommendationScore> = ranked
            .into_iter()
            .filter(|s| !profile.needs(s.program.category))
            .take(self.config.other_limit)
            .collect();
        if !other.is_empty() {
            groups.push(RecommendationGroup {
                category: None,
                label: "Other Programs".to_string(),
                priority: GroupPriority::Medium,
                items: other,
            });
        }

        groups
    }

    /// `min(100, round(score / max_score × 100))`.
    pub fn match_percentage(&self, score: u32) -> u8 {
        let max = f64::from(self.config.max_score.max(1));
        let pct = (f64::from(score) / max * 100.0).round();
        pct.min(100.0) as u8
    }

    /// Positive scores sorted highest first; stable on ties.
    fn ranked(
        &self,
        profile: Option<&UserProfile>,
        programs: &[Program],
        history: &ApplicationHistory,
    ) -> Vec<RecommendationScore> {
        let mut scored: Vec<RecommendationScore> = self
            .recommend(profile, programs, history)
            .into_iter()
            .filter(|s| s.score > 0)
            .collect();
        scored.sort_by(|a, b| b.score.cmp(&a.score));
        scored
    }

    fn location_reason(&self, profile: &UserProfile, program: &Program) -> Option<&'static str> {
        if profile
            .normalized_zip()
            .is_some_and(|zip| self.service_area.contains(zip))
        {
            Some("Serves your ZIP code")
        } else if !program.has_physical_address() {
            Some("Available from any location")
        } else {
            None
        }
    }
}

/// User bracket overlaps the program's bucket. A program bucket that is
/// absent or unreadable accepts everyone; a user without a bracket matches
/// nothing.
fn income_matches(profile: &UserProfile, program: &Program) -> bool {
    let Some(bracket) = profile.income_bracket else {
        return false;
    };
    match program.eligibility.income.as_deref().and_then(IncomeRange::parse) {
        Some(range) => bracket.range().overlaps(&range),
        None => true,
    }
}

/// Deadline boost. Past deadlines earn nothing.
fn urgency(deadline: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Option<(u32, String)> {
    let remaining = (deadline? - now).num_seconds();
    if remaining <= 0 {
        return None;
    }
    let days = (remaining + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    match days {
        0..=7 => Some((20, format!("Deadline soon: {days} day(s) left"))),
        8..=30 => Some((10, format!("Deadline in {days} days"))),
        31..=90 => Some((5, format!("Apply within {days} days"))),
        _ => None,
    }
}
