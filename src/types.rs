//! Core data model for pick and insight selection.
//!
//! Everything here is plain data: candidates arrive already scored from the
//! upstream pick-serving API, profiles arrive already resolved, and results are
//! serialized straight back to the client (camelCase on the wire).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// What kind of artifact is being allocated. Selects the quota/ceiling table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    #[default]
    Picks,
    Insights,
}

impl ArtifactKind {
    /// Plural noun used in user-facing notifications
    pub fn noun(&self) -> &'static str {
        match self {
            ArtifactKind::Picks => "picks",
            ArtifactKind::Insights => "insights",
        }
    }
}

/// Subscription tier. Unknown or missing values resolve to `Free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Tier {
    #[default]
    Free,
    Pro,
    Elite,
}

impl Tier {
    /// Parse a tier label leniently (case-insensitive, anything unknown is free)
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "elite" => Tier::Elite,
            "pro" => Tier::Pro,
            _ => Tier::Free,
        }
    }
}

impl From<Option<String>> for Tier {
    fn from(value: Option<String>) -> Self {
        value.as_deref().map(Tier::parse).unwrap_or_default()
    }
}

/// Candidate category as declared upstream.
///
/// Allocation only ever uses `Team` and `Prop`; `Generic` items are routed by
/// the keyword heuristic in [`crate::classify`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    Team,
    Prop,
    Generic,
}

impl Category {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "team" => Category::Team,
            "prop" | "props" | "player" | "player_prop" => Category::Prop,
            _ => Category::Generic,
        }
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Category::parse(&value)
    }
}

/// A scored prediction or insight eligible for selection.
///
/// Fields the engine does not interpret are kept verbatim in `payload` and
/// round-trip through serialization untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateItem {
    pub id: String,
    pub sport: String,
    /// Either 0..1 or 0..100; only relative order matters
    #[serde(default)]
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    /// Free text (market/description) used for category heuristics
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(flatten)]
    pub payload: serde_json::Map<String, serde_json::Value>,
}

impl CandidateItem {
    pub fn new(id: impl Into<String>, sport: impl Into<String>, confidence: f64) -> Self {
        Self {
            id: id.into(),
            sport: sport.into(),
            confidence,
            category: None,
            title: String::new(),
            payload: serde_json::Map::new(),
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Declared sport interests as boolean flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SportFlags {
    pub mlb: bool,
    pub nba: bool,
    pub wnba: bool,
    pub nfl: bool,
    pub nhl: bool,
    pub ncaaf: bool,
    pub ncaab: bool,
    pub ufc: bool,
    pub mma: bool,
    pub soccer: bool,
}

/// Sport preferences, either as a flag object or a list of sport labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SportPreferences {
    Labels(Vec<String>),
    Flags(SportFlags),
}

impl Default for SportPreferences {
    fn default() -> Self {
        SportPreferences::Flags(SportFlags::default())
    }
}

/// Per-category unit counts for one sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryCounts {
    pub team: usize,
    pub prop: usize,
}

impl CategoryCounts {
    pub fn new(team: usize, prop: usize) -> Self {
        Self { team, prop }
    }

    pub fn total(&self) -> usize {
        self.team + self.prop
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Elite-tier distribution setting: the `"auto"` keyword or an explicit
/// per-sport request map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistributionSetting {
    Keyword(String),
    PerSport(BTreeMap<String, CategoryCounts>),
}

impl DistributionSetting {
    /// Explicit per-sport requests, or `None` when set to a keyword such as "auto"
    pub fn per_sport(&self) -> Option<&BTreeMap<String, CategoryCounts>> {
        match self {
            DistributionSetting::PerSport(map) => Some(map),
            DistributionSetting::Keyword(_) => None,
        }
    }
}

/// Resolved user profile as handed over by the serving layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub tier: Tier,
    #[serde(default)]
    pub sport_preferences: SportPreferences,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_distribution: Option<DistributionSetting>,
}

impl UserProfile {
    pub fn new(tier: Tier) -> Self {
        Self {
            tier,
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: SportFlags) -> Self {
        self.sport_preferences = SportPreferences::Flags(flags);
        self
    }

    pub fn with_sports<I, S>(mut self, sports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sport_preferences =
            SportPreferences::Labels(sports.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_custom_distribution(mut self, per_sport: BTreeMap<String, CategoryCounts>) -> Self {
        self.custom_distribution = Some(DistributionSetting::PerSport(per_sport));
        self
    }
}

/// Items actually delivered for one sport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SportDistribution {
    pub team: usize,
    pub prop: usize,
    pub total: usize,
}

/// Final selection for one user and one artifact kind.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResult {
    pub items: Vec<CandidateItem>,
    pub distribution: BTreeMap<String, SportDistribution>,
    pub fallback_used: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification: Option<String>,
    pub total_allocated: usize,
}

impl SelectionResult {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of delivered items for `sport` (canonical code)
    pub fn count_for(&self, sport: &str) -> usize {
        self.distribution.get(sport).map(|d| d.total).unwrap_or(0)
    }
}
