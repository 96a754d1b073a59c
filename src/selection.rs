//! Entry points used by the pick-serving API.
//!
//! ## Usage
//!
//! ```
//! use pick_allocation::{filter_picks_for_user, CandidateItem, Tier, UserProfile};
//!
//! let team = vec![CandidateItem::new("t1", "MLB", 0.81)];
//! let props = vec![CandidateItem::new("p1", "mlb", 0.77)];
//! let profile = UserProfile::new(Tier::Free).with_sports(["MLB"]);
//!
//! let result = filter_picks_for_user(&team, &props, &profile);
//! assert_eq!(result.total_allocated, 2);
//! assert!(!result.fallback_used);
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use crate::allocation::allocate;
use crate::assemble::assemble;
use crate::classify::category_of;
use crate::config::AllocationConfig;
use crate::inventory::Inventory;
use crate::preferences::resolve_preferred;
use crate::quota::plan_quota;
use crate::types::{ArtifactKind, CandidateItem, Category, SelectionResult, UserProfile};

/// Stateless selection engine holding only its limits.
///
/// Cheap to clone and safe to share across request handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionEngine {
    config: AllocationConfig,
}

impl SelectionEngine {
    pub fn new(config: AllocationConfig) -> Self {
        Self { config }
    }

    /// Select today's picks. Items from `team_picks` are allocated as team
    /// picks and items from `prop_picks` as props, whatever their own
    /// category field says.
    pub fn filter_picks_for_user(
        &self,
        team_picks: &[CandidateItem],
        prop_picks: &[CandidateItem],
        profile: &UserProfile,
    ) -> SelectionResult {
        let pool = team_picks
            .iter()
            .cloned()
            .map(|item| (Category::Team, item))
            .chain(prop_picks.iter().cloned().map(|item| (Category::Prop, item)));
        self.select(Inventory::index(pool), profile, ArtifactKind::Picks)
    }

    /// Select today's insights, splitting them into team/prop by category
    /// field or title keywords.
    pub fn filter_insights_for_user(
        &self,
        all_insights: &[CandidateItem],
        profile: &UserProfile,
    ) -> SelectionResult {
        let pool = all_insights
            .iter()
            .map(|item| (category_of(item), item.clone()));
        self.select(Inventory::index(pool), profile, ArtifactKind::Insights)
    }

    fn select(
        &self,
        inventory: Inventory,
        profile: &UserProfile,
        kind: ArtifactKind,
    ) -> SelectionResult {
        if inventory.is_empty() {
            debug!(kind = kind.noun(), "No candidates available");
            return SelectionResult::empty();
        }

        let limits = self.config.limits(kind);
        let quota = plan_quota(profile, limits);
        let preferred = quota
            .preferred_override()
            .unwrap_or_else(|| resolve_preferred(profile));

        debug!(
            kind = kind.noun(),
            tier = ?profile.tier,
            candidates = inventory.total_items(),
            requested = quota.total_requested(),
            preferred = ?preferred,
            "Selecting"
        );

        let allocation = allocate(&inventory, &preferred, &quota, limits);
        assemble(&inventory, &allocation, kind)
    }
}

/// Select today's picks with the default limits.
pub fn filter_picks_for_user(
    team_picks: &[CandidateItem],
    prop_picks: &[CandidateItem],
    profile: &UserProfile,
) -> SelectionResult {
    SelectionEngine::default().filter_picks_for_user(team_picks, prop_picks, profile)
}

/// Select today's insights with the default limits.
pub fn filter_insights_for_user(
    all_insights: &[CandidateItem],
    profile: &UserProfile,
) -> SelectionResult {
    SelectionEngine::default().filter_insights_for_user(all_insights, profile)
}

/// A serialized selection request, as fed to the command-line runner.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRequest {
    #[serde(default)]
    pub kind: ArtifactKind,
    #[serde(default)]
    pub profile: UserProfile,
    #[serde(default)]
    pub team_picks: Vec<CandidateItem>,
    #[serde(default)]
    pub prop_picks: Vec<CandidateItem>,
    #[serde(default)]
    pub insights: Vec<CandidateItem>,
}

impl SelectionRequest {
    /// Load a request from a JSON file
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read selection request {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Malformed selection request {}", path.display()))
    }

    /// Run the request through `engine`
    pub fn run(&self, engine: &SelectionEngine) -> SelectionResult {
        match self.kind {
            ArtifactKind::Picks => {
                engine.filter_picks_for_user(&self.team_picks, &self.prop_picks, &self.profile)
            }
            ArtifactKind::Insights => engine.filter_insights_for_user(&self.insights, &self.profile),
        }
    }
}
