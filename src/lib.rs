//! Daily Pick & Insight Allocation
//!
//! Decides which of today's already-scored picks (or insights) a given user
//! sees, honoring their subscription quota, their declared sports and a
//! fallback to other sports when the preferred ones run dry.
//!
//! Pipeline: normalize sport → index inventory → resolve preferences → plan
//! quota → allocate → assemble. Pure and synchronous; no I/O, no shared state.

pub mod allocation;
pub mod assemble;
pub mod classify;
pub mod config;
pub mod inventory;
pub mod logging;
pub mod preferences;
pub mod quota;
pub mod selection;
pub mod sport;
pub mod types;

pub use classify::classify_by_category;
pub use config::{AllocationConfig, ArtifactLimits};
pub use selection::{
    filter_insights_for_user, filter_picks_for_user, SelectionEngine, SelectionRequest,
};
pub use types::{
    ArtifactKind, CandidateItem, Category, CategoryCounts, DistributionSetting, SelectionResult,
    SportDistribution, SportFlags, SportPreferences, Tier, UserProfile,
};
