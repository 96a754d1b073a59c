//! Quota planning: how much a user gets, and whether they chose it themselves.

use std::collections::BTreeMap;

use crate::config::ArtifactLimits;
use crate::sport::normalize_sport;
use crate::types::{CategoryCounts, Tier, UserProfile};

/// Resolved quota for one call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuotaPlan {
    /// Tier quota distributed automatically across sports
    Auto { total: usize },
    /// Elite override: exact per-sport, per-category counts
    Custom {
        per_sport: BTreeMap<String, CategoryCounts>,
    },
}

impl QuotaPlan {
    /// Tier quota in auto mode, or the sum of explicit requests in custom mode
    pub fn total_requested(&self) -> usize {
        match self {
            QuotaPlan::Auto { total } => *total,
            QuotaPlan::Custom { per_sport } => per_sport
                .values()
                .fold(0usize, |acc, c| acc.saturating_add(c.total())),
        }
    }

    /// Sports a custom distribution asks for, in code order.
    ///
    /// A custom distribution is the user's explicit preference and supersedes
    /// the flag-based one. `None` in auto mode.
    pub fn preferred_override(&self) -> Option<Vec<String>> {
        match self {
            QuotaPlan::Auto { .. } => None,
            QuotaPlan::Custom { per_sport } => Some(per_sport.keys().cloned().collect()),
        }
    }
}

/// Resolve the quota plan for `profile` under `limits`.
///
/// Custom mode needs all of: elite tier, a per-sport map (not a keyword such
/// as "auto"), and at least one non-zero request. Map keys are normalized;
/// keys that collapse to the same code have their counts summed. Zero entries
/// are dropped.
pub fn plan_quota(profile: &UserProfile, limits: &ArtifactLimits) -> QuotaPlan {
    if profile.tier == Tier::Elite {
        if let Some(requested) = profile
            .custom_distribution
            .as_ref()
            .and_then(|d| d.per_sport())
        {
            let mut per_sport: BTreeMap<String, CategoryCounts> = BTreeMap::new();
            for (label, counts) in requested {
                if counts.is_empty() {
                    continue;
                }
                let entry = per_sport.entry(normalize_sport(label)).or_default();
                entry.team = entry.team.saturating_add(counts.team);
                entry.prop = entry.prop.saturating_add(counts.prop);
            }

            if !per_sport.is_empty() {
                return QuotaPlan::Custom { per_sport };
            }
        }
    }

    QuotaPlan::Auto {
        total: limits.quota_for(profile.tier),
    }
}
