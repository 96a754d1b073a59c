//! Allocation limits and environment overrides.
//!
//! Quotas, per-sport ceilings and the seed cap are fixed per artifact kind.
//! The defaults below are what the serving API ships with; `from_env()` lets an
//! operator tune them without a rebuild.

use tracing::warn;

use crate::types::{ArtifactKind, Tier};

// === Picks ===

/// Daily pick quota for free users
pub const DEFAULT_PICKS_QUOTA_FREE: usize = 10;

/// Daily pick quota for pro users
pub const DEFAULT_PICKS_QUOTA_PRO: usize = 20;

/// Daily pick quota for elite users
pub const DEFAULT_PICKS_QUOTA_ELITE: usize = 30;

/// Maximum picks a single sport may receive in automatic allocation
pub const DEFAULT_PICKS_MAX_PER_SPORT: usize = 30;

// === Insights ===

/// Daily insight quota for free users
pub const DEFAULT_INSIGHTS_QUOTA_FREE: usize = 5;

/// Daily insight quota for pro users
pub const DEFAULT_INSIGHTS_QUOTA_PRO: usize = 8;

/// Daily insight quota for elite users
pub const DEFAULT_INSIGHTS_QUOTA_ELITE: usize = 12;

/// Maximum insights a single sport may receive in automatic allocation
pub const DEFAULT_INSIGHTS_MAX_PER_SPORT: usize = 8;

/// Upper bound on the first-pass seed each sport receives
pub const DEFAULT_SEED_CAP: usize = 5;

/// Quota and ceiling table for one artifact kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactLimits {
    pub free_quota: usize,
    pub pro_quota: usize,
    pub elite_quota: usize,
    /// Per-sport ceiling during round-robin fill
    pub max_per_sport: usize,
    /// Per-sport cap on the first-pass seed
    pub seed_cap: usize,
}

impl ArtifactLimits {
    pub fn picks() -> Self {
        Self {
            free_quota: DEFAULT_PICKS_QUOTA_FREE,
            pro_quota: DEFAULT_PICKS_QUOTA_PRO,
            elite_quota: DEFAULT_PICKS_QUOTA_ELITE,
            max_per_sport: DEFAULT_PICKS_MAX_PER_SPORT,
            seed_cap: DEFAULT_SEED_CAP,
        }
    }

    pub fn insights() -> Self {
        Self {
            free_quota: DEFAULT_INSIGHTS_QUOTA_FREE,
            pro_quota: DEFAULT_INSIGHTS_QUOTA_PRO,
            elite_quota: DEFAULT_INSIGHTS_QUOTA_ELITE,
            max_per_sport: DEFAULT_INSIGHTS_MAX_PER_SPORT,
            seed_cap: DEFAULT_SEED_CAP,
        }
    }

    /// Total daily quota for `tier`
    pub fn quota_for(&self, tier: Tier) -> usize {
        match tier {
            Tier::Free => self.free_quota,
            Tier::Pro => self.pro_quota,
            Tier::Elite => self.elite_quota,
        }
    }
}

/// Limits for both artifact kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationConfig {
    pub picks: ArtifactLimits,
    pub insights: ArtifactLimits,
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self {
            picks: ArtifactLimits::picks(),
            insights: ArtifactLimits::insights(),
        }
    }
}

impl AllocationConfig {
    /// Load limits from environment variables, falling back to the defaults.
    ///
    /// Recognized variables:
    /// - PICKS_QUOTA_FREE / PICKS_QUOTA_PRO / PICKS_QUOTA_ELITE
    /// - PICKS_MAX_PER_SPORT
    /// - INSIGHTS_QUOTA_FREE / INSIGHTS_QUOTA_PRO / INSIGHTS_QUOTA_ELITE
    /// - INSIGHTS_MAX_PER_SPORT
    /// - ALLOCATION_SEED_CAP (shared by both kinds)
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let seed_cap = env_usize("ALLOCATION_SEED_CAP", DEFAULT_SEED_CAP);

        let picks = ArtifactLimits {
            free_quota: env_usize("PICKS_QUOTA_FREE", DEFAULT_PICKS_QUOTA_FREE),
            pro_quota: env_usize("PICKS_QUOTA_PRO", DEFAULT_PICKS_QUOTA_PRO),
            elite_quota: env_usize("PICKS_QUOTA_ELITE", DEFAULT_PICKS_QUOTA_ELITE),
            max_per_sport: env_usize("PICKS_MAX_PER_SPORT", DEFAULT_PICKS_MAX_PER_SPORT),
            seed_cap,
        };

        let insights = ArtifactLimits {
            free_quota: env_usize("INSIGHTS_QUOTA_FREE", DEFAULT_INSIGHTS_QUOTA_FREE),
            pro_quota: env_usize("INSIGHTS_QUOTA_PRO", DEFAULT_INSIGHTS_QUOTA_PRO),
            elite_quota: env_usize("INSIGHTS_QUOTA_ELITE", DEFAULT_INSIGHTS_QUOTA_ELITE),
            max_per_sport: env_usize("INSIGHTS_MAX_PER_SPORT", DEFAULT_INSIGHTS_MAX_PER_SPORT),
            seed_cap,
        };

        Self { picks, insights }
    }

    pub fn limits(&self, kind: ArtifactKind) -> &ArtifactLimits {
        match kind {
            ArtifactKind::Picks => &self.picks,
            ArtifactKind::Insights => &self.insights,
        }
    }
}

fn env_usize(name: &str, default: usize) -> usize {
    match std::env::var(name) {
        Ok(val_str) => match val_str.trim().parse::<usize>() {
            Ok(v) => v,
            Err(_) => {
                warn!(
                    "Failed to parse {}='{}', using default {}",
                    name, val_str, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_quota_tables() {
        let cfg = AllocationConfig::default();
        assert_eq!(cfg.picks.quota_for(Tier::Free), 10);
        assert_eq!(cfg.picks.quota_for(Tier::Pro), 20);
        assert_eq!(cfg.picks.quota_for(Tier::Elite), 30);
        assert_eq!(cfg.insights.quota_for(Tier::Free), 5);
        assert_eq!(cfg.insights.quota_for(Tier::Pro), 8);
        assert_eq!(cfg.insights.quota_for(Tier::Elite), 12);
        assert_eq!(cfg.limits(ArtifactKind::Picks).max_per_sport, 30);
        assert_eq!(cfg.limits(ArtifactKind::Insights).max_per_sport, 8);
        assert_eq!(cfg.picks.seed_cap, 5);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides_and_ignores_garbage() {
        std::env::set_var("PICKS_QUOTA_FREE", "12");
        std::env::set_var("INSIGHTS_MAX_PER_SPORT", "not-a-number");
        std::env::set_var("ALLOCATION_SEED_CAP", " 3 ");

        let cfg = AllocationConfig::from_env();
        assert_eq!(cfg.picks.free_quota, 12);
        assert_eq!(cfg.picks.pro_quota, DEFAULT_PICKS_QUOTA_PRO);
        assert_eq!(cfg.insights.max_per_sport, DEFAULT_INSIGHTS_MAX_PER_SPORT);
        assert_eq!(cfg.picks.seed_cap, 3);
        assert_eq!(cfg.insights.seed_cap, 3);

        std::env::remove_var("PICKS_QUOTA_FREE");
        std::env::remove_var("INSIGHTS_MAX_PER_SPORT");
        std::env::remove_var("ALLOCATION_SEED_CAP");
    }

    #[test]
    #[serial]
    fn test_from_env_without_variables_matches_default() {
        std::env::remove_var("PICKS_QUOTA_FREE");
        std::env::remove_var("INSIGHTS_MAX_PER_SPORT");
        std::env::remove_var("ALLOCATION_SEED_CAP");
        assert_eq!(AllocationConfig::from_env(), AllocationConfig::default());
    }
}
