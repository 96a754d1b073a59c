//! Per-sport allocation planning.
//!
//! # Algorithm
//!
//! Custom (elite override): each requested sport/category gets
//! `min(requested, available)`. Nothing else runs.
//!
//! Auto:
//! 1. Priority order is the preferred sports (resolver order) that have
//!    inventory, followed by every other sport with inventory in code order.
//! 2. If the preferred sports cannot cover the quota on their own and other
//!    sports have inventory, fallback is used: the preferred sports are filled
//!    first, then the leftover quota is filled from the other sports.
//!    Otherwise only preferred sports are filled.
//! 3. A fill runs two passes over its sport list:
//!    - seed: each sport gets `min(seed_cap, max(1, remaining / unseeded))`,
//!      team taking the larger half, each half capped by availability;
//!    - round-robin: one unit per sport per round into whichever category is
//!      behind (ties go to team), until quota, availability or the per-sport
//!      ceiling runs out. A round with no assignment ends the fill.

use std::collections::BTreeMap;
use tracing::debug;

use crate::config::ArtifactLimits;
use crate::inventory::Inventory;
use crate::quota::QuotaPlan;
use crate::types::{Category, CategoryCounts};

/// Planned unit counts per canonical sport
pub type AllocationPlan = BTreeMap<String, CategoryCounts>;

/// Output of [`allocate`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Allocation {
    pub plan: AllocationPlan,
    pub fallback_used: bool,
    /// Non-preferred sports that actually received units, in priority order
    pub extra_sports: Vec<String>,
}

impl Allocation {
    pub fn total(&self) -> usize {
        self.plan.values().map(CategoryCounts::total).sum()
    }
}

/// Build the allocation plan for one call.
pub fn allocate(
    inventory: &Inventory,
    preferred: &[String],
    quota: &QuotaPlan,
    limits: &ArtifactLimits,
) -> Allocation {
    match quota {
        QuotaPlan::Custom { per_sport } => allocate_custom(inventory, per_sport),
        QuotaPlan::Auto { total } => allocate_auto(inventory, preferred, *total, limits),
    }
}

fn allocate_custom(
    inventory: &Inventory,
    per_sport: &BTreeMap<String, CategoryCounts>,
) -> Allocation {
    let mut plan = AllocationPlan::new();

    for (sport, requested) in per_sport {
        let available = inventory.available(sport);
        let counts = CategoryCounts::new(
            requested.team.min(available.team),
            requested.prop.min(available.prop),
        );
        if !counts.is_empty() {
            plan.insert(sport.clone(), counts);
        }
    }

    let allocation = Allocation {
        plan,
        fallback_used: false,
        extra_sports: Vec::new(),
    };
    debug!(
        sports = per_sport.len(),
        allocated = allocation.total(),
        "Custom distribution applied"
    );
    allocation
}

fn allocate_auto(
    inventory: &Inventory,
    preferred: &[String],
    quota: usize,
    limits: &ArtifactLimits,
) -> Allocation {
    if quota == 0 || inventory.is_empty() {
        return Allocation::default();
    }

    let mut preferred_sports: Vec<&str> = Vec::with_capacity(preferred.len());
    for sport in preferred {
        if inventory.contains_sport(sport) && !preferred_sports.contains(&sport.as_str()) {
            preferred_sports.push(sport);
        }
    }
    let other_sports: Vec<&str> = inventory
        .sports()
        .filter(|s| !preferred.iter().any(|p| p == s))
        .collect();

    let total_preferred_available: usize = preferred_sports
        .iter()
        .map(|s| inventory.available_total(s))
        .sum();
    let fallback_used = total_preferred_available < quota && !other_sports.is_empty();

    debug!(
        quota,
        total_preferred_available,
        preferred = ?preferred_sports,
        others = ?other_sports,
        fallback_used,
        "Allocation universe resolved"
    );

    let mut plan = AllocationPlan::new();
    let mut remaining = quota;

    let preferred_counts = fill(inventory, &preferred_sports, &mut remaining, limits);
    merge(&mut plan, &preferred_sports, &preferred_counts);

    let mut extra_sports = Vec::new();
    if fallback_used {
        let other_counts = fill(inventory, &other_sports, &mut remaining, limits);
        merge(&mut plan, &other_sports, &other_counts);
        extra_sports = other_sports
            .iter()
            .zip(&other_counts)
            .filter(|(_, c)| !c.is_empty())
            .map(|(s, _)| s.to_string())
            .collect();
    }

    debug!(
        allocated = quota - remaining,
        unfilled = remaining,
        extra = ?extra_sports,
        "Auto allocation complete"
    );

    Allocation {
        plan,
        fallback_used,
        extra_sports,
    }
}

fn merge(plan: &mut AllocationPlan, sports: &[&str], counts: &[CategoryCounts]) {
    for (sport, c) in sports.iter().zip(counts) {
        if !c.is_empty() {
            plan.insert(sport.to_string(), *c);
        }
    }
}

/// Two-pass fill over `sports`, returning counts aligned with `sports` and
/// deducting what was assigned from `remaining`.
fn fill(
    inventory: &Inventory,
    sports: &[&str],
    remaining: &mut usize,
    limits: &ArtifactLimits,
) -> Vec<CategoryCounts> {
    let mut counts = vec![CategoryCounts::default(); sports.len()];
    let available: Vec<CategoryCounts> = sports.iter().map(|s| inventory.available(s)).collect();

    // Pass 1: seed
    for (i, sport) in sports.iter().enumerate() {
        if *remaining == 0 {
            break;
        }
        let unseeded = (sports.len() - i).max(1);
        let target = (*remaining / unseeded)
            .max(1)
            .min(limits.seed_cap)
            .min(limits.max_per_sport);
        let team_target = target.div_ceil(2);
        let prop_target = target - team_target;

        let team = team_target.min(available[i].team);
        let prop = prop_target.min(available[i].prop);
        counts[i] = CategoryCounts::new(team, prop);
        *remaining -= team + prop;

        debug!(sport = %sport, target, team, prop, remaining = *remaining, "Seeded");
    }

    // Pass 2: round-robin
    while *remaining > 0 {
        let mut progressed = false;

        for i in 0..sports.len() {
            if *remaining == 0 {
                break;
            }
            let current = counts[i];
            let avail = available[i];
            if current.total() >= limits.max_per_sport || current.total() >= avail.total() {
                continue;
            }

            let team_room = current.team < avail.team;
            let prop_room = current.prop < avail.prop;
            let behind = if current.team <= current.prop {
                Category::Team
            } else {
                Category::Prop
            };

            let category = match (behind, team_room, prop_room) {
                (Category::Team, true, _) => Category::Team,
                (Category::Prop, _, true) => Category::Prop,
                (_, true, false) => Category::Team,
                (_, false, true) => Category::Prop,
                _ => continue,
            };

            match category {
                Category::Prop => counts[i].prop += 1,
                _ => counts[i].team += 1,
            }
            *remaining -= 1;
            progressed = true;
        }

        if !progressed {
            break;
        }
    }

    counts
}
