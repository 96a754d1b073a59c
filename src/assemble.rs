//! Turning an allocation plan into the user-facing selection.

use tracing::debug;

use crate::allocation::Allocation;
use crate::inventory::{rank_order, Inventory};
use crate::types::{ArtifactKind, Category, SelectionResult, SportDistribution};

/// Slice the planned items out of `inventory` and package the result.
///
/// Items are globally re-ranked (confidence desc, id asc) after slicing, since
/// per-sport slices say nothing about cross-sport order. The distribution
/// reflects what was actually sliced, not what was planned.
pub fn assemble(inventory: &Inventory, allocation: &Allocation, kind: ArtifactKind) -> SelectionResult {
    let mut result = SelectionResult::empty();

    for (sport, planned) in &allocation.plan {
        let team = inventory.top(sport, Category::Team, planned.team);
        let prop = inventory.top(sport, Category::Prop, planned.prop);
        if team.is_empty() && prop.is_empty() {
            continue;
        }

        result.items.extend_from_slice(team);
        result.items.extend_from_slice(prop);
        result.distribution.insert(
            sport.clone(),
            SportDistribution {
                team: team.len(),
                prop: prop.len(),
                total: team.len() + prop.len(),
            },
        );
    }

    result.items.sort_by(rank_order);
    result.total_allocated = result.items.len();
    result.fallback_used = allocation.fallback_used;
    if allocation.fallback_used {
        result.notification = Some(fallback_notification(
            kind,
            &allocation.extra_sports,
            result.total_allocated,
        ));
    }

    debug!(
        kind = kind.noun(),
        total = result.total_allocated,
        sports = result.distribution.len(),
        fallback_used = result.fallback_used,
        "Selection assembled"
    );

    result
}

/// User-facing message explaining that other sports were mixed in
pub fn fallback_notification(kind: ArtifactKind, extra_sports: &[String], total: usize) -> String {
    if extra_sports.is_empty() {
        format!(
            "Added {} {} from other sports to reach your daily limit",
            total,
            kind.noun()
        )
    } else {
        format!(
            "Added {} from {} to reach your daily limit",
            kind.noun(),
            extra_sports.join(", ")
        )
    }
}
