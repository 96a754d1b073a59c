//! Candidate inventory grouped by canonical sport and allocation category.

use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

use crate::sport::normalize_sport;
use crate::types::{CandidateItem, Category, CategoryCounts};

/// Ranking used everywhere items are ordered: confidence descending, then id
/// ascending. NaN confidences rank below everything else.
pub fn rank_order(a: &CandidateItem, b: &CandidateItem) -> Ordering {
    confidence_key(b)
        .total_cmp(&confidence_key(a))
        .then_with(|| a.id.cmp(&b.id))
}

fn confidence_key(item: &CandidateItem) -> f64 {
    if item.confidence.is_nan() {
        f64::NEG_INFINITY
    } else {
        item.confidence
    }
}

#[derive(Debug, Clone, Default)]
struct SportBucket {
    team: Vec<CandidateItem>,
    prop: Vec<CandidateItem>,
}

impl SportBucket {
    fn items(&self, category: Category) -> &[CandidateItem] {
        match category {
            Category::Prop => &self.prop,
            _ => &self.team,
        }
    }
}

/// Ranked candidates per sport and category.
///
/// Built once per call. Sport iteration order is ascending by code, which is
/// the stable order used for non-preferred sports during allocation.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    buckets: BTreeMap<String, SportBucket>,
}

impl Inventory {
    /// Index `(category, item)` pairs.
    ///
    /// Sports are normalized here, so every item leaving the inventory carries
    /// its canonical code. `Generic` is allocated as team. When the same id
    /// shows up more than once only its highest-ranked occurrence is kept.
    pub fn index<I>(items: I) -> Self
    where
        I: IntoIterator<Item = (Category, CandidateItem)>,
    {
        let mut all: Vec<(Category, CandidateItem)> = items
            .into_iter()
            .map(|(category, mut item)| {
                item.sport = normalize_sport(&item.sport);
                (category, item)
            })
            .collect();
        all.sort_by(|a, b| rank_order(&a.1, &b.1));

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut dropped = 0usize;
        let mut buckets: BTreeMap<String, SportBucket> = BTreeMap::new();

        for (category, item) in all {
            if !seen.insert(item.id.clone()) {
                dropped += 1;
                continue;
            }
            let bucket = buckets.entry(item.sport.clone()).or_default();
            match category {
                Category::Prop => bucket.prop.push(item),
                Category::Team | Category::Generic => bucket.team.push(item),
            }
        }

        if dropped > 0 {
            debug!(dropped, "Collapsed duplicate candidate ids");
        }

        Self { buckets }
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Sports with at least one candidate, ascending by code
    pub fn sports(&self) -> impl Iterator<Item = &str> {
        self.buckets.keys().map(String::as_str)
    }

    pub fn contains_sport(&self, sport: &str) -> bool {
        self.buckets.contains_key(sport)
    }

    pub fn available_count(&self, sport: &str, category: Category) -> usize {
        self.buckets
            .get(sport)
            .map(|b| b.items(category).len())
            .unwrap_or(0)
    }

    pub fn available(&self, sport: &str) -> CategoryCounts {
        CategoryCounts::new(
            self.available_count(sport, Category::Team),
            self.available_count(sport, Category::Prop),
        )
    }

    pub fn available_total(&self, sport: &str) -> usize {
        self.available(sport).total()
    }

    /// Highest-ranked `n` items (or fewer) for a sport and category
    pub fn top(&self, sport: &str, category: Category, n: usize) -> &[CandidateItem] {
        match self.buckets.get(sport) {
            Some(bucket) => {
                let items = bucket.items(category);
                &items[..n.min(items.len())]
            }
            None => &[],
        }
    }

    pub fn total_items(&self) -> usize {
        self.buckets
            .values()
            .map(|b| b.team.len() + b.prop.len())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, sport: &str, confidence: f64) -> CandidateItem {
        CandidateItem::new(id, sport, confidence)
    }

    #[test]
    fn test_groups_by_canonical_sport() {
        let inv = Inventory::index(vec![
            (Category::Team, item("a", "mlb", 0.5)),
            (Category::Team, item("b", "Major League Baseball", 0.6)),
            (Category::Prop, item("c", "MLB", 0.7)),
            (Category::Team, item("d", "cricket", 0.4)),
        ]);

        assert_eq!(inv.sports().collect::<Vec<_>>(), vec!["CRICKET", "MLB"]);
        assert_eq!(inv.available("MLB"), CategoryCounts::new(2, 1));
        assert_eq!(inv.available_total("CRICKET"), 1);
        assert!(inv.top("MLB", Category::Team, 5).iter().all(|i| i.sport == "MLB"));
        assert_eq!(inv.total_items(), 4);
    }

    #[test]
    fn test_sorted_by_confidence_then_id() {
        let inv = Inventory::index(vec![
            (Category::Team, item("z", "NBA", 80.0)),
            (Category::Team, item("b", "NBA", 90.0)),
            (Category::Team, item("a", "NBA", 80.0)),
            (Category::Team, item("n", "NBA", f64::NAN)),
        ]);

        let ids: Vec<&str> = inv
            .top("NBA", Category::Team, 10)
            .iter()
            .map(|i| i.id.as_str())
            .collect();
        assert_eq!(ids, vec!["b", "a", "z", "n"]);
    }

    #[test]
    fn test_duplicate_ids_keep_best_occurrence() {
        let inv = Inventory::index(vec![
            (Category::Team, item("dup", "NFL", 0.4)),
            (Category::Prop, item("dup", "NFL", 0.9)),
            (Category::Team, item("solo", "NFL", 0.5)),
        ]);

        assert_eq!(inv.available("NFL"), CategoryCounts::new(1, 1));
        assert_eq!(inv.top("NFL", Category::Prop, 1)[0].id, "dup");
        assert_eq!(inv.top("NFL", Category::Team, 1)[0].id, "solo");
    }

    #[test]
    fn test_generic_is_indexed_as_team() {
        let inv = Inventory::index(vec![(Category::Generic, item("g", "NHL", 0.3))]);
        assert_eq!(inv.available_count("NHL", Category::Team), 1);
        assert_eq!(inv.available_count("NHL", Category::Prop), 0);
    }

    #[test]
    fn test_top_clamps_and_handles_missing_sport() {
        let inv = Inventory::index(vec![(Category::Team, item("a", "MLB", 0.3))]);
        assert_eq!(inv.top("MLB", Category::Team, 10).len(), 1);
        assert!(inv.top("MLB", Category::Prop, 10).is_empty());
        assert!(inv.top("WNBA", Category::Team, 10).is_empty());
        assert!(Inventory::index(Vec::new()).is_empty());
    }
}
