//! Team vs. prop classification for candidates without a usable category.
//!
//! An explicit `team`/`prop` category always wins. Otherwise the title is
//! normalized (lowercase, punctuation stripped, whitespace collapsed) and
//! checked for player-stat keywords; any hit makes it a prop.

use crate::types::{CandidateItem, Category};

/// Whole-word or whole-phrase markers of a player prop
const PROP_KEYWORDS: &[&str] = &[
    "batter",
    "pitcher",
    "hits",
    "rbis",
    "strikeouts",
    "home runs",
    "total bases",
    "rebounds",
    "assists",
    "takedowns",
    "significant strikes",
    "player",
];

/// Allocation category for a single item (`Team` or `Prop`, never `Generic`)
pub fn category_of(item: &CandidateItem) -> Category {
    match item.category {
        Some(Category::Team) => Category::Team,
        Some(Category::Prop) => Category::Prop,
        Some(Category::Generic) | None => {
            if looks_like_prop(&item.title) {
                Category::Prop
            } else {
                Category::Team
            }
        }
    }
}

/// Items from `items` that belong to `category`.
///
/// Asking for `Generic` is treated as asking for team items, since every
/// item resolves to either team or prop.
pub fn classify_by_category(items: &[CandidateItem], category: Category) -> Vec<CandidateItem> {
    let wanted = match category {
        Category::Prop => Category::Prop,
        _ => Category::Team,
    };
    items
        .iter()
        .filter(|item| category_of(item) == wanted)
        .cloned()
        .collect()
}

fn looks_like_prop(title: &str) -> bool {
    let normalized = normalize_text(title);
    if normalized.is_empty() {
        return false;
    }
    let padded = format!(" {} ", normalized);
    PROP_KEYWORDS
        .iter()
        .any(|kw| padded.contains(&format!(" {} ", kw)))
}

fn normalize_text(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titled(id: &str, title: &str) -> CandidateItem {
        CandidateItem::new(id, "MLB", 0.5).with_title(title)
    }

    #[test]
    fn test_explicit_category_wins() {
        let item = titled("a", "Aaron Judge over 1.5 hits").with_category(Category::Team);
        assert_eq!(category_of(&item), Category::Team);

        let item = titled("b", "Yankees moneyline").with_category(Category::Prop);
        assert_eq!(category_of(&item), Category::Prop);
    }

    #[test]
    fn test_keyword_heuristic() {
        assert_eq!(category_of(&titled("a", "Aaron Judge Over 1.5 Hits")), Category::Prop);
        assert_eq!(category_of(&titled("b", "Cole: 7+ strikeouts")), Category::Prop);
        assert_eq!(category_of(&titled("c", "Starting pitcher outs")), Category::Prop);
        assert_eq!(category_of(&titled("d", "Over 2.5 home runs")), Category::Prop);
        assert_eq!(category_of(&titled("e", "Yankees -1.5")), Category::Team);
        assert_eq!(category_of(&titled("f", "")), Category::Team);
    }

    #[test]
    fn test_keywords_match_whole_words_only() {
        // "whits" and "batters-box" must not trip "hits"/"batter"
        assert_eq!(category_of(&titled("a", "Whits Cove total")), Category::Team);
        assert_eq!(category_of(&titled("b", "Batters box special")), Category::Team);
    }

    #[test]
    fn test_generic_category_uses_heuristic() {
        let item = titled("a", "Judge RBIs over 0.5").with_category(Category::Generic);
        assert_eq!(category_of(&item), Category::Prop);
    }

    #[test]
    fn test_classify_partitions_items() {
        let items = vec![
            titled("a", "Red Sox moneyline"),
            titled("b", "Devers total bases over 1.5"),
            titled("c", "Game total over 8.5").with_category(Category::Team),
        ];

        let team: Vec<String> = classify_by_category(&items, Category::Team)
            .into_iter()
            .map(|i| i.id)
            .collect();
        let prop: Vec<String> = classify_by_category(&items, Category::Prop)
            .into_iter()
            .map(|i| i.id)
            .collect();

        assert_eq!(team, vec!["a", "c"]);
        assert_eq!(prop, vec!["b"]);
        assert_eq!(classify_by_category(&items, Category::Generic).len(), 2);
    }
}
