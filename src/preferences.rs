//! Preferred sport resolution.

use crate::sport::{catalog_position, normalize_sport, SPORT_CATALOG};
use crate::types::{SportFlags, SportPreferences, UserProfile};

/// Ordered list of preferred sport codes for `profile`.
///
/// Flags are read in catalog declaration order. Label lists are normalized and
/// deduplicated; catalog sports come first in catalog order, followed by any
/// other codes in the order they were given. An empty preference means "no
/// restriction", so the whole catalog is returned.
pub fn resolve_preferred(profile: &UserProfile) -> Vec<String> {
    let preferred = match &profile.sport_preferences {
        SportPreferences::Flags(flags) => from_flags(flags),
        SportPreferences::Labels(labels) => from_labels(labels),
    };

    if preferred.is_empty() {
        SPORT_CATALOG.iter().map(|s| s.to_string()).collect()
    } else {
        preferred
    }
}

fn from_flags(flags: &SportFlags) -> Vec<String> {
    let enabled = [
        ("MLB", flags.mlb),
        ("NBA", flags.nba),
        ("WNBA", flags.wnba),
        ("NFL", flags.nfl),
        ("NHL", flags.nhl),
        ("NCAAF", flags.ncaaf),
        ("NCAAB", flags.ncaab),
        ("UFC", flags.ufc || flags.mma),
        ("SOCCER", flags.soccer),
    ];

    enabled
        .iter()
        .filter(|(_, on)| *on)
        .map(|(code, _)| code.to_string())
        .collect()
}

fn from_labels(labels: &[String]) -> Vec<String> {
    let mut codes: Vec<String> = Vec::with_capacity(labels.len());
    for label in labels {
        if label.trim().is_empty() {
            continue;
        }
        let code = normalize_sport(label);
        if !codes.contains(&code) {
            codes.push(code);
        }
    }

    // Stable sort keeps first-seen order among unknown codes
    codes.sort_by_key(|code| catalog_position(code).unwrap_or(usize::MAX));
    codes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Tier;

    #[test]
    fn test_flags_follow_declaration_order() {
        let profile = UserProfile::new(Tier::Pro).with_flags(SportFlags {
            ufc: true,
            wnba: true,
            mlb: true,
            ..SportFlags::default()
        });
        assert_eq!(resolve_preferred(&profile), vec!["MLB", "WNBA", "UFC"]);
    }

    #[test]
    fn test_mma_flag_enables_ufc_once() {
        let profile = UserProfile::new(Tier::Free).with_flags(SportFlags {
            ufc: true,
            mma: true,
            ..SportFlags::default()
        });
        assert_eq!(resolve_preferred(&profile), vec!["UFC"]);
    }

    #[test]
    fn test_no_preference_means_full_catalog() {
        let profile = UserProfile::new(Tier::Free);
        let preferred = resolve_preferred(&profile);
        assert_eq!(preferred.len(), SPORT_CATALOG.len());
        assert_eq!(preferred[0], "MLB");

        let profile = UserProfile::new(Tier::Free).with_sports(Vec::<String>::new());
        assert_eq!(resolve_preferred(&profile).len(), SPORT_CATALOG.len());

        let profile = UserProfile::new(Tier::Free).with_sports(["  "]);
        assert_eq!(resolve_preferred(&profile).len(), SPORT_CATALOG.len());
    }

    #[test]
    fn test_labels_are_normalized_and_deduplicated() {
        let profile = UserProfile::new(Tier::Pro).with_sports([
            "cricket",
            "wnba",
            "Major League Baseball",
            "MLB",
            "darts",
        ]);
        assert_eq!(
            resolve_preferred(&profile),
            vec!["MLB", "WNBA", "CRICKET", "DARTS"]
        );
    }
}
