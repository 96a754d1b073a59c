//! Sport label canonicalization.
//!
//! Upstream feeds label the same sport many ways ("Major League Baseball",
//! "MLB", "mlb"). Every comparison in the engine happens on the canonical code
//! returned here, never on a raw label.

/// Known sport codes in declaration order.
///
/// This order is the priority order for flag-based preferences and is also the
/// "no preference" catalog.
pub const SPORT_CATALOG: &[&str] = &[
    "MLB", "NBA", "WNBA", "NFL", "NHL", "NCAAF", "NCAAB", "UFC", "SOCCER",
];

/// Canonicalize a raw sport label.
///
/// Lookup is an exact, case-preserving match against the synonym table; a miss
/// falls back to the uppercased label so unknown sports get their own bucket
/// instead of being dropped.
///
/// # Examples
///
/// ```
/// use pick_allocation::sport::normalize_sport;
///
/// assert_eq!(normalize_sport("Major League Baseball"), "MLB");
/// assert_eq!(normalize_sport("mma"), "UFC");
/// assert_eq!(normalize_sport("cricket"), "CRICKET");
/// ```
pub fn normalize_sport(raw: &str) -> String {
    match synonym(raw) {
        Some(code) => code.to_string(),
        None => raw.to_uppercase(),
    }
}

/// Whether `code` is one of the catalog sports
pub fn is_known_sport(code: &str) -> bool {
    SPORT_CATALOG.contains(&code)
}

/// Position of `code` in the catalog, if known
pub fn catalog_position(code: &str) -> Option<usize> {
    SPORT_CATALOG.iter().position(|c| *c == code)
}

fn synonym(raw: &str) -> Option<&'static str> {
    let code = match raw {
        "MLB" | "mlb" | "Mlb" | "Major League Baseball" | "Baseball" | "baseball" => "MLB",
        "NBA" | "nba" | "National Basketball Association" | "Basketball" | "basketball" => "NBA",
        "WNBA" | "wnba" | "Wnba" | "Women's National Basketball Association"
        | "Womens Basketball" => "WNBA",
        "NFL" | "nfl" | "National Football League" | "Football" | "football" => "NFL",
        "NHL" | "nhl" | "National Hockey League" | "Hockey" | "hockey" => "NHL",
        "NCAAF" | "ncaaf" | "CFB" | "cfb" | "College Football" | "college football"
        | "NCAA Football" => "NCAAF",
        "NCAAB" | "ncaab" | "NCAAM" | "ncaam" | "CBB" | "cbb" | "College Basketball"
        | "college basketball" | "NCAA Basketball" => "NCAAB",
        "UFC" | "ufc" | "MMA" | "mma" | "UFC/MMA" | "ufc/mma" | "Mixed Martial Arts" => "UFC",
        "SOCCER" | "Soccer" | "soccer" | "MLS" | "mls" | "EPL" | "epl" | "Premier League" => {
            "SOCCER"
        }
        _ => return None,
    };
    Some(code)
}
