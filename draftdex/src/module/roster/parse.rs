//! Team input parsing

use super::names::slug_for_alias;

/// Turn one typed name into a PokeAPI slug:
/// trim, lowercase, map display aliases ("Mr. Mime") back to their slug,
/// and join the remaining words with hyphens ("Roaring Moon" -> "roaring-moon").
pub fn normalize_name(raw: &str) -> String {
    let collapsed = raw
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    if let Some(slug) = slug_for_alias(&collapsed) {
        return slug.to_string();
    }

    collapsed.replace(' ', "-")
}

/// Split a comma-separated team into slugs, in input order.
///
/// Duplicates keep their first position. An empty entry ("" or a stray
/// comma) is kept once so the caller can report that nothing was entered.
pub fn parse_team(input: &str) -> Vec<String> {
    let mut team: Vec<String> = Vec::new();
    for slug in input.split(',').map(normalize_name) {
        if !team.contains(&slug) {
            team.push(slug);
        }
    }
    team
}
