//! Name tables - turns PokeAPI slugs into display names and back
//!
//! PokeAPI spells every Pokémon as a lowercase, hyphenated slug
//! ("landorus-therian", "roaring-moon", "mr-mime"). The table shows the
//! names the games use ("Landorus-Therian", "Roaring Moon", "Mr. Mime").

use strsim::jaro_winkler;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion
pub const SUGGESTION_THRESHOLD: f64 = 0.85;
const MAX_SUGGESTIONS: usize = 3;

/// Names with punctuation the slug cannot carry
const SPECIAL_NAMES: &[(&str, &str)] = &[
    ("mime-jr", "Mime Jr."),
    ("mr-mime", "Mr. Mime"),
    ("farfetchd", "Farfetch'd"),
    ("sirfetchd", "Sirfetch'd"),
    ("flabebe", "Flabébé"),
    ("type-null", "Type: Null"),
    ("mr-rime", "Mr. Rime"),
];

/// Species whose own name contains a hyphen
const HYPHENATED_SPECIES: &[&str] = &[
    "ho-oh",
    "porygon-z",
    "jangmo-o",
    "hakamo-o",
    "kommo-o",
    "wo-chien",
    "chi-yu",
    "chien-pao",
    "ting-lu",
];

/// Species that only exist on PokeAPI with a form suffix, or whose forms
/// are written "Species-Form"
const ALTERNATE_FORMS: &[&str] = &[
    "tauros", "castform", "kyogre", "groudon", "deoxys", "burmy", "wormadam", "cherrim",
    "rotom", "dialga", "palkia", "giratina", "shaymin", "basculin", "darmanitan", "tornadus",
    "thundurus", "landorus", "enamorus", "kyurem", "meloetta", "greninja", "aegislash",
    "pumpkaboo", "gourgeist", "zygarde", "hoopa", "lycanroc", "wishiwashi", "minior",
    "necrozma", "toxtricity", "eiscue", "zacian", "zamazenta", "eternatus", "urshifu",
    "calyrex", "palafin", "gimmighoul",
];

/// Mega evolutions and regional variants, written "Species-Tag"
const REGION_TAGS: &[&str] = &["mega", "alola", "galar", "hisui", "paldea"];

fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Display name for a slug, e.g. "landorus-therian" -> "Landorus-Therian",
/// "roaring-moon" -> "Roaring Moon", "type-null" -> "Type: Null".
pub fn prettify_name(slug: &str) -> String {
    if let Some((_, pretty)) = SPECIAL_NAMES.iter().find(|(s, _)| *s == slug) {
        return pretty.to_string();
    }

    if !slug.contains('-') {
        return capitalize(slug);
    }

    let keeps_hyphen = HYPHENATED_SPECIES.contains(&slug)
        || ALTERNATE_FORMS.iter().any(|form| slug.contains(form))
        || REGION_TAGS.iter().any(|tag| slug.contains(tag));
    let separator = if keeps_hyphen { "-" } else { " " };

    slug.split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(separator)
}

/// Reverse of the special-name table: "Mr. Mime" / "mr.mime" -> "mr-mime".
///
/// `input` is expected lowercased, trimmed, with whitespace collapsed to
/// single spaces.
pub fn slug_for_alias(input: &str) -> Option<&'static str> {
    let input = input.replace('\u{2019}', "'");
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    SPECIAL_NAMES.iter().find_map(|(slug, pretty)| {
        let pretty = pretty.to_lowercase();
        let pretty_compact: String = pretty.chars().filter(|c| !c.is_whitespace()).collect();
        (input == pretty || compact == pretty_compact).then_some(*slug)
    })
}

/// True for a bare species name that PokeAPI only knows with a form
/// suffix, e.g. "landorus" (must be "landorus-incarnate" or "landorus-therian")
pub fn needs_form_suffix(slug: &str) -> bool {
    ALTERNATE_FORMS.contains(&slug)
}

/// Known slugs close to `slug`, best match first.
///
/// Only the local tables are searched, so this never costs a request.
pub fn suggest_names(slug: &str) -> Vec<String> {
    if slug.is_empty() || needs_form_suffix(slug) {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &str)> = SPECIAL_NAMES
        .iter()
        .map(|(s, _)| *s)
        .chain(HYPHENATED_SPECIES.iter().copied())
        .filter(|candidate| *candidate != slug)
        .map(|candidate| (jaro_winkler(slug, candidate), candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_names() {
        assert_eq!(prettify_name("mr-mime"), "Mr. Mime");
        assert_eq!(prettify_name("type-null"), "Type: Null");
        assert_eq!(prettify_name("flabebe"), "Flabébé");
        assert_eq!(prettify_name("farfetchd"), "Farfetch'd");
    }

    #[test]
    fn test_single_part() {
        assert_eq!(prettify_name("garchomp"), "Garchomp");
        assert_eq!(prettify_name(""), "");
    }

    #[test]
    fn test_hyphen_kept() {
        assert_eq!(prettify_name("ho-oh"), "Ho-Oh");
        assert_eq!(prettify_name("landorus-therian"), "Landorus-Therian");
        assert_eq!(prettify_name("kyurem-black"), "Kyurem-Black");
        assert_eq!(prettify_name("urshifu-rapid-strike"), "Urshifu-Rapid-Strike");
        assert_eq!(prettify_name("charizard-mega-x"), "Charizard-Mega-X");
        assert_eq!(prettify_name("weezing-galar"), "Weezing-Galar");
    }

    #[test]
    fn test_hyphen_becomes_space() {
        assert_eq!(prettify_name("roaring-moon"), "Roaring Moon");
        assert_eq!(prettify_name("iron-valiant"), "Iron Valiant");
        assert_eq!(prettify_name("tapu-koko"), "Tapu Koko");
    }

    #[test]
    fn test_slug_for_alias() {
        assert_eq!(slug_for_alias("mr. mime"), Some("mr-mime"));
        assert_eq!(slug_for_alias("mr.mime"), Some("mr-mime"));
        assert_eq!(slug_for_alias("farfetch\u{2019}d"), Some("farfetchd"));
        assert_eq!(slug_for_alias("type: null"), Some("type-null"));
        assert_eq!(slug_for_alias("flabébé"), Some("flabebe"));
        assert_eq!(slug_for_alias("garchomp"), None);
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggest_names("farfetched").first().map(String::as_str), Some("farfetchd"));
        assert!(suggest_names("ho-ho").contains(&"ho-oh".to_string()));
        assert!(suggest_names("landorus").is_empty());
        assert!(suggest_names("zzzzzz").is_empty());
        assert!(suggest_names("mr-mime").iter().all(|s| s != "mr-mime"));
    }
}
