//! PokeAPI JSON parser

use draftdex_common::{BaseStats, StatKind};

use super::types::{PokemonRecord, RawPokemon};
use crate::error::LookupError;

/// Decode a `/pokemon/{name}` body into base stats.
///
/// Stats are matched by `stat.name`; entries with an unrecognised name fall
/// back to their position in the array. All six stats must be present.
pub fn parse_pokemon_json(requested: &str, json: &str) -> Result<PokemonRecord, LookupError> {
    let raw: RawPokemon = serde_json::from_str(json).map_err(|e| LookupError::Decode {
        name: requested.to_string(),
        message: e.to_string(),
    })?;

    let mut base = BaseStats::default();
    let mut seen = [false; 6];

    for (index, entry) in raw.stats.iter().enumerate() {
        let kind = StatKind::from_api_name(&entry.stat.name)
            .or_else(|| StatKind::ALL.get(index).copied());
        if let Some(kind) = kind {
            base.set(kind, entry.base_stat);
            seen[kind.index()] = true;
        }
    }

    if let Some(missing) = StatKind::ALL.iter().find(|kind| !seen[kind.index()]) {
        return Err(LookupError::Decode {
            name: requested.to_string(),
            message: format!("missing {} base stat", missing),
        });
    }

    Ok(PokemonRecord {
        name: raw.name,
        base,
    })
}
