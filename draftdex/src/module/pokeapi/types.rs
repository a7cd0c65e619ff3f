//! PokeAPI response types
//!
//! Only the fields the comparison table needs are modelled; serde skips
//! the rest of the (very large) `/pokemon/{name}` document.

use draftdex_common::BaseStats;
use serde::{Deserialize, Serialize};

/// Raw `/pokemon/{name}` response
#[derive(Debug, Deserialize)]
pub(super) struct RawPokemon {
    pub name: String,
    pub stats: Vec<RawStat>,
}

/// One entry of the `stats` array
#[derive(Debug, Deserialize)]
pub(super) struct RawStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Deserialize)]
pub(super) struct NamedResource {
    pub name: String,
}

/// A decoded Pokémon: its API slug and base stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRecord {
    /// Slug as PokeAPI spells it, e.g. "landorus-therian"
    pub name: String,
    pub base: BaseStats,
}
