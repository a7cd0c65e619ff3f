//! Roster entries and the cross-team comparison

use draftdex_common::{BaseStats, CalculatedStats, Side};

use super::names::prettify_name;
use crate::error::LookupError;
use crate::module::pokeapi::PokemonRecord;

/// A Pokémon found on PokeAPI, with its level-100 stats worked out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub slug: String,
    pub pretty_name: String,
    pub side: Side,
    pub base: BaseStats,
    pub stats: CalculatedStats,
}

impl Pokemon {
    pub fn from_record(record: PokemonRecord, side: Side) -> Self {
        let stats = CalculatedStats::from_base(&record.base, record.name == "shedinja");
        Self {
            pretty_name: prettify_name(&record.name),
            slug: record.name,
            side,
            base: record.base,
            stats,
        }
    }

    /// Value the comparison table is ordered by
    pub fn sort_key(&self) -> u32 {
        self.stats.speed
    }
}

/// Outcome of looking up one typed name
#[derive(Debug)]
pub enum Lookup {
    Found(Pokemon),
    Invalid {
        name: String,
        side: Side,
        error: LookupError,
    },
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

/// Every found Pokémon from both teams, fastest first.
///
/// The sort is stable: equal speeds keep "my team first, then the
/// opponent's, each in typed order".
pub fn compare_teams(mine: &[Lookup], opponent: &[Lookup]) -> Vec<Pokemon> {
    let mut every_pokemon: Vec<Pokemon> = mine
        .iter()
        .chain(opponent.iter())
        .filter_map(|lookup| match lookup {
            Lookup::Found(pokemon) => Some(pokemon.clone()),
            Lookup::Invalid { .. } => None,
        })
        .collect();

    every_pokemon.sort_by(|a, b| b.sort_key().cmp(&a.sort_key()));
    every_pokemon
}

#[cfg(test)]
mod tests {
    use super::*;

    fn found(name: &str, speed: u32, side: Side) -> Lookup {
        let base = BaseStats {
            hp: 80,
            attack: 80,
            defense: 80,
            sp_attack: 80,
            sp_defense: 80,
            speed,
        };
        Lookup::Found(Pokemon::from_record(
            PokemonRecord {
                name: name.to_string(),
                base,
            },
            side,
        ))
    }

    fn names(list: &[Pokemon]) -> Vec<&str> {
        list.iter().map(|p| p.slug.as_str()).collect()
    }

    #[test]
    fn test_sorted_fastest_first() {
        let mine = vec![found("slowbro", 30, Side::Mine), found("garchomp", 102, Side::Mine)];
        let opponent = vec![found("dragapult", 142, Side::Opponent)];
        let sorted = compare_teams(&mine, &opponent);
        assert_eq!(names(&sorted), vec!["dragapult", "garchomp", "slowbro"]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mine = vec![found("a", 100, Side::Mine), found("b", 100, Side::Mine)];
        let opponent = vec![found("c", 100, Side::Opponent), found("d", 120, Side::Opponent)];
        let sorted = compare_teams(&mine, &opponent);
        assert_eq!(names(&sorted), vec!["d", "a", "b", "c"]);
    }

    #[test]
    fn test_invalid_entries_dropped() {
        let mine = vec![
            found("garchomp", 102, Side::Mine),
            Lookup::Invalid {
                name: "landorus".to_string(),
                side: Side::Mine,
                error: LookupError::NotFound {
                    name: "landorus".to_string(),
                    status: 404,
                },
            },
        ];
        let sorted = compare_teams(&mine, &[]);
        assert_eq!(sorted.len(), 1);
        assert!(!mine[1].is_found());
    }

    #[test]
    fn test_shedinja_keeps_one_hp() {
        let Lookup::Found(pokemon) = found("shedinja", 40, Side::Opponent) else {
            panic!("expected a found lookup");
        };
        assert_eq!(pokemon.stats.hp, 1);
        assert_eq!(pokemon.pretty_name, "Shedinja");
    }
}
