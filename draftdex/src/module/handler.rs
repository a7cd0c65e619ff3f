//! Runs one comparison: parse both teams, look every name up, sort, render.

use draftdex_common::Side;

use super::pokeapi::PokemonSource;
use super::renderer::TableRenderer;
use super::roster::{compare_teams, parse_team, Lookup, Pokemon};

/// Everything one run produced
#[derive(Debug)]
pub struct Report {
    pub mine: Vec<Lookup>,
    pub opponent: Vec<Lookup>,
    /// Found Pokémon from both teams, fastest first
    pub sorted: Vec<Pokemon>,
    /// One message per name that could not be used, in lookup order
    pub messages: Vec<String>,
    /// Note and table, or the "nothing valid" error
    pub output: String,
}

pub struct CompareHandler<S: PokemonSource> {
    source: S,
    renderer: TableRenderer,
}

impl<S: PokemonSource> CompareHandler<S> {
    pub fn new(source: S, renderer: TableRenderer) -> Self {
        Self { source, renderer }
    }

    /// Look names up one at a time, in order. Failures become
    /// `Lookup::Invalid` and never stop the rest of the team.
    pub async fn lookup_team(&self, names: &[String], side: Side) -> Vec<Lookup> {
        let mut lookups = Vec::with_capacity(names.len());

        for name in names {
            let lookup = match self.source.fetch_pokemon(name).await {
                Ok(record) => Lookup::Found(Pokemon::from_record(record, side)),
                Err(error) => {
                    tracing::warn!("Skipping '{}' on {} team: {}", name, side.as_str(), error);
                    Lookup::Invalid {
                        name: name.clone(),
                        side,
                        error,
                    }
                }
            };
            lookups.push(lookup);
        }

        lookups
    }

    pub async fn run(&self, mine_input: &str, opponent_input: &str) -> Report {
        let mine_names = parse_team(mine_input);
        let opponent_names = parse_team(opponent_input);
        tracing::info!(
            "Comparing {} vs {} entries",
            mine_names.len(),
            opponent_names.len()
        );

        let mine = self.lookup_team(&mine_names, Side::Mine).await;
        let opponent = self.lookup_team(&opponent_names, Side::Opponent).await;

        let messages: Vec<String> = mine
            .iter()
            .chain(opponent.iter())
            .filter_map(|lookup| self.renderer.render_invalid(lookup))
            .collect();

        let sorted = compare_teams(&mine, &opponent);
        let output = self.renderer.render_report(&sorted);
        tracing::info!("Rendered {} Pokémon", sorted.len());

        Report {
            mine,
            opponent,
            sorted,
            messages,
            output,
        }
    }
}
