//! PokeAPI lookup module
//!
//! One GET per Pokémon against `/pokemon/{slug}`, decoded into base stats.
//! Nothing is cached; every run asks the API again.

pub mod types;
pub mod parser;
pub mod api_client;

pub use api_client::{PokeApiClient, PokemonSource};
pub use parser::parse_pokemon_json;
pub use types::PokemonRecord;
