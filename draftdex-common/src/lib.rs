//! Shared data model for draftdex: stat kinds, the level-100 stat formula,
//! and the roster side a Pokémon was entered on.

pub mod stats;
pub mod types;

pub use stats::{BaseStats, CalculatedStats, StatKind};
pub use types::Side;
