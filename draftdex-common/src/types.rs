//! Roster side types

use serde::{Deserialize, Serialize};

/// Which roster a Pokémon was entered on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Mine,
    Opponent,
}

impl Side {
    pub fn as_str(&self) -> &str {
        match self {
            Side::Mine => "mine",
            Side::Opponent => "opponent",
        }
    }

    /// Wording used in prompts
    pub fn team_label(&self) -> &'static str {
        match self {
            Side::Mine => "your team",
            Side::Opponent => "your opponent's team",
        }
    }
}
