//! Stat model - base stats as reported by PokeAPI and the real values
//! a fully invested Pokémon reaches at level 100.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Level every Pokémon is evaluated at
pub const LEVEL: u32 = 100;
/// Individual value, maxed
pub const IV: u32 = 31;
/// Effort value, maxed
pub const EV: u32 = 252;
/// Positive nature multiplier (1.1) as an exact ratio
pub const NATURE_NUMERATOR: u32 = 11;
pub const NATURE_DENOMINATOR: u32 = 10;

/// The six stats, in the order PokeAPI lists them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpAttack,
    SpDefense,
    Speed,
}

impl StatKind {
    pub const ALL: [StatKind; 6] = [
        StatKind::Hp,
        StatKind::Attack,
        StatKind::Defense,
        StatKind::SpAttack,
        StatKind::SpDefense,
        StatKind::Speed,
    ];

    /// Position in PokeAPI's `stats` array
    pub fn index(&self) -> usize {
        match self {
            StatKind::Hp => 0,
            StatKind::Attack => 1,
            StatKind::Defense => 2,
            StatKind::SpAttack => 3,
            StatKind::SpDefense => 4,
            StatKind::Speed => 5,
        }
    }

    /// Column label used in the comparison table
    pub fn label(&self) -> &'static str {
        match self {
            StatKind::Hp => "HP",
            StatKind::Attack => "Attack",
            StatKind::Defense => "Defense",
            StatKind::SpAttack => "Sp. Attack",
            StatKind::SpDefense => "Sp. Defense",
            StatKind::Speed => "Speed",
        }
    }

    /// Parse PokeAPI's `stat.name` field
    pub fn from_api_name(name: &str) -> Option<Self> {
        match name {
            "hp" => Some(StatKind::Hp),
            "attack" => Some(StatKind::Attack),
            "defense" => Some(StatKind::Defense),
            "special-attack" => Some(StatKind::SpAttack),
            "special-defense" => Some(StatKind::SpDefense),
            "speed" => Some(StatKind::Speed),
            _ => None,
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Base stats straight from the API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpAttack => self.sp_attack,
            StatKind::SpDefense => self.sp_defense,
            StatKind::Speed => self.speed,
        }
    }

    pub fn set(&mut self, kind: StatKind, value: u32) {
        match kind {
            StatKind::Hp => self.hp = value,
            StatKind::Attack => self.attack = value,
            StatKind::Defense => self.defense = value,
            StatKind::SpAttack => self.sp_attack = value,
            StatKind::SpDefense => self.sp_defense = value,
            StatKind::Speed => self.speed = value,
        }
    }
}

/// Real stats at level 100 with max IVs, max EVs and a boosting nature.
///
/// No single Pokémon can have all of these at once: EVs and natures only
/// cover two stats each. The table shows the ceiling of every stat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatedStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub sp_attack: u32,
    pub sp_defense: u32,
    pub speed: u32,
    /// Speed while holding a Choice Scarf
    pub scarfed_speed: u32,
}

impl CalculatedStats {
    pub fn from_base(base: &BaseStats, is_shedinja: bool) -> Self {
        let speed = calculate_stat(base.speed);
        Self {
            hp: calculate_hp(base.hp, is_shedinja),
            attack: calculate_stat(base.attack),
            defense: calculate_stat(base.defense),
            sp_attack: calculate_stat(base.sp_attack),
            sp_defense: calculate_stat(base.sp_defense),
            speed,
            scarfed_speed: calculate_scarf(speed),
        }
    }

    pub fn get(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpAttack => self.sp_attack,
            StatKind::SpDefense => self.sp_defense,
            StatKind::Speed => self.speed,
        }
    }
}

/// Shared `(2 * base + IV + EV / 4) * LEVEL / 100` term
fn scaled(base: u32) -> u32 {
    (2 * base + IV + EV / 4) * LEVEL / 100
}

/// HP at level 100. Shedinja always has exactly 1 HP.
pub fn calculate_hp(base: u32, is_shedinja: bool) -> u32 {
    if is_shedinja {
        return 1;
    }
    scaled(base) + LEVEL + 10
}

/// Any non-HP stat at level 100 with a boosting nature
pub fn calculate_stat(base: u32) -> u32 {
    (scaled(base) + 5) * NATURE_NUMERATOR / NATURE_DENOMINATOR
}

/// Speed with a Choice Scarf (x1.5, floored)
pub fn calculate_scarf(speed: u32) -> u32 {
    speed * 3 / 2
}
