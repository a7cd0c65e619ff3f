//! Roster module
//!
//! Parses typed team lists, prettifies PokeAPI slugs, and merges both
//! teams into one list ordered by Speed.

pub mod names;
pub mod parse;
pub mod compare;

pub use compare::{compare_teams, Lookup, Pokemon};
pub use names::{needs_form_suffix, prettify_name, suggest_names};
pub use parse::{normalize_name, parse_team};
