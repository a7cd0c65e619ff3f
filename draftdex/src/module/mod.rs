pub mod handler;
pub mod pokeapi;
pub mod renderer;
pub mod roster;
