//! Pokemon catalog and team building.
//!
//! A [`PokemonService`] resolves pokedex ids into full [`PokemonRecord`]s.
//! [`build_roster`] turns those records into the roster input a battle
//! accepts. [`InMemoryPokemonService`] serves a bundled Gen 1 pokedex.

mod in_memory;
mod pokemon;
mod service;
mod team;

pub use in_memory::InMemoryPokemonService;
pub use pokemon::PokemonRecord;
pub use service::{CatalogError, PokemonFilter, PokemonService};
pub use team::{PokemonRef, TeamRequest, build_roster};
