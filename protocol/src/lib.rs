//! Roster input types and validation for turn-based pokemon battles.
//!
//! This crate is the boundary between untyped input (JSON submitted by a
//! caller) and the typed battle engine in `pokebattle-battle`:
//!
//! ```text
//! raw JSON roster
//!        │
//!        ▼
//! pokebattle-protocol (validate_roster → Roster) ← THIS CRATE
//!        │
//!        ▼
//! pokebattle-battle (state machine, event log)
//! ```

use thiserror::Error;

mod pokemon_type;
mod roster;
mod side;
mod validation;

pub use pokemon_type::Type;
pub use roster::{
    MAX_MULTIPLIER, MAX_POKEDEX_ID, MIN_POKEDEX_ID, Roster, RosterPokemon, TEAM_SIZE, Trainer,
};
pub use side::Side;
pub use validation::validate_roster;

/// Why a roster candidate was rejected.
///
/// Messages are stable; callers and tests may match on them verbatim.
/// `index` fields point at the first offending pokemon.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Team must be a object")]
    TeamNotObject,

    #[error("Trainer must be a object")]
    TrainerNotObject,

    #[error("Trainer name must be a non empty string")]
    TrainerNameEmpty,

    #[error("Team pokemons must be an array")]
    PokemonsNotArray,

    #[error("Each team must have three pokemons")]
    TeamSize { found: usize },

    #[error("Each team pokemon must be a object")]
    PokemonNotObject { index: usize },

    #[error("Each team pokemon pokedexId must be a number from 1 to 151")]
    PokedexIdOutOfRange { index: usize },

    #[error("Pokemon types field must be an array")]
    TypesNotArray { index: usize },

    #[error("Pokemon types field must have at least one type")]
    TypesEmpty { index: usize },

    #[error("Pokemon types field must only include the following types: {types}", types = Type::names())]
    InvalidType { index: usize, value: String },

    #[error("Optional Pokemon field weaknesses must be an array if defined")]
    WeaknessesNotArray { index: usize },

    #[error("Pokemon weaknesses if defined must only include any of the following types: {types}", types = Type::names())]
    InvalidWeakness { index: usize, value: String },

    #[error("Optional Pokemon field multipliers field must be an array if defined")]
    MultipliersNotArray { index: usize },

    #[error("If Pokemon multipliers is defined it must only include numbers between 0.001 and 12.000")]
    InvalidMultiplier { index: usize, value: String },
}
