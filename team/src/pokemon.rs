//! Catalog records

use pokebattle_protocol::{RosterPokemon, Type};
use serde::{Deserialize, Serialize};

/// A pokedex entry as served by a [`PokemonService`](crate::PokemonService)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRecord {
    pub pokedex_id: u16,
    pub name: String,
    pub img: String,
    pub types: Vec<Type>,

    /// Display height, e.g. `"0.71 m"`
    pub height: String,

    /// Display weight, e.g. `"6.9 kg"`
    pub weight: String,

    #[serde(default)]
    pub multipliers: Vec<f64>,

    #[serde(default)]
    pub weaknesses: Vec<Type>,
}

impl PokemonRecord {
    /// Check if any of the record's type names contains `pattern`, ignoring case
    pub fn matches_type(&self, pattern: &str) -> bool {
        let pattern = pattern.to_lowercase();
        self.types
            .iter()
            .any(|t| t.as_str().to_lowercase().contains(&pattern))
    }

    /// Roster entry for this record
    pub fn to_roster_pokemon(&self) -> RosterPokemon {
        RosterPokemon::new(self.pokedex_id, self.types.clone())
            .with_name(self.name.clone())
            .with_weaknesses(self.weaknesses.clone())
            .with_multipliers(self.multipliers.clone())
    }
}
