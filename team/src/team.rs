//! Team requests and roster building

use pokebattle_protocol::{Roster, Trainer};
use serde::{Deserialize, Serialize};

use crate::PokemonRecord;

/// A pokemon picked by pokedex id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonRef {
    pub pokedex_id: u16,
}

/// A trainer's pick of pokemons, before the catalog fills in their details
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRequest {
    #[serde(alias = "trainerId")]
    pub trainer_name: String,

    pub pokemons: Vec<PokemonRef>,
}

impl TeamRequest {
    pub fn new(trainer_name: impl Into<String>, pokedex_ids: &[u16]) -> Self {
        Self {
            trainer_name: trainer_name.into(),
            pokemons: pokedex_ids
                .iter()
                .map(|id| PokemonRef { pokedex_id: *id })
                .collect(),
        }
    }

    /// Requested ids in pick order
    pub fn pokedex_ids(&self) -> Vec<u16> {
        self.pokemons.iter().map(|p| p.pokedex_id).collect()
    }
}

/// Roster for `trainer_name` made of `records` in order.
///
/// The result is not validated; the battle does that on registration.
pub fn build_roster(trainer_name: &str, records: &[PokemonRecord]) -> Roster {
    Roster::new(
        Trainer::new(trainer_name),
        records.iter().map(PokemonRecord::to_roster_pokemon).collect(),
    )
}
