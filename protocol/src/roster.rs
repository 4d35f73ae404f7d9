//! Roster types
//!
//! A roster is what a trainer submits to join a battle: the trainer and
//! exactly [`TEAM_SIZE`] pokemon. Raw input arrives as JSON and only becomes
//! a [`Roster`] after passing [`validate_roster`](crate::validate_roster).

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::pokemon_type::Type;

/// Number of pokemon every roster must field
pub const TEAM_SIZE: usize = 3;

/// Lowest accepted pokedex number
pub const MIN_POKEDEX_ID: u16 = 1;

/// Highest accepted pokedex number (first generation only)
pub const MAX_POKEDEX_ID: u16 = 151;

/// Largest accepted damage multiplier (exclusive lower bound is zero)
pub const MAX_MULTIPLIER: f64 = 12.0;

/// A trainer commanding one side
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Trainer {
    pub name: String,
}

impl Trainer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// One pokemon entry of a roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterPokemon {
    pub pokedex_id: u16,

    /// Display name, if the roster provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    pub types: Vec<Type>,

    #[serde(default)]
    pub weaknesses: Vec<Type>,

    #[serde(default)]
    pub multipliers: Vec<f64>,
}

impl RosterPokemon {
    /// Create an entry with the given types and no weaknesses or multipliers
    pub fn new(pokedex_id: u16, types: Vec<Type>) -> Self {
        Self {
            pokedex_id,
            name: None,
            types,
            weaknesses: Vec::new(),
            multipliers: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_weaknesses(mut self, weaknesses: Vec<Type>) -> Self {
        self.weaknesses = weaknesses;
        self
    }

    pub fn with_multipliers(mut self, multipliers: Vec<f64>) -> Self {
        self.multipliers = multipliers;
        self
    }

    /// Name to show in battle: the given name, or the zero-padded pokedex number
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("#{:03}", self.pokedex_id),
        }
    }

    /// Convert back into the JSON shape accepted by validation
    pub fn to_value(&self) -> Value {
        let mut value = json!({
            "pokedexId": self.pokedex_id,
            "types": self.types.iter().map(Type::as_str).collect::<Vec<_>>(),
            "weaknesses": self.weaknesses.iter().map(Type::as_str).collect::<Vec<_>>(),
            "multipliers": self.multipliers,
        });
        if let (Some(name), Some(map)) = (&self.name, value.as_object_mut()) {
            map.insert("name".to_string(), Value::String(name.clone()));
        }
        value
    }
}

/// A validated team: a trainer and exactly three pokemon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    pub trainer: Trainer,
    pub pokemons: Vec<RosterPokemon>,
}

impl Roster {
    pub fn new(trainer: Trainer, pokemons: Vec<RosterPokemon>) -> Self {
        Self { trainer, pokemons }
    }

    /// Convert into the raw JSON candidate form
    pub fn to_value(&self) -> Value {
        json!({
            "trainer": { "name": self.trainer.name },
            "pokemons": self.pokemons.iter().map(RosterPokemon::to_value).collect::<Vec<_>>(),
        })
    }
}
