//! In-battle pokemon

use pokebattle_protocol::{RosterPokemon, Side, Type};
use serde::{Deserialize, Serialize};

/// Health every combatant enters the battle with
pub const START_HEALTH: u32 = 1000;

/// A pokemon taking part in a battle.
///
/// Built from a validated [`RosterPokemon`]; only `health` changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    /// Unique within the battle
    pub id: String,

    pub pokedex_id: u16,

    pub name: String,

    pub types: Vec<Type>,

    /// Attacker types listed here amplify damage taken
    pub weaknesses: Vec<Type>,

    /// Each entry adds `multiplier * 20` to damage dealt
    pub multipliers: Vec<f64>,

    /// Remaining health, never below zero
    pub health: u32,

    pub side: Side,

    pub trainer_name: String,
}

impl Combatant {
    /// Enter a roster pokemon into battle at full health
    pub fn from_roster(
        id: impl Into<String>,
        pokemon: &RosterPokemon,
        side: Side,
        trainer_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            pokedex_id: pokemon.pokedex_id,
            name: pokemon.display_name(),
            types: pokemon.types.clone(),
            weaknesses: pokemon.weaknesses.clone(),
            multipliers: pokemon.multipliers.clone(),
            health: START_HEALTH,
            side,
            trainer_name: trainer_name.into(),
        }
    }

    /// Check if the pokemon can still fight
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Subtract damage, stopping at zero. Returns the health actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.health);
        self.health -= lost;
        lost
    }
}
