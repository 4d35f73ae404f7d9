//! Battle events
//!
//! Every state transition of a [`Battle`](crate::Battle) is recorded as one
//! [`BattleEvent`] wrapped in an [`EventEnvelope`]. Payloads hold owned
//! snapshots, so later changes to the battle never reach recorded history.

mod log;

use pokebattle_protocol::{Side, Trainer};
use serde::{Deserialize, Serialize};

use crate::types::{BattleState, Combatant};

pub use log::{EventEnvelope, EventLog};

/// One state transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "kebab-case")]
pub enum BattleEvent {
    /// A roster was admitted for one side
    TeamJoined(TeamJoined),

    /// Both sides are in and home is on turn
    Started(BattleSnapshot),

    /// One attack resolved
    Attacked(Attacked),

    /// One side has no healthy pokemon left
    Ended(BattleSnapshot),
}

impl BattleEvent {
    /// Wire name of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            BattleEvent::TeamJoined(_) => "team-joined",
            BattleEvent::Started(_) => "started",
            BattleEvent::Attacked(_) => "attacked",
            BattleEvent::Ended(_) => "ended",
        }
    }

    pub fn as_team_joined(&self) -> Option<&TeamJoined> {
        match self {
            BattleEvent::TeamJoined(payload) => Some(payload),
            _ => None,
        }
    }

    pub fn as_attacked(&self) -> Option<&Attacked> {
        match self {
            BattleEvent::Attacked(payload) => Some(payload),
            _ => None,
        }
    }

    /// Payload of a `started` or `ended` event
    pub fn as_snapshot(&self) -> Option<&BattleSnapshot> {
        match self {
            BattleEvent::Started(payload) | BattleEvent::Ended(payload) => Some(payload),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamJoined {
    pub side: Side,
    pub trainer: Trainer,
    pub pokemons: Vec<Combatant>,
}

/// Battle state and both teams at one point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleSnapshot {
    pub battle_state: BattleState,
    pub home_team: Vec<Combatant>,
    pub away_team: Vec<Combatant>,
}

impl BattleSnapshot {
    pub fn team(&self, side: Side) -> &[Combatant] {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attacked {
    /// Defender after the hit
    pub attacked_pokemon: Combatant,

    /// Attacker as it was when striking
    pub attacked_by_pokemon: Combatant,

    /// Health the defender actually lost
    pub damage: u32,

    /// Turn count after this attack
    pub turn: u32,
}

impl Attacked {
    /// Whether this hit knocked the defender out
    pub fn is_knockout(&self) -> bool {
        !self.attacked_pokemon.is_alive()
    }
}
