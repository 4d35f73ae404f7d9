//! Replays of recorded battles.
//!
//! A [`Replay`] wraps the event history of one battle, checks it is complete
//! and derives views from it: a readable [narrative](narrate), a
//! [`Scoreboard`] and the winning side.

mod narrative;
mod scoreboard;

use pokebattle_battle::{Attacked, Battle, EventEnvelope};
use pokebattle_protocol::{Side, Trainer};
use thiserror::Error;

pub use narrative::narrate;
pub use scoreboard::{Scoreboard, SideScore};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Expected revision {expected} but found {found}")]
    RevisionGap { expected: u64, found: u64 },
}

/// Indexed, read-only history of one battle
#[derive(Debug, Clone)]
pub struct Replay {
    events: Vec<EventEnvelope>,
}

impl Replay {
    /// Wrap a history. Revisions must run 1, 2, 3... without gaps.
    pub fn new(events: Vec<EventEnvelope>) -> Result<Self, ReplayError> {
        for (expected, envelope) in (1u64..).zip(&events) {
            if envelope.revision() != expected {
                return Err(ReplayError::RevisionGap {
                    expected,
                    found: envelope.revision(),
                });
            }
        }
        Ok(Self { events })
    }

    /// Snapshot a battle's history. Engine logs are always gapless.
    pub fn from_battle(battle: &Battle) -> Self {
        Self {
            events: battle.event_log().snapshot(),
        }
    }

    pub fn events(&self) -> &[EventEnvelope] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Event at a revision (1-based)
    pub fn at_revision(&self, revision: u64) -> Option<&EventEnvelope> {
        let index = usize::try_from(revision).ok()?.checked_sub(1)?;
        self.events.get(index)
    }

    /// History up to and including `revision`, for stepping through a battle
    pub fn until(&self, revision: u64) -> &[EventEnvelope] {
        let end = usize::try_from(revision).unwrap_or(usize::MAX);
        &self.events[..end.min(self.events.len())]
    }

    pub fn attacks(&self) -> impl Iterator<Item = &Attacked> {
        self.events.iter().filter_map(|e| e.event().as_attacked())
    }

    /// Number of attacks resolved
    pub fn turn_count(&self) -> usize {
        self.attacks().count()
    }

    pub fn trainer(&self, side: Side) -> Option<&Trainer> {
        self.events
            .iter()
            .filter_map(|e| e.event().as_team_joined())
            .find(|joined| joined.side == side)
            .map(|joined| &joined.trainer)
    }

    pub fn ended(&self) -> bool {
        self.events
            .last()
            .is_some_and(|e| e.event_type() == "ended")
    }

    /// The side with pokemon left in the `ended` snapshot
    pub fn winner(&self) -> Option<Side> {
        let snapshot = self
            .events
            .iter()
            .rev()
            .find(|e| e.event_type() == "ended")?
            .event()
            .as_snapshot()?;

        Side::BOTH
            .into_iter()
            .find(|side| snapshot.team(*side).iter().any(|c| c.is_alive()))
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard::from_events(&self.events)
    }

    /// Narrative lines for the whole history
    pub fn narrative(&self) -> Vec<String> {
        self.events.iter().flat_map(narrate).collect()
    }
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use pokebattle_battle::{Battle, SequentialIds};
    use pokebattle_protocol::{Roster, RosterPokemon, Side, Trainer, Type};

    fn ash() -> Roster {
        Roster::new(
            Trainer::new("Ash"),
            vec![
                RosterPokemon::new(1, vec![Type::Grass, Type::Poison])
                    .with_name("Bulbasaur")
                    .with_weaknesses(vec![Type::Fire, Type::Ice, Type::Flying, Type::Psychic])
                    .with_multipliers(vec![1.58]),
                RosterPokemon::new(4, vec![Type::Fire])
                    .with_name("Charmander")
                    .with_weaknesses(vec![Type::Water, Type::Ground, Type::Rock])
                    .with_multipliers(vec![1.65]),
                RosterPokemon::new(7, vec![Type::Water])
                    .with_name("Squirtle")
                    .with_weaknesses(vec![Type::Electric, Type::Grass])
                    .with_multipliers(vec![2.1]),
            ],
        )
    }

    fn gary() -> Roster {
        Roster::new(
            Trainer::new("Gary"),
            vec![
                RosterPokemon::new(16, vec![Type::Normal, Type::Flying])
                    .with_name("Pidgey")
                    .with_weaknesses(vec![Type::Electric, Type::Rock])
                    .with_multipliers(vec![1.71, 1.92]),
                RosterPokemon::new(19, vec![Type::Normal])
                    .with_name("Rattata")
                    .with_weaknesses(vec![Type::Fighting])
                    .with_multipliers(vec![2.55, 2.73]),
                RosterPokemon::new(25, vec![Type::Electric])
                    .with_name("Pikachu")
                    .with_weaknesses(vec![Type::Ground])
                    .with_multipliers(vec![2.34]),
            ],
        )
    }

    pub fn started_battle() -> Battle {
        let mut battle = Battle::with_id_generator(SequentialIds::new("replay"));
        battle.add_roster(Side::Home, &ash()).unwrap();
        battle.add_roster(Side::Away, &gary()).unwrap();
        battle.begin().unwrap();
        battle
    }

    pub fn finished_battle() -> Battle {
        let mut battle = started_battle();
        while let Some(side) = battle.current_attacking_side().filter(|_| !battle.ended()) {
            battle.attack(side).unwrap();
        }
        battle
    }
}
