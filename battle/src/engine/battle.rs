//! Battle - the battle state machine

use std::collections::HashSet;

use pokebattle_protocol::{Roster, Side, Trainer, validate_roster};
use serde_json::Value;

use crate::error::{BattleError, ForbiddenError, InvariantError};
use crate::events::{BattleEvent, BattleSnapshot, EventEnvelope, EventLog, TeamJoined};
use crate::ids::{IdGenerator, UuidGenerator};
use crate::lookup::LookupIndex;
use crate::types::{BattleState, Combatant, Turn};

/// One battle between a home and an away team.
///
/// Progresses through team registration, [`begin`](Self::begin) and
/// alternating attacks until one side runs out of healthy pokemon. Every
/// successful transition appends to the event log; failed operations leave
/// the battle untouched.
pub struct Battle {
    state: BattleState,
    index: LookupIndex,
    log: EventLog,
    ids: Box<dyn IdGenerator>,
}

impl Battle {
    /// Create a battle with random UUID identifiers
    pub fn new() -> Self {
        Self::with_id_generator(UuidGenerator)
    }

    /// Create a battle drawing all identifiers from `ids`
    pub fn with_id_generator(ids: impl IdGenerator + 'static) -> Self {
        let mut ids: Box<dyn IdGenerator> = Box::new(ids);
        let state = BattleState::new(ids.next_id());

        Self {
            state,
            index: LookupIndex::new(),
            log: EventLog::new(),
            ids,
        }
    }

    /// Validate and register the home roster
    pub fn add_home_team(&mut self, candidate: &Value) -> Result<(), BattleError> {
        self.add_team(Side::Home, candidate)
    }

    /// Validate and register the away roster
    pub fn add_away_team(&mut self, candidate: &Value) -> Result<(), BattleError> {
        self.add_team(Side::Away, candidate)
    }

    /// Register an already typed roster. It is validated all the same.
    pub fn add_roster(&mut self, side: Side, roster: &Roster) -> Result<(), BattleError> {
        self.add_team(side, &roster.to_value())
    }

    /// Validate and register a roster for `side`
    pub fn add_team(&mut self, side: Side, candidate: &Value) -> Result<(), BattleError> {
        let roster = validate_roster(candidate).inspect_err(|e| {
            tracing::warn!(side = %side, error = %e, "Rejected invalid roster");
        })?;

        if self.index.has_side(side) {
            tracing::warn!(side = %side, "Rejected second roster for side");
            return Err(match side {
                Side::Home => ForbiddenError::HomeTeamAlreadyAdded,
                Side::Away => ForbiddenError::AwayTeamAlreadyAdded,
            }
            .into());
        }

        if let Some(other) = self.index.trainer(side.opponent())
            && other.name == roster.trainer.name
        {
            tracing::warn!(side = %side, trainer = %other.name, "Rejected duplicate trainer name");
            return Err(ForbiddenError::DuplicateTrainerName {
                name: roster.trainer.name,
            }
            .into());
        }

        let Roster { trainer, pokemons } = roster;
        let ids = &mut self.ids;
        let combatants: Vec<Combatant> = pokemons
            .iter()
            .map(|pokemon| Combatant::from_roster(ids.next_id(), pokemon, side, &trainer.name))
            .collect();

        let mut seen = HashSet::new();
        if let Some(duplicate) = combatants
            .iter()
            .find(|c| !seen.insert(c.id.as_str()) || self.index.combatant(&c.id).is_some())
        {
            tracing::error!(side = %side, id = %duplicate.id, "Id generator produced a duplicate");
            return Err(InvariantError::DuplicateCombatantId(duplicate.id.clone()).into());
        }

        self.index
            .register_team(side, trainer.clone(), combatants.clone());

        tracing::info!(
            battle = %self.state.id,
            side = %side,
            trainer = %trainer.name,
            "Team joined"
        );

        self.record(BattleEvent::TeamJoined(TeamJoined {
            side,
            trainer,
            pokemons: combatants,
        }));

        Ok(())
    }

    /// Start the battle. Home attacks first.
    pub fn begin(&mut self) -> Result<(), BattleError> {
        if self.state.started {
            return Err(ForbiddenError::AlreadyStarted.into());
        }

        if !Side::BOTH.iter().all(|side| self.index.has_side(*side)) {
            tracing::warn!(battle = %self.state.id, "Cannot begin without two teams");
            return Err(ForbiddenError::MissingTeams.into());
        }

        self.state.started = true;
        self.state.turn = Some(Turn::first());

        tracing::info!(battle = %self.state.id, "Battle started");

        let snapshot = self.snapshot();
        self.record(BattleEvent::Started(snapshot));

        Ok(())
    }

    // === Read accessors ===

    pub fn id(&self) -> &str {
        &self.state.id
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    pub fn started(&self) -> bool {
        self.state.started
    }

    /// True once the battle has started and one side has no healthy pokemon
    pub fn ended(&self) -> bool {
        self.state.started
            && Side::BOTH
                .iter()
                .any(|side| self.index.first_alive(*side).is_none())
    }

    /// Check if attacks are currently accepted
    pub fn is_active(&self) -> bool {
        self.started() && !self.ended()
    }

    /// Turn count, once started
    pub fn current_turn(&self) -> Option<u32> {
        self.state.turn.map(|turn| turn.count)
    }

    /// Side on turn, once started
    pub fn current_attacking_side(&self) -> Option<Side> {
        self.state.turn.map(|turn| turn.attacking_side)
    }

    /// Recorded history in append order
    pub fn events(&self) -> &[EventEnvelope] {
        self.log.events()
    }

    pub fn event_log(&self) -> &EventLog {
        &self.log
    }

    /// Check if a side has been registered
    pub fn has_side(&self, side: Side) -> bool {
        self.index.has_side(side)
    }

    pub fn trainer(&self, side: Side) -> Option<&Trainer> {
        self.index.trainer(side)
    }

    /// Combatants of a side in roster order
    pub fn team(&self, side: Side) -> impl Iterator<Item = &Combatant> {
        self.index.team(side)
    }

    pub fn combatant(&self, id: &str) -> Option<&Combatant> {
        self.index.combatant(id)
    }

    /// The pokemon currently fighting for a side
    pub fn active_pokemon(&self, side: Side) -> Option<&Combatant> {
        self.index.first_alive(side)
    }

    /// The side still standing, once ended
    pub fn winner(&self) -> Option<Side> {
        if !self.ended() {
            return None;
        }
        Side::BOTH
            .into_iter()
            .find(|side| self.index.first_alive(side.opponent()).is_none())
    }

    // === Internals shared with attack resolution ===

    pub(crate) fn index(&self) -> &LookupIndex {
        &self.index
    }

    pub(crate) fn index_mut(&mut self) -> &mut LookupIndex {
        &mut self.index
    }

    pub(crate) fn set_turn(&mut self, turn: Turn) {
        self.state.turn = Some(turn);
    }

    pub(crate) fn record(&mut self, event: BattleEvent) {
        self.log.append(self.ids.as_mut(), event);
    }

    pub(crate) fn snapshot(&self) -> BattleSnapshot {
        BattleSnapshot {
            battle_state: self.state.clone(),
            home_team: self.index.team_snapshot(Side::Home),
            away_team: self.index.team_snapshot(Side::Away),
        }
    }
}

impl Default for Battle {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Battle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Battle")
            .field("state", &self.state)
            .field("index", &self.index)
            .field("events", &self.log.len())
            .finish()
    }
}
