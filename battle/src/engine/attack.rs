//! Team handles and attack resolution

use pokebattle_protocol::Side;

use super::Battle;
use crate::damage::calculate_damage;
use crate::error::{BattleError, ForbiddenError, InvariantError};
use crate::events::{Attacked, BattleEvent};

/// A trainer's side of a battle, as selected by trainer name.
///
/// Borrows the battle mutably, so only one handle can act at a time.
pub struct TeamHandle<'a> {
    battle: &'a mut Battle,
    side: Side,
}

impl<'a> TeamHandle<'a> {
    pub fn side(&self) -> Side {
        self.side
    }

    pub fn trainer_name(&self) -> &str {
        self.battle
            .trainer(self.side)
            .map(|t| t.name.as_str())
            .unwrap_or_default()
    }

    /// Attack with this side's active pokemon
    pub fn attack(&mut self) -> Result<(), BattleError> {
        self.battle.resolve_attack(self.side)
    }
}

impl Battle {
    /// Handle for the side whose trainer is called `trainer_name`
    pub fn select_team(&mut self, trainer_name: &str) -> Result<TeamHandle<'_>, BattleError> {
        let side = self
            .index()
            .side_of(trainer_name.trim())
            .ok_or_else(|| ForbiddenError::UnknownTrainer(trainer_name.to_string()))?;

        Ok(TeamHandle { battle: self, side })
    }

    /// Attack on behalf of `side`. Same rules as [`TeamHandle::attack`].
    pub fn attack(&mut self, side: Side) -> Result<(), BattleError> {
        self.resolve_attack(side)
    }

    fn resolve_attack(&mut self, side: Side) -> Result<(), BattleError> {
        if !self.started() {
            return Err(ForbiddenError::NotStarted.into());
        }
        if self.ended() {
            return Err(ForbiddenError::Ended.into());
        }

        let turn = self.state().turn.ok_or(InvariantError::MissingTurn)?;
        if turn.attacking_side != side {
            let trainer = self
                .trainer(side)
                .map(|t| t.name.clone())
                .unwrap_or_default();
            return Err(ForbiddenError::NotYourTurn { trainer }.into());
        }

        let attacker = self
            .index()
            .first_alive(side)
            .cloned()
            .ok_or(InvariantError::NoHealthyPokemon(side))?;
        let defender_id = self
            .index()
            .first_alive(side.opponent())
            .map(|c| c.id.clone())
            .ok_or(InvariantError::NoHealthyPokemon(side.opponent()))?;

        let defender = self
            .index_mut()
            .combatant_mut(&defender_id)
            .ok_or_else(|| InvariantError::UnknownCombatant(defender_id.clone()))?;
        let amount = calculate_damage(&attacker, defender);
        let damage = defender.take_damage(amount);
        let defender = defender.clone();

        let next = turn.next();
        self.set_turn(next);

        tracing::debug!(
            battle = %self.id(),
            turn = turn.count,
            attacker = %attacker.name,
            defender = %defender.name,
            damage,
            health = defender.health,
            "Attack resolved"
        );

        self.record(BattleEvent::Attacked(Attacked {
            attacked_pokemon: defender,
            attacked_by_pokemon: attacker,
            damage,
            turn: next.count,
        }));

        if self.ended() {
            tracing::info!(battle = %self.id(), winner = %side, turns = next.count - 1, "Battle ended");
            let snapshot = self.snapshot();
            self.record(BattleEvent::Ended(snapshot));
        }

        Ok(())
    }
}
