//! Battle errors

use pokebattle_protocol::{Side, ValidationError};
use thiserror::Error;

/// Valid input that breaks a battle rule
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForbiddenError {
    #[error("Home team cannot be added twice")]
    HomeTeamAlreadyAdded,

    #[error("Away team cannot be added twice")]
    AwayTeamAlreadyAdded,

    #[error("Team trainers must have different trainer names")]
    DuplicateTrainerName { name: String },

    #[error("Battle must have two teams to begin")]
    MissingTeams,

    #[error("Battle has already started")]
    AlreadyStarted,

    #[error("Battle has not started")]
    NotStarted,

    #[error("Battle has ended")]
    Ended,

    #[error("It is not {trainer}'s turn")]
    NotYourTurn { trainer: String },

    #[error("No team with trainer name {0}")]
    UnknownTrainer(String),
}

/// Internal inconsistency. Never expected under correct use.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    #[error("No healthy pokemon left for {0}")]
    NoHealthyPokemon(Side),

    #[error("Unknown combatant {0}")]
    UnknownCombatant(String),

    #[error("Duplicate combatant id {0}")]
    DuplicateCombatantId(String),

    #[error("Battle started without a turn")]
    MissingTurn,
}

/// Any failure of a battle operation. A failed operation changes nothing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Forbidden(#[from] ForbiddenError),

    #[error(transparent)]
    Invariant(#[from] InvariantError),
}

impl BattleError {
    pub fn is_validation(&self) -> bool {
        matches!(self, BattleError::Validation(_))
    }

    pub fn is_forbidden(&self) -> bool {
        matches!(self, BattleError::Forbidden(_))
    }

    pub fn is_invariant(&self) -> bool {
        matches!(self, BattleError::Invariant(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_pass_through() {
        let err: BattleError = ValidationError::TeamNotObject.into();
        assert_eq!(err.to_string(), "Team must be a object");
        assert!(err.is_validation());

        let err: BattleError = ForbiddenError::NotYourTurn {
            trainer: "Gary".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "It is not Gary's turn");
        assert!(err.is_forbidden());

        let err: BattleError = InvariantError::NoHealthyPokemon(Side::Away).into();
        assert_eq!(err.to_string(), "No healthy pokemon left for awayTeam");
        assert!(err.is_invariant());
    }
}
