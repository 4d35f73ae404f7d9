//! Turn-based battle state machine with an append-only event log.
//!
//! # Overview
//!
//! `pokebattle-battle` takes validated rosters from `pokebattle-protocol` and
//! runs one battle to completion:
//!
//! ```text
//! pokebattle-protocol (roster validation)
//!        │
//!        ▼
//! pokebattle-battle (state machine + events) ← THIS CRATE
//!        │
//!        ├─> pokebattle-replay (narrative, scoreboard)
//!        └─> pokebattle-simulator (auto-played battles)
//! ```
//!
//! # Main Types
//!
//! - [`Battle`] - Registers teams, starts the battle and resolves attacks
//! - [`TeamHandle`] - One trainer's side, selected by trainer name
//! - [`Combatant`] - A pokemon in battle with its remaining health
//! - [`BattleEvent`] / [`EventEnvelope`] - Recorded history
//! - [`BattleError`] - Validation, forbidden and invariant failures
//!
//! # Example Usage
//!
//! ```ignore
//! use pokebattle_battle::Battle;
//!
//! let mut battle = Battle::new();
//! battle.add_home_team(&home_json)?;
//! battle.add_away_team(&away_json)?;
//! battle.begin()?;
//!
//! while !battle.ended() {
//!     let side = battle.current_attacking_side().unwrap();
//!     battle.attack(side)?;
//! }
//!
//! for event in battle.events() {
//!     println!("{} {}", event.revision(), event.event_type());
//! }
//! ```

pub mod damage;
pub mod engine;
pub mod error;
pub mod events;
pub mod ids;
pub mod lookup;
pub mod types;

pub use engine::{Battle, TeamHandle};
pub use error::{BattleError, ForbiddenError, InvariantError};
pub use events::{Attacked, BattleEvent, BattleSnapshot, EventEnvelope, EventLog, TeamJoined};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use types::{BattleState, Combatant, START_HEALTH, Turn};

// Re-export commonly used protocol types
pub use pokebattle_protocol::{Roster, RosterPokemon, Side, Trainer, Type, ValidationError};
