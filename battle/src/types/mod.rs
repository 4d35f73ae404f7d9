//! Domain types for battle state

mod combatant;
mod state;

pub use combatant::{Combatant, START_HEALTH};
pub use state::{BattleState, Turn};
