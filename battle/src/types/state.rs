//! Battle-wide state

use pokebattle_protocol::Side;
use serde::{Deserialize, Serialize};

/// Whose move it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Turn {
    /// Starts at 1 and grows by one per attack
    pub count: u32,
    pub attacking_side: Side,
}

impl Turn {
    /// Home opens every battle
    pub fn first() -> Self {
        Self {
            count: 1,
            attacking_side: Side::Home,
        }
    }

    /// The turn after an attack: the side that was just hit answers
    pub fn next(self) -> Self {
        Self {
            count: self.count + 1,
            attacking_side: self.attacking_side.opponent(),
        }
    }
}

/// Identity and progress of one battle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleState {
    pub id: String,
    pub started: bool,

    /// Set by `begin`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub turn: Option<Turn>,
}

impl BattleState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            started: false,
            turn: None,
        }
    }
}
