//! Simulation input and output

use pokebattle_battle::EventEnvelope;
use pokebattle_protocol::Side;
use pokebattle_replay::Scoreboard;
use pokebattle_team::TeamRequest;
use serde::{Deserialize, Serialize};

/// Request to play out a battle between two catalog teams
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBattleSimulationCommand {
    pub home_team: TeamRequest,
    pub away_team: TeamRequest,
}

impl CreateBattleSimulationCommand {
    pub fn new(home_team: TeamRequest, away_team: TeamRequest) -> Self {
        Self {
            home_team,
            away_team,
        }
    }

    pub fn team(&self, side: Side) -> &TeamRequest {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }
}

/// Outcome of a finished simulation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    pub battle_id: String,

    /// Narrative, one line per entry
    pub battle_log: Vec<String>,

    /// Full recorded history
    pub events: Vec<EventEnvelope>,

    pub winning_side: Side,
    pub winning_team: TeamRequest,
    pub losing_team: TeamRequest,

    /// Attacks resolved
    pub turns: usize,

    pub scoreboard: Scoreboard,
}
