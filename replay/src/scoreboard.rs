//! Per-side battle statistics

use pokebattle_battle::{Attacked, EventEnvelope};
use pokebattle_protocol::Side;
use serde::{Deserialize, Serialize};

/// Totals for one side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideScore {
    pub attacks: u32,
    pub damage_dealt: u32,
    pub damage_taken: u32,

    /// Opposing pokemon knocked out
    pub knockouts: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub home: SideScore,
    pub away: SideScore,
}

impl Scoreboard {
    /// Tally every attack in `events`
    pub fn from_events<'a>(events: impl IntoIterator<Item = &'a EventEnvelope>) -> Self {
        let mut board = Self::default();
        for attacked in events.into_iter().filter_map(|e| e.event().as_attacked()) {
            board.record(attacked);
        }
        board
    }

    pub fn record(&mut self, attacked: &Attacked) {
        let attacker = attacked.attacked_by_pokemon.side;

        let score = self.side_mut(attacker);
        score.attacks += 1;
        score.damage_dealt += attacked.damage;
        if attacked.is_knockout() {
            score.knockouts += 1;
        }

        self.side_mut(attacker.opponent()).damage_taken += attacked.damage;
    }

    pub fn side(&self, side: Side) -> &SideScore {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideScore {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
        }
    }
}
