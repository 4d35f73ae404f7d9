//! Battle simulation driver

use anyhow::{Context, Result, bail};
use pokebattle_battle::Battle;
use pokebattle_protocol::{Roster, Side};
use pokebattle_replay::Replay;
use pokebattle_team::{PokemonFilter, PokemonService, TeamRequest, build_roster};

use crate::query::{QueryPokemonsResponse, query_pokemons};
use crate::{CreateBattleSimulationCommand, SimulationResult, SimulatorConfig};

/// Plays battles between catalog teams until one side is knocked out
pub struct BattleSimulator<S> {
    service: S,
    config: SimulatorConfig,
}

impl<S: PokemonService> BattleSimulator<S> {
    pub fn new(service: S, config: SimulatorConfig) -> Self {
        Self { service, config }
    }

    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Fetch both teams, run the battle to the end and summarize it
    pub async fn simulate(
        &self,
        command: &CreateBattleSimulationCommand,
    ) -> Result<SimulationResult> {
        tracing::info!(
            home = %command.home_team.trainer_name,
            away = %command.away_team.trainer_name,
            "Simulating battle"
        );

        let home = self.fetch_roster(&command.home_team).await?;
        let away = self.fetch_roster(&command.away_team).await?;

        let mut battle = Battle::new();
        battle
            .add_roster(Side::Home, &home)
            .context("Home team was rejected")?;
        battle
            .add_roster(Side::Away, &away)
            .context("Away team was rejected")?;
        battle.begin().context("Battle could not begin")?;

        self.play(&mut battle)?;

        let winning_side = battle
            .winner()
            .context("Battle finished without a winner")?;
        let replay = Replay::from_battle(&battle);

        tracing::info!(
            battle = %battle.id(),
            winner = %command.team(winning_side).trainer_name,
            turns = replay.turn_count(),
            "Simulation finished"
        );

        Ok(SimulationResult {
            battle_id: battle.id().to_string(),
            battle_log: replay.narrative(),
            turns: replay.turn_count(),
            scoreboard: replay.scoreboard(),
            events: replay.events().to_vec(),
            winning_side,
            winning_team: command.team(winning_side).clone(),
            losing_team: command.team(winning_side.opponent()).clone(),
        })
    }

    /// Catalog query through this simulator's service
    pub async fn query_pokemons(&self, filter: &PokemonFilter) -> Result<QueryPokemonsResponse> {
        query_pokemons(&self.service, filter).await
    }

    async fn fetch_roster(&self, team: &TeamRequest) -> Result<Roster> {
        let records = self
            .service
            .get_by_ids(&team.pokedex_ids())
            .await
            .inspect_err(|e| {
                tracing::error!(trainer = %team.trainer_name, error = %e, "Catalog lookup failed");
            })
            .context("Failed to fetch pokemons from the catalog")?;

        Ok(build_roster(&team.trainer_name, &records))
    }

    /// Attack for whichever side is on turn until the battle ends
    fn play(&self, battle: &mut Battle) -> Result<()> {
        let mut turns = 0;

        while !battle.ended() {
            if turns >= self.config.max_turns {
                tracing::warn!(battle = %battle.id(), turns, "Turn limit reached");
                bail!("Battle exceeded {} turns", self.config.max_turns);
            }

            let side = battle
                .current_attacking_side()
                .context("Battle has no attacking side")?;
            battle.attack(side)?;
            turns += 1;
        }

        Ok(())
    }
}
