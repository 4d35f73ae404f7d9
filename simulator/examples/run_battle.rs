//! Battle Simulation Example
//!
//! Plays Ash against Gary with the bundled pokedex and prints the narrative
//! followed by the scoreboard.

use anyhow::Result;
use pokebattle_protocol::Side;
use pokebattle_simulator::{
    BattleSimulator, CreateBattleSimulationCommand, SimulatorConfig, init_tracing,
};
use pokebattle_team::{InMemoryPokemonService, PokemonFilter, TeamRequest};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let simulator = BattleSimulator::new(
        InMemoryPokemonService::bundled()?,
        SimulatorConfig::from_env(),
    );

    let fire = simulator
        .query_pokemons(&PokemonFilter::by_type("fire"))
        .await?;
    let names: Vec<&str> = fire.pokemons.iter().map(|p| p.name.as_str()).collect();
    println!("Fire pokemons: {}", names.join(", "));

    let command = CreateBattleSimulationCommand::new(
        TeamRequest::new("Ash", &[1, 4, 7]),
        TeamRequest::new("Gary", &[16, 19, 25]),
    );
    let result = simulator.simulate(&command).await?;

    for line in &result.battle_log {
        println!("{}", line);
    }

    println!();
    for side in Side::BOTH {
        let score = result.scoreboard.side(side);
        println!(
            "{:<10} attacks {:>3}  dealt {:>5}  taken {:>5}  knockouts {}",
            command.team(side).trainer_name,
            score.attacks,
            score.damage_dealt,
            score.damage_taken,
            score.knockouts
        );
    }
    println!("{} wins after {} turns", result.winning_team.trainer_name, result.turns);

    Ok(())
}
