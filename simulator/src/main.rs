//! Simulate one battle from a JSON command.
//!
//! Reads a `CreateBattleSimulationCommand` from the file given as the first
//! argument, or from stdin, and prints the result as JSON on stdout.

use anyhow::{Context, Result};
use pokebattle_simulator::{
    BattleSimulator, CreateBattleSimulationCommand, SimulatorConfig, init_tracing,
};
use pokebattle_team::InMemoryPokemonService;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let input = match std::env::args().nth(1) {
        Some(path) => tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path))?,
        None => {
            let mut input = String::new();
            tokio::io::stdin()
                .read_to_string(&mut input)
                .await
                .context("Failed to read stdin")?;
            input
        }
    };

    let command: CreateBattleSimulationCommand =
        serde_json::from_str(&input).context("Invalid simulation command")?;

    let service = InMemoryPokemonService::bundled().context("Failed to load pokedex")?;
    let simulator = BattleSimulator::new(service, SimulatorConfig::from_env());

    let result = simulator.simulate(&command).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
