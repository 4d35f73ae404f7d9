//! Auto-played pokemon battles.
//!
//! [`BattleSimulator`] resolves two [`TeamRequest`](pokebattle_team::TeamRequest)s
//! through a [`PokemonService`](pokebattle_team::PokemonService), plays the
//! battle to the end and returns its history, narrative and scoreboard.
//!
//! ```ignore
//! use pokebattle_simulator::{BattleSimulator, CreateBattleSimulationCommand, SimulatorConfig};
//! use pokebattle_team::{InMemoryPokemonService, TeamRequest};
//!
//! let simulator = BattleSimulator::new(InMemoryPokemonService::bundled()?, SimulatorConfig::from_env());
//! let command = CreateBattleSimulationCommand::new(
//!     TeamRequest::new("Ash", &[1, 4, 7]),
//!     TeamRequest::new("Gary", &[16, 19, 25]),
//! );
//! let result = simulator.simulate(&command).await?;
//! println!("{} wins", result.winning_team.trainer_name);
//! ```

mod command;
mod config;
mod query;
mod simulation;

pub use command::{CreateBattleSimulationCommand, SimulationResult};
pub use config::SimulatorConfig;
pub use query::{QueryPokemonsResponse, QueryStatus, query_pokemons};
pub use simulation::BattleSimulator;

/// Log to stderr, `INFO` and above unless `RUST_LOG` says otherwise
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
