use async_trait::async_trait;
use pokebattle_battle::{BattleError, ForbiddenError};
use pokebattle_protocol::Side;
use pokebattle_simulator::{
    BattleSimulator, CreateBattleSimulationCommand, QueryStatus, SimulatorConfig,
};
use pokebattle_team::{
    CatalogError, InMemoryPokemonService, PokemonFilter, PokemonRecord, PokemonService,
    TeamRequest,
};

/// Catalog that is always down
struct UnavailableService;

#[async_trait]
impl PokemonService for UnavailableService {
    async fn get_by_ids(&self, _ids: &[u16]) -> Result<Vec<PokemonRecord>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    async fn get_all(&self, _filter: &PokemonFilter) -> Result<Vec<PokemonRecord>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}

fn simulator() -> BattleSimulator<InMemoryPokemonService> {
    BattleSimulator::new(
        InMemoryPokemonService::bundled().unwrap(),
        SimulatorConfig::default(),
    )
}

fn command(home: &[u16], away: &[u16]) -> CreateBattleSimulationCommand {
    CreateBattleSimulationCommand::new(
        TeamRequest::new("homeTrainer", home),
        TeamRequest::new("awayTrainer", away),
    )
}

#[tokio::test]
async fn test_simulation_runs_to_the_end() {
    let command = command(&[1, 4, 7], &[16, 19, 25]);
    let result = simulator().simulate(&command).await.unwrap();

    assert!(!result.battle_id.is_empty());
    assert!(!result.battle_log.is_empty());
    assert_eq!(result.events.len(), result.turns + 4);

    let types: Vec<&str> = result.events.iter().map(|e| e.event_type()).collect();
    assert_eq!(&types[..3], &["team-joined", "team-joined", "started"]);
    assert_eq!(types.last(), Some(&"ended"));

    assert_eq!(result.winning_team, *command.team(result.winning_side));
    assert_eq!(result.losing_team, *command.team(result.winning_side.opponent()));
    assert_eq!(result.scoreboard.side(result.winning_side).knockouts, 3);
    assert_eq!(
        (result.scoreboard.home.attacks + result.scoreboard.away.attacks) as usize,
        result.turns
    );
}

#[tokio::test]
async fn test_home_attacks_first() {
    let result = simulator()
        .simulate(&command(&[1, 1, 1], &[1, 1, 1]))
        .await
        .unwrap();

    let first = result.events[3].event().as_attacked().unwrap();
    assert_eq!(first.attacked_by_pokemon.side, Side::Home);
    assert_eq!(result.winning_side, Side::Home);
}

#[tokio::test]
async fn test_every_pokedex_id_can_battle() {
    let simulator = simulator();

    for id in 1..=151u16 {
        let command = CreateBattleSimulationCommand::new(
            TeamRequest::new("Johan", &[id, id, id]),
            TeamRequest::new("Erik", &[id, id, id]),
        );
        let result = simulator.simulate(&command).await;
        assert!(result.is_ok(), "pokedex id {id}: {:?}", result.err());
    }
}

#[tokio::test]
async fn test_result_serialization() {
    let result = simulator()
        .simulate(&command(&[25, 26, 133], &[4, 5, 6]))
        .await
        .unwrap();

    let value = serde_json::to_value(&result).unwrap();
    assert!(value["battleId"].is_string());
    assert!(value["battleLog"].is_array());
    assert_eq!(value["events"][0]["type"], "team-joined");
    assert_eq!(value["events"][0]["revision"], 1);
    assert!(value["winningTeam"]["trainerName"].is_string());
    assert!(value["scoreboard"]["home"]["damageDealt"].is_u64());
}

#[tokio::test]
async fn test_unknown_pokedex_id() {
    let err = simulator()
        .simulate(&command(&[1, 4, 152], &[16, 19, 25]))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch pokemons from the catalog");
    assert_eq!(err.root_cause().to_string(), "No pokemon with pokedex id 152");
}

#[tokio::test]
async fn test_catalog_failure_is_wrapped() {
    let simulator = BattleSimulator::new(UnavailableService, SimulatorConfig::default());
    let err = simulator
        .simulate(&command(&[1, 4, 7], &[16, 19, 25]))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to fetch pokemons from the catalog");
    assert!(format!("{err:#}").ends_with("Catalog unavailable: connection refused"));
}

#[tokio::test]
async fn test_query_failure_is_wrapped() {
    let simulator = BattleSimulator::new(UnavailableService, SimulatorConfig::default());
    let err = simulator
        .query_pokemons(&PokemonFilter::default())
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Failed to query pokemons from the catalog");
    assert!(err.downcast_ref::<CatalogError>().is_some());
}

#[tokio::test]
async fn test_query_pokemons() {
    let response = simulator()
        .query_pokemons(&PokemonFilter::by_type("Grass"))
        .await
        .unwrap();

    assert_eq!(response.status, QueryStatus::Success);
    assert!(response.pokemons.iter().any(|p| p.name == "Bulbasaur"));
    assert!(!response.pokemons.iter().any(|p| p.name == "Charmander"));
}

#[tokio::test]
async fn test_team_of_two_is_rejected() {
    let err = simulator()
        .simulate(&command(&[1, 4], &[16, 19, 25]))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Home team was rejected");
    assert_eq!(err.root_cause().to_string(), "Each team must have three pokemons");

    let battle_error = err.downcast_ref::<BattleError>().unwrap();
    assert!(battle_error.is_validation());
}

#[tokio::test]
async fn test_same_trainer_names_are_rejected() {
    let command = CreateBattleSimulationCommand::new(
        TeamRequest::new("Ash", &[1, 4, 7]),
        TeamRequest::new("Ash", &[16, 19, 25]),
    );
    let err = simulator().simulate(&command).await.unwrap_err();

    assert_eq!(err.to_string(), "Away team was rejected");
    assert!(matches!(
        err.downcast_ref::<BattleError>(),
        Some(BattleError::Forbidden(ForbiddenError::DuplicateTrainerName { .. }))
    ));
}

#[tokio::test]
async fn test_turn_limit() {
    let simulator = BattleSimulator::new(
        InMemoryPokemonService::bundled().unwrap(),
        SimulatorConfig::default().with_max_turns(5),
    );
    let err = simulator
        .simulate(&command(&[1, 4, 7], &[16, 19, 25]))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Battle exceeded 5 turns");
}
