//! Catalog queries

use anyhow::{Context, Result};
use pokebattle_team::{PokemonFilter, PokemonRecord, PokemonService};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryStatus {
    Success,
}

#[derive(Debug, Clone, Serialize)]
pub struct QueryPokemonsResponse {
    pub pokemons: Vec<PokemonRecord>,
    pub status: QueryStatus,
}

/// Every catalog record accepted by `filter`
pub async fn query_pokemons<S>(service: &S, filter: &PokemonFilter) -> Result<QueryPokemonsResponse>
where
    S: PokemonService + ?Sized,
{
    let pokemons = service
        .get_all(filter)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Catalog query failed"))
        .context("Failed to query pokemons from the catalog")?;

    Ok(QueryPokemonsResponse {
        pokemons,
        status: QueryStatus::Success,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokebattle_team::InMemoryPokemonService;

    #[tokio::test]
    async fn test_query_all() {
        let service = InMemoryPokemonService::bundled().unwrap();
        let response = query_pokemons(&service, &PokemonFilter::default())
            .await
            .unwrap();

        assert_eq!(response.status, QueryStatus::Success);
        assert_eq!(response.pokemons.len(), service.len());
    }

    #[tokio::test]
    async fn test_response_serialization() {
        let service = InMemoryPokemonService::bundled().unwrap();
        let response = query_pokemons(&service, &PokemonFilter::by_type("electric"))
            .await
            .unwrap();

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status"], "success");
        assert!(
            value["pokemons"]
                .as_array()
                .unwrap()
                .iter()
                .any(|p| p["name"] == "Pikachu")
        );
    }
}
