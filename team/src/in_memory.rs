//! Catalog backed by the bundled pokedex

use std::collections::HashMap;

use async_trait::async_trait;

use crate::{CatalogError, PokemonFilter, PokemonRecord, PokemonService};

const POKEDEX_JSON: &str = include_str!("../data/pokedex.json");

/// Read-only catalog held in memory
#[derive(Debug, Clone)]
pub struct InMemoryPokemonService {
    records: Vec<PokemonRecord>,
    by_id: HashMap<u16, usize>,
}

impl InMemoryPokemonService {
    /// Load the bundled pokedex
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::from_json(POKEDEX_JSON)
    }

    /// Load records from a JSON array
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<PokemonRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(mut records: Vec<PokemonRecord>) -> Self {
        records.sort_by_key(|r| r.pokedex_id);
        let by_id = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.pokedex_id, i))
            .collect();

        tracing::debug!(count = records.len(), "Loaded pokedex");

        Self { records, by_id }
    }

    pub fn records(&self) -> &[PokemonRecord] {
        &self.records
    }

    pub fn get(&self, id: u16) -> Option<&PokemonRecord> {
        self.by_id.get(&id).map(|i| &self.records[*i])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl PokemonService for InMemoryPokemonService {
    async fn get_by_ids(&self, ids: &[u16]) -> Result<Vec<PokemonRecord>, CatalogError> {
        tracing::debug!(?ids, "Looking up pokemons");

        ids.iter()
            .map(|id| self.get(*id).cloned().ok_or(CatalogError::NotFound(*id)))
            .collect()
    }

    async fn get_all(&self, filter: &PokemonFilter) -> Result<Vec<PokemonRecord>, CatalogError> {
        tracing::debug!(types_pattern = ?filter.types_pattern, "Querying pokemons");

        Ok(self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }
}
