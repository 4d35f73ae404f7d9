//! Catalog service port

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::PokemonRecord;

/// Errors from a catalog backend
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("No pokemon with pokedex id {0}")]
    NotFound(u16),

    #[error("Catalog data is malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Narrows [`PokemonService::get_all`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PokemonFilter {
    /// Case-insensitive substring of any type name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types_pattern: Option<String>,
}

impl PokemonFilter {
    pub fn by_type(pattern: impl Into<String>) -> Self {
        Self {
            types_pattern: Some(pattern.into()),
        }
    }

    pub fn matches(&self, record: &PokemonRecord) -> bool {
        match &self.types_pattern {
            Some(pattern) => record.matches_type(pattern),
            None => true,
        }
    }
}

/// Source of pokedex records
#[async_trait]
pub trait PokemonService: Send + Sync {
    /// Records for `ids` in request order. Repeated ids yield repeated records.
    async fn get_by_ids(&self, ids: &[u16]) -> Result<Vec<PokemonRecord>, CatalogError>;

    /// Every record accepted by `filter`, in pokedex order
    async fn get_all(&self, filter: &PokemonFilter) -> Result<Vec<PokemonRecord>, CatalogError>;
}
