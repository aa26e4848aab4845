//! Detail view orchestration
//!
//! Loads a pokemon's detail record, then its species record and evolution
//! chain, and hands the chain to the traverser. A failure anywhere on the
//! chain path leaves the evolution section empty instead of failing the
//! whole detail view.

use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::chain_traverser::ChainTraverser;
use super::pokeapi_client::{LookupError, PokeApiClient, SpeciesLookup};
use crate::models::catalog::type_infos;
use crate::models::{EvolutionNode, EvolutionSequence, PokemonDetail, TypeInfo};

/// Detail loading errors
#[derive(Debug, Error)]
pub enum DetailError {
    #[error("Invalid pokemon name: {0:?}")]
    InvalidName(String),

    #[error("Detail lookup failed: {0}")]
    Lookup(#[from] LookupError),
}

/// Everything the detail screen shows
#[derive(Debug, Clone, Serialize)]
pub struct PokemonDetailView {
    pub name: String,
    pub image: Option<String>,
    pub image_back: Option<String>,
    pub types: Vec<TypeInfo>,
    pub height_m: f64,
    pub weight_kg: f64,
    /// Full resolved lineage; see [`EvolutionSequence::is_displayable`]
    pub evolutions: EvolutionSequence,
}

/// Normalize a requested name for lookup
pub fn normalize_name(name: &str) -> Result<String, DetailError> {
    let normalized = name.trim().to_lowercase();
    if normalized.is_empty() {
        return Err(DetailError::InvalidName(name.to_string()));
    }
    Ok(normalized)
}

/// Sequences detail, species, and chain lookups for one pokemon
pub struct DetailOrchestrator {
    client: Arc<PokeApiClient>,
    traverser: ChainTraverser,
}

impl DetailOrchestrator {
    pub fn new(client: Arc<PokeApiClient>, traverser: ChainTraverser) -> Self {
        Self { client, traverser }
    }

    /// Load the detail view for `name` (any casing)
    pub async fn load(&self, name: &str) -> Result<PokemonDetailView, DetailError> {
        let name = normalize_name(name)?;
        let detail = self.client.lookup_pokemon(&name).await?;

        info!(name = %detail.name, "Loaded pokemon detail");

        let evolutions = self.load_evolutions(&detail).await;

        Ok(PokemonDetailView {
            name: detail.name.clone(),
            image: detail.sprites.front_default.clone(),
            image_back: detail.sprites.back_default.clone(),
            types: type_infos(&detail),
            height_m: detail.height_m(),
            weight_kg: detail.weight_kg(),
            evolutions,
        })
    }

    /// Resolve the lineage of a loaded detail record
    ///
    /// Chain fetch failures are logged and yield an empty sequence.
    pub async fn load_evolutions(&self, detail: &PokemonDetail) -> EvolutionSequence {
        match self.fetch_chain_root(detail).await {
            Ok(Some(root)) => self.traverser.traverse(&root).await,
            Ok(None) => {
                debug!(name = %detail.name, "No evolution chain for species");
                EvolutionSequence::empty()
            }
            Err(e) => {
                warn!(
                    name = %detail.name,
                    error = %e,
                    "Evolution chain unavailable, showing no evolutions"
                );
                EvolutionSequence::empty()
            }
        }
    }

    async fn fetch_chain_root(
        &self,
        detail: &PokemonDetail,
    ) -> Result<Option<EvolutionNode>, LookupError> {
        let Some(species_ref) = &detail.species else {
            return Ok(None);
        };

        let species = self.client.fetch_species(&species_ref.url).await?;
        let Some(chain_ref) = species.evolution_chain else {
            return Ok(None);
        };

        let document = self.client.fetch_evolution_chain(&chain_ref.url).await?;
        Ok(Some(document.chain))
    }
}
