//! Service layer: upstream client, evolution resolution, orchestration

pub mod catalog_fetcher;
pub mod chain_traverser;
pub mod detail_orchestrator;
pub mod image_resolver;
pub mod pokeapi_client;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog_fetcher::CatalogFetcher;
pub use chain_traverser::ChainTraverser;
pub use detail_orchestrator::{DetailError, DetailOrchestrator, PokemonDetailView};
pub use image_resolver::{extract_species_id, ResolveError, ResolverConfig, StageImageResolver};
pub use pokeapi_client::{ClientConfig, LookupError, PokeApiClient, SpeciesLookup};
