//! pkdx-ev library interface
//!
//! Evolution service: resolves a pokemon's evolution chain into ordered,
//! display-ready stages and serves the catalog and detail views as JSON.

pub mod api;
pub mod error;
pub mod models;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use pkdx_common::config::TomlConfig;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::{
    CatalogFetcher, ChainTraverser, ClientConfig, DetailOrchestrator, LookupError,
    PokeApiClient, ResolverConfig, StageImageResolver,
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Detail + evolution loading
    pub orchestrator: Arc<DetailOrchestrator>,
    /// Catalog listing
    pub catalog: Arc<CatalogFetcher>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(orchestrator: Arc<DetailOrchestrator>, catalog: Arc<CatalogFetcher>) -> Self {
        Self {
            orchestrator,
            catalog,
            startup_time: Utc::now(),
        }
    }

    /// Wire client, resolver, traverser and fetchers from configuration
    pub fn from_config(config: &TomlConfig) -> Result<Self, LookupError> {
        let client = Arc::new(PokeApiClient::new(ClientConfig::from_toml(config))?);

        let resolver = Arc::new(StageImageResolver::new(
            client.clone(),
            ResolverConfig::from_toml(config),
        ));
        let traverser = ChainTraverser::new(resolver, config.max_concurrent_lookups);

        let orchestrator = Arc::new(DetailOrchestrator::new(client.clone(), traverser));
        let catalog = Arc::new(CatalogFetcher::new(client, config.catalog_fetch_limit));

        Ok(Self::new(orchestrator, catalog))
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/api/catalog", get(api::get_catalog))
        .route("/api/pokemon/:name", get(api::get_pokemon))
        .route("/api/pokemon/:name/evolutions", get(api::get_evolutions))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
