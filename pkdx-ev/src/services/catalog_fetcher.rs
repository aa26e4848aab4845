//! Catalog listing
//!
//! Fetches a fixed-size slice of the pokemon list and enriches every entry
//! with its sprites and types. Entries are fetched concurrently; a failed
//! entry is skipped without failing the batch.

use futures::future::join_all;
use std::sync::Arc;
use tracing::{info, warn};

use super::pokeapi_client::{LookupError, PokeApiClient};
use crate::models::CatalogEntry;

/// Builds the browsable catalog
pub struct CatalogFetcher {
    client: Arc<PokeApiClient>,
    limit: u32,
}

impl CatalogFetcher {
    pub fn new(client: Arc<PokeApiClient>, limit: u32) -> Self {
        Self { client, limit }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Catalog entries in list order
    ///
    /// Fails only when the list itself cannot be fetched.
    pub async fn fetch(&self) -> Result<Vec<CatalogEntry>, LookupError> {
        let list = self.client.fetch_pokemon_list(self.limit).await?;
        let requested = list.results.len();

        let futures = list.results.into_iter().map(|item| {
            let client = Arc::clone(&self.client);
            async move {
                match client.fetch_pokemon_at(&item.url).await {
                    Ok(detail) => Some(CatalogEntry::from_detail(item.name, &detail)),
                    Err(e) => {
                        warn!(
                            name = %item.name,
                            error = %e,
                            "Catalog entry lookup failed, skipping entry"
                        );
                        None
                    }
                }
            }
        });

        let entries: Vec<CatalogEntry> = join_all(futures).await.into_iter().flatten().collect();

        info!(
            requested = requested,
            loaded = entries.len(),
            "Catalog fetched"
        );

        Ok(entries)
    }
}
