//! In-memory species lookup for unit tests

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use super::pokeapi_client::{LookupError, SpeciesLookup};
use crate::models::{PokemonDetail, SpeciesRef};

/// Species reference shaped like the real API
pub fn species(name: &str, id: u32) -> SpeciesRef {
    SpeciesRef {
        name: name.to_string(),
        url: format!("https://pokeapi.co/api/v2/pokemon-species/{}/", id),
    }
}

/// Lookup answering from a fixed table; unknown names fail with NotFound
#[derive(Default)]
pub struct StubLookup {
    records: HashMap<String, serde_json::Value>,
    delays: HashMap<String, Duration>,
    calls: Mutex<HashMap<String, usize>>,
}

impl StubLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_artwork(mut self, name: &str, url: &str) -> Self {
        self.records.insert(
            name.to_string(),
            serde_json::json!({
                "name": name,
                "sprites": {
                    "front_default": format!("https://sprite/{}.png", name),
                    "other": {"official-artwork": {"front_default": url}}
                }
            }),
        );
        self
    }

    pub fn with_front_only(mut self, name: &str, url: &str) -> Self {
        self.records.insert(
            name.to_string(),
            serde_json::json!({
                "name": name,
                "sprites": {"front_default": url, "other": {"official-artwork": {"front_default": null}}}
            }),
        );
        self
    }

    pub fn with_no_sprites(mut self, name: &str) -> Self {
        self.records.insert(
            name.to_string(),
            serde_json::json!({"name": name, "sprites": {}}),
        );
        self
    }

    /// Hold the response for `name` back by `delay`
    pub fn with_delay(mut self, name: &str, delay: Duration) -> Self {
        self.delays.insert(name.to_string(), delay);
        self
    }

    pub fn calls(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .get(name)
            .copied()
            .unwrap_or(0)
    }
}

#[async_trait]
impl SpeciesLookup for StubLookup {
    async fn lookup_pokemon(&self, name: &str) -> Result<PokemonDetail, LookupError> {
        *self.calls.lock().unwrap().entry(name.to_string()).or_insert(0) += 1;

        if let Some(delay) = self.delays.get(name) {
            tokio::time::sleep(*delay).await;
        }

        let record = self
            .records
            .get(name)
            .ok_or_else(|| LookupError::NotFound(name.to_string()))?;

        serde_json::from_value(record.clone()).map_err(|e| LookupError::Parse(e.to_string()))
    }
}
