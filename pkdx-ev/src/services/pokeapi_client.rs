//! PokeAPI REST client
//!
//! Thin JSON client over the upstream API. One request per call, no
//! retries and no response caching.

use async_trait::async_trait;
use pkdx_common::config::TomlConfig;
use serde::de::DeserializeOwned;
use reqwest::Url;
use std::time::Duration;
use thiserror::Error;

use crate::models::{EvolutionChainDocument, PokemonDetail, ResourceList, SpeciesRecord};

const USER_AGENT: &str = concat!("pkdx-ev/", env!("CARGO_PKG_VERSION"));

/// Upstream lookup errors
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Record parsed but exposes no usable image
    #[error("No sprite available for {0}")]
    MissingSprite(String),
}

/// Per-species detail lookup
///
/// The image resolver depends on this seam rather than on the HTTP client.
#[async_trait]
pub trait SpeciesLookup: Send + Sync {
    /// Fetch the detail record for a lowercase species name
    async fn lookup_pokemon(&self, name: &str) -> Result<PokemonDetail, LookupError>;
}

/// Connection settings for [`PokeApiClient`]
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. `https://pokeapi.co/api/v2`
    pub api_base_url: String,
    /// Transport timeout applied to every request
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            api_base_url: config.normalized_api_base().to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_toml(&TomlConfig::default())
    }
}

/// PokeAPI client
pub struct PokeApiClient {
    http_client: reqwest::Client,
    base_url: String,
    api_root: Url,
}

impl PokeApiClient {
    pub fn new(config: ClientConfig) -> Result<Self, LookupError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let base_url = config.api_base_url.trim_end_matches('/').to_string();
        let api_root = Url::parse(&base_url)
            .map_err(|e| LookupError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if api_root.cannot_be_a_base() {
            return Err(LookupError::InvalidUrl(base_url));
        }

        Ok(Self {
            http_client,
            base_url,
            api_root,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/pokemon/{name}` with `name` encoded as exactly one segment
    fn pokemon_url(&self, name: &str) -> Result<Url, LookupError> {
        let mut url = self.api_root.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push("pokemon")
            .push(name);
        Ok(url)
    }

    /// First `limit` entries of the pokemon list
    pub async fn fetch_pokemon_list(&self, limit: u32) -> Result<ResourceList, LookupError> {
        let url = format!("{}/pokemon/?limit={}", self.base_url, limit);
        self.get_json(&url).await
    }

    /// Detail record at an absolute URL taken from a list response
    pub async fn fetch_pokemon_at(&self, url: &str) -> Result<PokemonDetail, LookupError> {
        self.get_json(url).await
    }

    /// Species record at an absolute URL taken from a detail record
    pub async fn fetch_species(&self, url: &str) -> Result<SpeciesRecord, LookupError> {
        self.get_json(url).await
    }

    /// Evolution chain document at an absolute URL taken from a species record
    pub async fn fetch_evolution_chain(
        &self,
        url: &str,
    ) -> Result<EvolutionChainDocument, LookupError> {
        self.get_json(url).await
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, LookupError> {
        tracing::debug!(url = %url, "Querying PokeAPI");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(url.to_string()));
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(LookupError::Api(status.as_u16(), error_text));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| LookupError::Parse(e.to_string()))
    }
}

#[async_trait]
impl SpeciesLookup for PokeApiClient {
    async fn lookup_pokemon(&self, name: &str) -> Result<PokemonDetail, LookupError> {
        let url = self.pokemon_url(name)?;
        let detail: PokemonDetail = self.get_json(url.as_str()).await?;

        tracing::debug!(name = %detail.name, "Retrieved pokemon detail");
        Ok(detail)
    }
}
