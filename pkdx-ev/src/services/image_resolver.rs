//! Stage image resolution
//!
//! Primary path asks the detail endpoint for the species and takes its
//! official artwork (or default sprite). Any lookup failure falls back to an
//! artwork URL built from the numeric id embedded in the species reference.

use pkdx_common::config::{TomlConfig, ARTWORK_ID_PLACEHOLDER, DEFAULT_ARTWORK_URL_TEMPLATE};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use super::pokeapi_client::{LookupError, SpeciesLookup};
use crate::models::{SpeciesRef, StageDescriptor};

/// Index of the id in `url.split('/')` for `.../api/v2/pokemon-species/{id}/`
pub const SPECIES_ID_SEGMENT: usize = 6;

/// Errors that drop a stage from the output
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Reference URL has no numeric id where one is expected
    #[error("Malformed species reference URL: {0}")]
    MalformedReference(String),
}

/// Resolver settings
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Fallback artwork URL containing `{id}`
    pub artwork_url_template: String,
}

impl ResolverConfig {
    pub fn from_toml(config: &TomlConfig) -> Self {
        Self {
            artwork_url_template: config.artwork_url_template.clone(),
        }
    }

    /// Interpolate a validated id into the template
    pub fn artwork_url(&self, id: &str) -> String {
        self.artwork_url_template.replace(ARTWORK_ID_PLACEHOLDER, id)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            artwork_url_template: DEFAULT_ARTWORK_URL_TEMPLATE.to_string(),
        }
    }
}

/// Numeric species id from a reference URL
///
/// The token must be a non-empty run of ASCII digits.
pub fn extract_species_id(reference_url: &str) -> Result<&str, ResolveError> {
    reference_url
        .split('/')
        .nth(SPECIES_ID_SEGMENT)
        .filter(|token| !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| ResolveError::MalformedReference(reference_url.to_string()))
}

/// Resolves display images for chain stages
pub struct StageImageResolver {
    lookup: Arc<dyn SpeciesLookup>,
    config: ResolverConfig,
}

impl StageImageResolver {
    pub fn new(lookup: Arc<dyn SpeciesLookup>, config: ResolverConfig) -> Self {
        Self { lookup, config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Image URL for a species reference
    ///
    /// Never fails on lookup errors; only a malformed reference URL combined
    /// with a failed lookup is an error.
    pub async fn resolve(&self, species: &SpeciesRef) -> Result<String, ResolveError> {
        match self.primary(species).await {
            Ok(url) => Ok(url),
            Err(e) => {
                debug!(
                    species = %species.name,
                    error = %e,
                    "Species lookup failed, deriving artwork URL from id"
                );
                self.fallback(species)
            }
        }
    }

    /// Resolve into a stage descriptor named verbatim from the reference
    pub async fn resolve_stage(
        &self,
        species: &SpeciesRef,
    ) -> Result<StageDescriptor, ResolveError> {
        let image_url = self.resolve(species).await?;
        Ok(StageDescriptor {
            name: species.name.clone(),
            image_url,
        })
    }

    async fn primary(&self, species: &SpeciesRef) -> Result<String, LookupError> {
        let detail = self
            .lookup
            .lookup_pokemon(&species.name.to_lowercase())
            .await?;

        detail
            .sprites
            .display_image()
            .map(str::to_string)
            .ok_or_else(|| LookupError::MissingSprite(species.name.clone()))
    }

    fn fallback(&self, species: &SpeciesRef) -> Result<String, ResolveError> {
        let id = extract_species_id(&species.url).map_err(|e| {
            warn!(species = %species.name, url = %species.url, "No species id in reference URL");
            e
        })?;
        Ok(self.config.artwork_url(id))
    }
}
