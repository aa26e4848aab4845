//! Upstream REST records: pokemon detail, species, resource lists

use serde::{Deserialize, Serialize};

/// `{ name, url }` pair used throughout the upstream API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NamedResource {
    /// Lowercase identifier
    pub name: String,
    /// Absolute URL of the referenced record
    pub url: String,
}

/// Reference carrying only a URL (e.g. `evolution_chain`)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UrlResource {
    pub url: String,
}

/// Paginated list response (`/pokemon/?limit=N`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceList {
    #[serde(default)]
    pub count: Option<u32>,
    pub results: Vec<NamedResource>,
}

/// Pokemon detail record (`/pokemon/{name}`)
///
/// Only `name` and `sprites` are required; the rest default so a partial
/// record still serves image lookups.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PokemonDetail {
    pub name: String,
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Height in decimetres
    #[serde(default)]
    pub height: u32,
    /// Weight in hectograms
    #[serde(default)]
    pub weight: u32,
    /// Species record reference (leads to the evolution chain)
    #[serde(default)]
    pub species: Option<NamedResource>,
}

impl PokemonDetail {
    /// Height in metres
    pub fn height_m(&self) -> f64 {
        f64::from(self.height) / 10.0
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight) / 10.0
    }
}

/// Sprite URLs of a detail record
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

/// Alternate sprite sets under `sprites.other`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<ArtworkSprite>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ArtworkSprite {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Sprites {
    /// High-resolution official artwork, if the record has one
    pub fn official_artwork(&self) -> Option<&str> {
        self.other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .filter(|url| !url.is_empty())
    }

    /// Official artwork, else the default front sprite
    pub fn display_image(&self) -> Option<&str> {
        self.official_artwork()
            .or_else(|| self.front_default.as_deref().filter(|url| !url.is_empty()))
    }
}

/// Entry of a detail record's `types` list
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: Option<u8>,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// Species record (`/pokemon-species/{id}/`)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpeciesRecord {
    #[serde(default)]
    pub name: Option<String>,
    /// Absent for species without a chain document
    #[serde(default)]
    pub evolution_chain: Option<UrlResource>,
}
