//! Catalog entries and the type colour palette

use serde::Serialize;

use super::pokemon::PokemonDetail;

/// Card colour for a missing or unknown type
pub const FALLBACK_COLOR: &str = "#fff";

/// Background colour per creature type
const TYPE_COLORS: &[(&str, &str)] = &[
    ("fire", "#F08030"),
    ("water", "#6890F0"),
    ("grass", "#78C850"),
    ("electric", "#F8D030"),
    ("psychic", "#F85888"),
    ("ice", "#98D8D8"),
    ("dragon", "#7038F8"),
    ("dark", "#705848"),
    ("fairy", "#EE99AC"),
    ("normal", "#A8A878"),
    ("fighting", "#C03028"),
    ("flying", "#A890F0"),
    ("poison", "#A040A0"),
    ("ground", "#E0C068"),
    ("rock", "#B8A038"),
    ("bug", "#A8B820"),
    ("ghost", "#705898"),
    ("steel", "#B8B8D0"),
];

/// Palette colour for a type name (case-insensitive)
pub fn type_color(type_name: &str) -> &'static str {
    TYPE_COLORS
        .iter()
        .find(|(t, _)| t.eq_ignore_ascii_case(type_name))
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Type of a creature, normalized to `{ name, url }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    pub name: String,
    pub url: String,
}

/// One row of the browsable catalog
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Default front sprite
    pub image: Option<String>,
    /// Default back sprite
    pub image_back: Option<String>,
    pub types: Vec<TypeInfo>,
    /// Card colour from the primary type
    pub color: &'static str,
}

impl CatalogEntry {
    /// Build an entry from a detail record, keeping the list name
    pub fn from_detail(name: impl Into<String>, detail: &PokemonDetail) -> Self {
        let types = type_infos(detail);
        let color = types
            .first()
            .map(|t| type_color(&t.name))
            .unwrap_or(FALLBACK_COLOR);

        Self {
            name: name.into(),
            image: detail.sprites.front_default.clone(),
            image_back: detail.sprites.back_default.clone(),
            types,
            color,
        }
    }
}

/// Types of a detail record in slot order
pub fn type_infos(detail: &PokemonDetail) -> Vec<TypeInfo> {
    let mut slots: Vec<_> = detail.types.iter().collect();
    slots.sort_by_key(|t| t.slot.unwrap_or(u8::MAX));
    slots
        .into_iter()
        .map(|t| TypeInfo {
            name: t.type_ref.name.clone(),
            url: t.type_ref.url.clone(),
        })
        .collect()
}
