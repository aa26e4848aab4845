//! Pokemon detail and evolution endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::error::ApiResult;
use crate::models::{StageDescriptor, TypeInfo};
use crate::services::PokemonDetailView;
use crate::AppState;

/// Detail response
///
/// `evolutions` is empty unless the lineage has more than one stage.
#[derive(Debug, Serialize)]
pub struct PokemonResponse {
    pub name: String,
    pub image: Option<String>,
    pub image_back: Option<String>,
    pub types: Vec<TypeInfo>,
    pub height_m: f64,
    pub weight_kg: f64,
    pub evolutions: Vec<StageDescriptor>,
}

impl From<PokemonDetailView> for PokemonResponse {
    fn from(view: PokemonDetailView) -> Self {
        let evolutions = if view.evolutions.is_displayable() {
            view.evolutions.into_inner()
        } else {
            Vec::new()
        };

        Self {
            name: view.name,
            image: view.image,
            image_back: view.image_back,
            types: view.types,
            height_m: view.height_m,
            weight_kg: view.weight_kg,
            evolutions,
        }
    }
}

/// Evolution-only response
#[derive(Debug, Serialize)]
pub struct EvolutionResponse {
    pub name: String,
    /// Whether a view should render the section
    pub displayable: bool,
    /// All resolved stages in pre-order
    pub stages: Vec<StageDescriptor>,
}

/// GET /api/pokemon/:name
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<PokemonResponse>> {
    let view = state.orchestrator.load(&name).await?;
    Ok(Json(view.into()))
}

/// GET /api/pokemon/:name/evolutions
pub async fn get_evolutions(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<Json<EvolutionResponse>> {
    let view = state.orchestrator.load(&name).await?;

    Ok(Json(EvolutionResponse {
        name: view.name,
        displayable: view.evolutions.is_displayable(),
        stages: view.evolutions.into_inner(),
    }))
}
