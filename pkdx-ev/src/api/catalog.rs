//! Catalog listing endpoint

use axum::{extract::State, Json};
use serde::Serialize;

use crate::error::ApiResult;
use crate::models::CatalogEntry;
use crate::AppState;

/// Catalog response
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub count: usize,
    pub entries: Vec<CatalogEntry>,
}

/// GET /api/catalog
pub async fn get_catalog(State(state): State<AppState>) -> ApiResult<Json<CatalogResponse>> {
    let entries = state.catalog.fetch().await?;

    Ok(Json(CatalogResponse {
        count: entries.len(),
        entries,
    }))
}
