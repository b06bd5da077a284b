use axum::{Json, extract::State};
use tracing::info;

use emotionmap_db::models::MarkerRow;
use emotionmap_types::api::{CreateMarkerRequest, CreateMarkerResponse};
use emotionmap_types::models::{Marker, Stats};
use emotionmap_types::validation::validate_marker;

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

pub async fn list_markers(State(state): State<AppState>) -> ApiResult<Json<Vec<Marker>>> {
    let rows = state
        .with_store(|store| store.list_markers())
        .await
        .map_err(ApiError::storage("failed to read markers"))?;

    Ok(Json(rows.into_iter().map(marker_from_row).collect()))
}

pub async fn create_marker(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateMarkerRequest>,
) -> ApiResult<Json<CreateMarkerResponse>> {
    let marker = validate_marker(&req)?;
    let emotion = marker.emotion;

    let id = state
        .with_store(move |store| store.insert_marker(&marker))
        .await
        .map_err(ApiError::storage("failed to save marker"))?;

    info!("Marker {} created ({})", id, emotion);
    Ok(Json(CreateMarkerResponse { id }))
}

pub async fn get_stats(State(state): State<AppState>) -> ApiResult<Json<Stats>> {
    let stats = state
        .with_store(|store| store.compute_stats())
        .await
        .map_err(ApiError::storage("failed to compute statistics"))?;

    Ok(Json(stats))
}

fn marker_from_row(row: MarkerRow) -> Marker {
    Marker {
        id: row.id,
        lat: row.lat,
        lng: row.lng,
        emotion: row.emotion,
        comment: row.comment,
    }
}
