use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CreatedDto, SearchQuery};
use crate::api::validation::{normalize_search_term, validate_id};
use crate::domain::ArtistId;
use crate::domain::search::SearchResults;
use crate::models::artist::{Artist, ArtistDetail, ArtistFields, ArtistListing, ArtistSummary};

fn artist_id(id: i32) -> Result<ArtistId, ApiError> {
    validate_id("artist", id).map(ArtistId::new)
}

pub async fn list_artists(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ArtistListing>>>, ApiError> {
    let artists = state.artist_service().list().await?;
    Ok(Json(ApiResponse::success(artists)))
}

pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResults<ArtistSummary>>>, ApiError> {
    let results = state
        .artist_service()
        .search(normalize_search_term(&query.q), Utc::now())
        .await?;
    Ok(Json(ApiResponse::success(results)))
}

pub async fn get_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ArtistDetail>>, ApiError> {
    let detail = state
        .artist_service()
        .get_detail(artist_id(id)?, Utc::now())
        .await?;
    Ok(Json(ApiResponse::success(detail)))
}

pub async fn edit_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Artist>>, ApiError> {
    let artist = state.artist_service().get_artist(artist_id(id)?).await?;
    Ok(Json(ApiResponse::success(artist)))
}

pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<ArtistFields>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDto>>), ApiError> {
    let id = state.artist_service().create(fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedDto { id: id.value() })),
    ))
}

pub async fn update_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(fields): Json<ArtistFields>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.artist_service().update(artist_id(id)?, fields).await?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn delete_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.artist_service().delete(artist_id(id)?).await?;
    Ok(Json(ApiResponse::success(())))
}
