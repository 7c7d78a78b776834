use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::Utc;
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CreatedDto, SearchQuery};
use crate::api::validation::{normalize_search_term, validate_id};
use crate::domain::VenueId;
use crate::domain::search::SearchResults;
use crate::models::venue::{Venue, VenueArea, VenueDetail, VenueFields, VenueSummary};

fn venue_id(id: i32) -> Result<VenueId, ApiError> {
    validate_id("venue", id).map(VenueId::new)
}

pub async fn list_venues(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<VenueArea>>>, ApiError> {
    let areas = state.venue_service().list_grouped(Utc::now()).await?;
    Ok(Json(ApiResponse::success(areas)))
}

pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResults<VenueSummary>>>, ApiError> {
    let results = state
        .venue_service()
        .search(normalize_search_term(&query.q), Utc::now())
        .await?;
    Ok(Json(ApiResponse::success(results)))
}

pub async fn get_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<VenueDetail>>, ApiError> {
    let detail = state
        .venue_service()
        .get_detail(venue_id(id)?, Utc::now())
        .await?;
    Ok(Json(ApiResponse::success(detail)))
}

/// Current values for pre-filling the edit form.
pub async fn edit_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<Venue>>, ApiError> {
    let venue = state.venue_service().get_venue(venue_id(id)?).await?;
    Ok(Json(ApiResponse::success(venue)))
}

pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    Json(fields): Json<VenueFields>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDto>>), ApiError> {
    let id = state.venue_service().create(fields).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedDto { id: id.value() })),
    ))
}

pub async fn update_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Json(fields): Json<VenueFields>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.venue_service().update(venue_id(id)?, fields).await?;
    Ok(Json(ApiResponse::success(())))
}

pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.venue_service().delete(venue_id(id)?).await?;
    Ok(Json(ApiResponse::success(())))
}
