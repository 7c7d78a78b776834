use axum::{Json, extract::State, http::StatusCode};
use std::sync::Arc;

use super::{ApiError, ApiResponse, AppState, CreateShowRequest, CreatedDto};
use crate::api::validation::validate_id;
use crate::domain::{ArtistId, VenueId};
use crate::models::show::{NewShow, ShowListing, parse_start_time};

pub async fn list_shows(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<Vec<ShowListing>>>, ApiError> {
    let shows = state.show_service().list().await?;
    Ok(Json(ApiResponse::success(shows)))
}

pub async fn create_show(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateShowRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedDto>>), ApiError> {
    let show = NewShow {
        artist_id: ArtistId::new(validate_id("artist", request.artist_id)?),
        venue_id: VenueId::new(validate_id("venue", request.venue_id)?),
        start_time: parse_start_time(&request.start_time)?,
    };

    let id = state.show_service().create(show).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(CreatedDto { id: id.value() })),
    ))
}
