//! System endpoints: liveness and a status summary.

use axum::{Json, extract::State};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

use super::{ApiError, ApiResponse, AppState, SystemStatus};

#[derive(Debug, Serialize)]
pub struct HealthLiveResponse {
    pub status: &'static str,
}

/// `GET /api/system/health/live`
pub async fn health_live() -> Json<HealthLiveResponse> {
    Json(HealthLiveResponse { status: "alive" })
}

/// Returns version, uptime, database reachability and record counts.
///
/// # Endpoint
/// `GET /api/system/status`
pub async fn get_status(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ApiResponse<SystemStatus>>, ApiError> {
    let store = state.store();

    let database_ok = match store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!("Database ping failed: {}", e);
            false
        }
    };

    let (venues, artists, shows) = if database_ok {
        (
            store.venue_count().await.map_err(|e| ApiError::internal(e.to_string()))?,
            store.artist_count().await.map_err(|e| ApiError::internal(e.to_string()))?,
            store.show_count().await.map_err(|e| ApiError::internal(e.to_string()))?,
        )
    } else {
        (0, 0, 0)
    };

    Ok(Json(ApiResponse::success(SystemStatus {
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime: state.start_time.elapsed().as_secs(),
        database_ok,
        venues,
        artists,
        shows,
    })))
}
