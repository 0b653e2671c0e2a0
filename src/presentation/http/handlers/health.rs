use crate::presentation::http::state::AppState;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct LocationCounts {
    states: usize,
    cities: usize,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    lead_store: &'static str,
    locations: LocationCounts,
    version: &'static str,
}

/// Pages are served from memory, so a lead store outage only degrades the
/// service; the check stays 200 unless the location table is empty.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let lead_store = match &state.quotes {
        None => "unconfigured",
        Some(repo) => match repo.ping().await {
            Ok(()) => "up",
            Err(e) => {
                tracing::error!("Health check failed: lead store unreachable: {}", e);
                "down"
            }
        },
    };

    let locations = LocationCounts {
        states: state.dataset.state_count(),
        cities: state.dataset.city_count(),
    };

    let status = match (locations.cities, lead_store) {
        (0, _) => "unhealthy",
        (_, "down") => "degraded",
        _ => "healthy",
    };

    let code = if status == "unhealthy" {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (
        code,
        Json(HealthResponse {
            status,
            lead_store,
            locations,
            version: env!("CARGO_PKG_VERSION"),
        }),
    )
}
