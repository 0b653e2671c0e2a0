use crate::{
    domain::location::{DEFAULT_RELATED_COUNT, LocationEntry, LocationSlugs, SEARCH_RESULT_LIMIT},
    presentation::http::{errors::AppError, state::AppState},
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};

const MAX_RELATED: usize = 50;

#[derive(Debug, Serialize)]
pub struct LocationListResponse {
    pub total: usize,
    pub locations: Vec<LocationSlugs>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedQuery {
    #[serde(default = "default_related_count")]
    pub count: usize,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
}

/// One location-finder suggestion.
#[derive(Debug, Serialize)]
pub struct LocationMatch {
    pub city: String,
    pub state: String,
    pub path: String,
}

fn default_related_count() -> usize {
    DEFAULT_RELATED_COUNT
}

fn resolve<'a>(
    state: &'a AppState,
    state_slug: &str,
    city_slug: &str,
) -> Result<&'a LocationEntry, AppError> {
    state
        .dataset
        .resolve(state_slug, city_slug)
        .ok_or_else(|| AppError::NotFound("Location not found".into()))
}

/// `GET /api/v1/locations`: every `(state, city)` slug pair a page exists for.
pub async fn list_locations(State(state): State<AppState>) -> Json<LocationListResponse> {
    let locations = state.dataset.location_slugs();
    Json(LocationListResponse {
        total: locations.len(),
        locations,
    })
}

pub async fn get_location(
    State(state): State<AppState>,
    Path((state_slug, city_slug)): Path<(String, String)>,
) -> Result<Json<LocationEntry>, AppError> {
    resolve(&state, &state_slug, &city_slug)
        .cloned()
        .map(Json)
}

pub async fn related_locations(
    State(state): State<AppState>,
    Path((state_slug, city_slug)): Path<(String, String)>,
    Query(query): Query<RelatedQuery>,
) -> Result<Json<Vec<LocationEntry>>, AppError> {
    let entry = resolve(&state, &state_slug, &city_slug)?;
    let related = state
        .dataset
        .related_to(entry, query.count.min(MAX_RELATED))
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(related))
}

/// `GET /api/v1/locations/search?q=`: city or state substring matches for the
/// location finder.
pub async fn search_locations(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<LocationMatch>> {
    let matches = state
        .dataset
        .search(&query.q, SEARCH_RESULT_LIMIT)
        .into_iter()
        .map(|e| LocationMatch {
            city: e.city.clone(),
            state: e.state.clone(),
            path: e.path(),
        })
        .collect();
    Json(matches)
}
