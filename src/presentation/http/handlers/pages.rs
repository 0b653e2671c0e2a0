//! HTML routes. Lookups that miss render the site's 404 page rather than the
//! JSON error body the API routes use.

use crate::presentation::{
    http::state::AppState,
    site::{SiteMetadata, pages},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

fn not_found_page(site: &SiteMetadata) -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(pages::not_found(site).into_string()),
    )
        .into_response()
}

pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(pages::home(&state.site, &state.dataset).into_string())
}

pub async fn available_locations(State(state): State<AppState>) -> Html<String> {
    Html(pages::available_locations(&state.site, &state.dataset).into_string())
}

pub async fn contact(State(state): State<AppState>) -> Html<String> {
    Html(pages::contact(&state.site).into_string())
}

pub async fn about(State(state): State<AppState>) -> Html<String> {
    Html(pages::about(&state.site).into_string())
}

pub async fn privacy_policy(State(state): State<AppState>) -> Html<String> {
    Html(pages::privacy_policy(&state.site).into_string())
}

pub async fn state_page(
    State(state): State<AppState>,
    Path(state_slug): Path<String>,
) -> Response {
    match state.dataset.find_state(&state_slug) {
        Some(group) => Html(pages::state_page(&state.site, &state.dataset, group).into_string())
            .into_response(),
        None => not_found_page(&state.site),
    }
}

pub async fn city_page(
    State(state): State<AppState>,
    Path((state_slug, city_slug)): Path<(String, String)>,
) -> Response {
    let Some(entry) = state.dataset.resolve(&state_slug, &city_slug) else {
        return not_found_page(&state.site);
    };

    match state
        .city_templates
        .render_city(&state.site, &state.dataset, entry)
    {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!(state = %state_slug, city = %city_slug, "city page render failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::not_found(&state.site).into_string()),
            )
                .into_response()
        }
    }
}

pub async fn fallback(State(state): State<AppState>) -> Response {
    not_found_page(&state.site)
}
