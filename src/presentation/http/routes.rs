use super::{
    handlers::{freight, health, locations, pages, quotes, seo},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        // Lead capture
        .route("/api/quote", post(quotes::submit_quote))
        .route("/api/v1/quotes", post(quotes::submit_quote))
        // Pricing
        .route("/api/v1/freight", get(freight::freight_estimate))
        // Locations
        .route("/api/v1/locations", get(locations::list_locations))
        .route(
            "/api/v1/locations/search",
            get(locations::search_locations),
        )
        .route(
            "/api/v1/locations/{state}/{city}",
            get(locations::get_location),
        )
        .route(
            "/api/v1/locations/{state}/{city}/related",
            get(locations::related_locations),
        );

    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/available-locations", get(pages::available_locations))
        .route("/contact-us", get(pages::contact))
        .route("/about", get(pages::about))
        .route("/privacy-policy", get(pages::privacy_policy))
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/robots.txt", get(seo::robots))
        .route("/{state}", get(pages::state_page))
        .route("/{state}/{city}", get(pages::city_page));

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        .merge(api_routes)
        .merge(page_routes)
        .fallback(pages::fallback)
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
