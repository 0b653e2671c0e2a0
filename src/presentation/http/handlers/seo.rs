use crate::presentation::{
    http::{errors::AppError, state::AppState},
    site::sitemap::{robots_txt, sitemap_xml},
};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
};

/// `GET /sitemap.xml`, stamped with today's date as `lastmod`.
pub async fn sitemap(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let today = chrono::Utc::now().date_naive();
    let xml = sitemap_xml(&state.site, &state.dataset, today)?;
    Ok(([(header::CONTENT_TYPE, "application/xml; charset=utf-8")], xml))
}

pub async fn robots(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        robots_txt(&state.site),
    )
}
