use crate::{
    application::submit_quote::BELOW_MINIMUM,
    domain::quote::{FreightEstimate, MIN_ORDER_KG, format_inr},
    presentation::{
        http::{errors::AppError, state::AppState},
        site::components::whatsapp_link,
    },
};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FreightQuery {
    pub quantity_kg: Option<u32>,
    pub city: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct FreightResponse {
    #[serde(flatten)]
    pub estimate: FreightEstimate,
    pub total_display: String,
    /// Present when both `city` and `state` were given.
    pub whatsapp_url: Option<String>,
}

/// `GET /api/v1/freight?quantity_kg=N`: indicative price for one quantity.
pub async fn freight_estimate(
    State(state): State<AppState>,
    query: Result<Query<FreightQuery>, QueryRejection>,
) -> Result<Json<FreightResponse>, AppError> {
    let Query(query) =
        query.map_err(|_| AppError::BadRequest("quantity_kg must be a whole number".into()))?;
    let quantity = query
        .quantity_kg
        .ok_or_else(|| AppError::BadRequest("quantity_kg is required".into()))?;
    if i64::from(quantity) < i64::from(MIN_ORDER_KG) {
        return Err(AppError::ValidationError(BELOW_MINIMUM.into()));
    }

    let estimate = FreightEstimate::for_quantity(quantity);
    let whatsapp_url = match (query.city.as_deref(), query.state.as_deref()) {
        (Some(city), Some(st)) if !city.trim().is_empty() && !st.trim().is_empty() => Some(
            whatsapp_link(&state.site, &estimate.quote_message(city.trim(), st.trim())),
        ),
        _ => None,
    };

    Ok(Json(FreightResponse {
        estimate,
        total_display: format!("₹{}", format_inr(estimate.total)),
        whatsapp_url,
    }))
}
