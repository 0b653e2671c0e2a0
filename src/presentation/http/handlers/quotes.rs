use crate::{
    application::submit_quote::{SubmitQuoteRequest, SubmitQuoteResponse, SubmitQuoteUseCase},
    presentation::http::{
        errors::AppError, middleware::client_ip::extract_client_ip, state::AppState,
    },
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

pub const STORE_NOT_CONFIGURED: &str = "Database not configured. Please contact support.";

/// `POST /api/quote`: stores a bulk-order lead from the quote form.
///
/// An unconfigured lead store is reported before the body is even parsed, so
/// the form shows the same message whatever was submitted.
pub async fn submit_quote(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<SubmitQuoteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SubmitQuoteResponse>), AppError> {
    let Some(repository) = state.quotes.clone() else {
        return Err(AppError::ServiceUnavailable(STORE_NOT_CONFIGURED.into()));
    };

    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(rejection = %rejection.body_text(), "unreadable quote body");
        AppError::BadRequest("Invalid request body".into())
    })?;

    let use_case = SubmitQuoteUseCase::new(
        repository,
        state.verifier.clone(),
        state.config.verification_required(),
    );
    let id = use_case
        .execute(request, extract_client_ip(&headers))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmitQuoteResponse { success: true, id }),
    ))
}
