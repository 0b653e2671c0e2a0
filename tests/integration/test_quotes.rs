use super::helpers::{
    StoreMode, TestOptions, VALID_TOKEN, expect_error, expect_status, post_json, read_json,
    send, spawn_app, spawn_app_with,
};
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};

fn valid_quote() -> Value {
    json!({
        "name": "Asha Rao",
        "email": "asha@chaicorner.in",
        "phone": "+91 98450 00000",
        "company_name": "",
        "city": "Pune",
        "state": "Maharashtra",
        "quantity_kg": 50,
        "estimated_amount": 2100.0,
        "message": "Weekly supply for three outlets",
        "source_page": "/maharashtra/pune"
    })
}

#[tokio::test]
async fn valid_quote_is_stored_and_returns_its_id() {
    let test = spawn_app();

    let res = expect_status(
        post_json(&test.app, "/api/quote", &valid_quote()).await,
        StatusCode::CREATED,
    )
    .await;
    let body: Value = read_json(res).await;
    assert_eq!(body["success"], true);

    let quotes = test.quotes.expect("store configured");
    let stored = quotes.stored.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(body["id"], stored[0].id.to_string());
    assert_eq!(stored[0].quantity_kg, 50);
    assert_eq!(stored[0].company_name, None);
    assert_eq!(stored[0].source_page.as_deref(), Some("/maharashtra/pune"));
}

#[tokio::test]
async fn versioned_alias_accepts_the_same_payload() {
    let test = spawn_app();
    expect_status(
        post_json(&test.app, "/api/v1/quotes", &valid_quote()).await,
        StatusCode::CREATED,
    )
    .await;
    assert_eq!(test.quotes.unwrap().count(), 1);
}

#[tokio::test]
async fn forty_nine_kilograms_is_rejected() {
    let test = spawn_app();
    let mut quote = valid_quote();
    quote["quantity_kg"] = json!(49);

    let message = expect_error(
        post_json(&test.app, "/api/quote", &quote).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(message, "Minimum quantity is 50kg");
    assert_eq!(test.quotes.unwrap().count(), 0);
}

#[tokio::test]
async fn missing_email_is_rejected() {
    let test = spawn_app();
    let mut quote = valid_quote();
    quote.as_object_mut().unwrap().remove("email");

    let message = expect_error(
        post_json(&test.app, "/api/quote", &quote).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(message, "Missing required fields");
    assert_eq!(test.quotes.unwrap().count(), 0);
}

#[tokio::test]
async fn fractional_quantity_is_rejected() {
    let test = spawn_app();
    let mut quote = valid_quote();
    quote["quantity_kg"] = json!(50.5);

    expect_error(
        post_json(&test.app, "/api/quote", &quote).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let test = spawn_app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/quote")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();

    expect_error(send(&test.app, req).await, StatusCode::BAD_REQUEST).await;
}

#[tokio::test]
async fn unconfigured_store_answers_503() {
    let test = spawn_app_with(TestOptions {
        store: None,
        ..TestOptions::default()
    });

    let message = expect_error(
        post_json(&test.app, "/api/quote", &valid_quote()).await,
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;
    assert!(message.contains("Database not configured"));
}

#[tokio::test]
async fn unreachable_store_answers_503_without_details() {
    let test = spawn_app_with(TestOptions {
        store: Some(StoreMode::Unreachable),
        ..TestOptions::default()
    });

    let message = expect_error(
        post_json(&test.app, "/api/quote", &valid_quote()).await,
        StatusCode::SERVICE_UNAVAILABLE,
    )
    .await;
    assert!(!message.contains("pool"));
}

#[tokio::test]
async fn storage_failure_answers_generic_500() {
    let test = spawn_app_with(TestOptions {
        store: Some(StoreMode::Broken),
        ..TestOptions::default()
    });

    let message = expect_error(
        post_json(&test.app, "/api/quote", &valid_quote()).await,
        StatusCode::INTERNAL_SERVER_ERROR,
    )
    .await;
    assert_eq!(message, "Failed to submit quote");
}

#[tokio::test]
async fn required_verification_rejects_missing_token() {
    let test = spawn_app_with(TestOptions {
        verification_required: true,
        ..TestOptions::default()
    });

    let message = expect_error(
        post_json(&test.app, "/api/quote", &valid_quote()).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(message, "Bot verification required");
    assert!(test.verifier.calls.lock().unwrap().is_empty());
    assert_eq!(test.quotes.unwrap().count(), 0);
}

#[tokio::test]
async fn required_verification_rejects_bad_token() {
    let test = spawn_app_with(TestOptions {
        verification_required: true,
        ..TestOptions::default()
    });
    let mut quote = valid_quote();
    quote["turnstile_token"] = json!("forged");

    let message = expect_error(
        post_json(&test.app, "/api/quote", &quote).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(message, "Bot verification failed");
    assert_eq!(test.quotes.unwrap().count(), 0);
}

#[tokio::test]
async fn valid_token_is_forwarded_with_client_address() {
    let test = spawn_app_with(TestOptions {
        verification_required: true,
        ..TestOptions::default()
    });
    let mut quote = valid_quote();
    quote["turnstile_token"] = json!(VALID_TOKEN);

    expect_status(
        post_json(&test.app, "/api/quote", &quote).await,
        StatusCode::CREATED,
    )
    .await;

    let calls = test.verifier.calls.lock().unwrap();
    assert_eq!(
        *calls,
        vec![(VALID_TOKEN.to_string(), Some("203.0.113.9".to_string()))]
    );
    assert_eq!(test.quotes.unwrap().count(), 1);
}
