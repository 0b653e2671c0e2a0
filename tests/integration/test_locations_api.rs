use super::helpers::{expect_error, expect_status, get, read_json, spawn_app};
use axum::http::StatusCode;
use serde_json::Value;
use std::collections::HashSet;

#[tokio::test]
async fn lists_every_location_once() {
    let test = spawn_app();
    let body: Value = read_json(
        expect_status(get(&test.app, "/api/v1/locations").await, StatusCode::OK).await,
    )
    .await;

    let locations = body["locations"].as_array().unwrap();
    assert_eq!(body["total"], 80);
    assert_eq!(locations.len(), 80);

    let unique: HashSet<(String, String)> = locations
        .iter()
        .map(|l| {
            (
                l["state"].as_str().unwrap().to_string(),
                l["city"].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(unique.len(), 80);
    assert!(unique.contains(&("goa".to_string(), "panaji".to_string())));
}

#[tokio::test]
async fn location_lookup_hits_and_misses() {
    let test = spawn_app();
    let entry: Value = read_json(
        expect_status(
            get(&test.app, "/api/v1/locations/karnataka/hubli-dharwad").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    assert_eq!(entry["city"], "Hubli Dharwad");
    assert_eq!(entry["stateSlug"], "karnataka");

    let message = expect_error(
        get(&test.app, "/api/v1/locations/goa/mumbai").await,
        StatusCode::NOT_FOUND,
    )
    .await;
    assert_eq!(message, "Location not found");
}

#[tokio::test]
async fn related_locations_stay_in_state_when_possible() {
    let test = spawn_app();
    let related: Vec<Value> = read_json(
        expect_status(
            get(&test.app, "/api/v1/locations/maharashtra/mumbai/related").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;

    assert_eq!(related.len(), 6);
    assert!(related.iter().all(|e| e["stateSlug"] == "maharashtra"));
    assert!(related.iter().all(|e| e["citySlug"] != "mumbai"));
}

#[tokio::test]
async fn related_count_is_honoured() {
    let test = spawn_app();
    let related: Vec<Value> = read_json(
        expect_status(
            get(&test.app, "/api/v1/locations/goa/panaji/related?count=4").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;

    assert_eq!(related.len(), 4);
    assert_eq!(related[0]["stateSlug"], "goa");
    assert_eq!(related[1]["stateSlug"], "goa");
    assert_ne!(related[2]["stateSlug"], "goa");
}

#[tokio::test]
async fn freight_estimate_applies_rate_and_gst() {
    let test = spawn_app();
    let body: Value = read_json(
        expect_status(
            get(&test.app, "/api/v1/freight?quantity_kg=100&city=Pune&state=Maharashtra").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;

    assert_eq!(body["quantity_kg"], 100);
    assert_eq!(body["subtotal"], 4000.0);
    assert_eq!(body["gst"], 200.0);
    assert_eq!(body["total"], 4200.0);
    assert_eq!(body["total_display"], "₹4,200");
    assert!(
        body["whatsapp_url"]
            .as_str()
            .unwrap()
            .starts_with("https://wa.me/919000000000")
    );
}

#[tokio::test]
async fn freight_estimate_rejects_small_or_missing_quantities() {
    let test = spawn_app();
    let message = expect_error(
        get(&test.app, "/api/v1/freight?quantity_kg=49").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    assert_eq!(message, "Minimum quantity is 50kg");

    expect_error(get(&test.app, "/api/v1/freight").await, StatusCode::BAD_REQUEST).await;
    expect_error(
        get(&test.app, "/api/v1/freight?quantity_kg=lots").await,
        StatusCode::BAD_REQUEST,
    )
    .await;
}

#[tokio::test]
async fn search_matches_city_or_state_substrings() {
    let test = spawn_app();

    let body: Value = read_json(
        expect_status(
            get(&test.app, "/api/v1/locations/search?q=SUR").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    let paths: HashSet<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, HashSet::from(["/gujarat/surat", "/karnataka/mysuru"]));

    let body: Value = read_json(
        expect_status(
            get(&test.app, "/api/v1/locations/search?q=a").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    assert_eq!(body.as_array().unwrap().len(), 10);

    let body: Value = read_json(
        expect_status(get(&test.app, "/api/v1/locations/search").await, StatusCode::OK).await,
    )
    .await;
    assert_eq!(body, serde_json::json!([]));
}
