use super::helpers::{build_config, expect_status, get, read_text, spawn_app};
use axum::http::StatusCode;
use bulk_chai::{
    application::generate_pages::{GeneratePagesRequest, GeneratePagesUseCase},
    infrastructure::dataset::loader,
    presentation::site::SiteMetadata,
};
use chrono::NaiveDate;
use std::fs;

#[tokio::test]
async fn generated_city_pages_match_served_pages() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = loader::load_embedded().unwrap();
    let site = SiteMetadata::from_config(&build_config(false)).with_locations(&dataset);

    let report = GeneratePagesUseCase::new(&site, &dataset)
        .execute(&GeneratePagesRequest {
            out_dir: dir.path().to_path_buf(),
            lastmod: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            skip_existing: false,
            expand_cities: true,
        })
        .unwrap();

    // 6 site pages, 19 states x 2, 80 cities, sitemap and robots
    assert_eq!(report.created.len(), 6 + 19 * 2 + 80 + 2);

    let test = spawn_app();
    for path in [
        "/goa/panaji",
        "/jammu-and-kashmir/jammu",
        "/karnataka/hubli-dharwad",
        "/about",
        "/privacy-policy",
    ] {
        let served =
            read_text(expect_status(get(&test.app, path).await, StatusCode::OK).await).await;
        let written =
            fs::read_to_string(dir.path().join(&path[1..]).join("index.html")).unwrap();
        assert_eq!(served, written, "{path} differs between server and generator");
    }
}
