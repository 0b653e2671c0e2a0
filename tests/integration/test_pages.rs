use super::helpers::{expect_status, get, read_json, read_text, spawn_app};
use axum::http::{StatusCode, header};
use serde_json::Value;

#[tokio::test]
async fn city_page_renders_for_every_known_location() {
    let test = spawn_app();

    let res = expect_status(get(&test.app, "/maharashtra/pune").await, StatusCode::OK).await;
    assert!(res.headers().contains_key("x-request-id"));
    let html = read_text(res).await;

    assert!(html.contains("Bulk CTC Tea Supplier in Pune"));
    assert!(html.contains("\"@type\":\"WholesaleStore\""));
    assert!(html.contains("\"@type\":\"FAQPage\""));
    assert!(html.contains("\"@type\":\"BreadcrumbList\""));
    assert!(html.contains("https://bulkchai.test/maharashtra/pune"));
    assert!(!html.contains("{{"));
}

#[tokio::test]
async fn ampersand_state_resolves_through_its_slug() {
    let test = spawn_app();
    let html = read_text(
        expect_status(
            get(&test.app, "/jammu-and-kashmir/srinagar").await,
            StatusCode::OK,
        )
        .await,
    )
    .await;
    assert!(html.contains("Srinagar"));
    assert!(html.contains("Jammu &amp; Kashmir"));
}

#[tokio::test]
async fn unknown_locations_render_the_404_page() {
    let test = spawn_app();

    for uri in ["/goa/atlantis", "/atlantis", "/maharashtra/panaji", "/a/b/c"] {
        let res = expect_status(get(&test.app, uri).await, StatusCode::NOT_FOUND).await;
        let html = read_text(res).await;
        assert!(html.contains("Page Not Found"), "{uri} did not render 404 page");
        assert!(html.contains("noindex"));
    }
}

#[tokio::test]
async fn state_page_lists_its_cities() {
    let test = spawn_app();
    let html = read_text(expect_status(get(&test.app, "/goa").await, StatusCode::OK).await).await;
    for city in ["/goa/panaji", "/goa/margao", "/goa/vasco-da-gama"] {
        assert!(html.contains(city), "missing link to {city}");
    }
}

#[tokio::test]
async fn static_pages_render() {
    let test = spawn_app();
    for uri in [
        "/",
        "/available-locations",
        "/about",
        "/contact-us",
        "/privacy-policy",
    ] {
        let res = expect_status(get(&test.app, uri).await, StatusCode::OK).await;
        let content_type = res.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"), "{uri}: {content_type}");
    }
}

#[tokio::test]
async fn footer_links_sorted_states_and_popular_cities() {
    let test = spawn_app();
    let html = read_text(expect_status(get(&test.app, "/contact-us").await, StatusCode::OK).await)
        .await;

    let footer = &html[html.find("<footer").unwrap()..];
    assert!(footer.contains("Popular Delivery Locations"));
    assert!(footer.contains(r#"<a href="/andhra-pradesh">Andhra Pradesh</a>"#));
    assert!(footer.contains(r#"<a href="/gujarat/ahmedabad">Bulk Tea in Ahmedabad</a>"#));
    assert!(footer.contains(r#"<a href="/gujarat/surat">Bulk Tea in Surat</a>"#));
    assert!(!footer.contains("/gujarat/vadodara"));
    assert!(footer.contains(r#"href="/available-locations""#));
}

#[tokio::test]
async fn sitemap_lists_static_state_and_city_routes() {
    let test = spawn_app();
    let res = expect_status(get(&test.app, "/sitemap.xml").await, StatusCode::OK).await;
    assert!(
        res.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("application/xml")
    );
    let xml = read_text(res).await;

    assert!(xml.contains("<loc>https://bulkchai.test/</loc>"));
    assert!(xml.contains("<loc>https://bulkchai.test/contact-us</loc>"));
    assert!(xml.contains("<loc>https://bulkchai.test/about</loc>"));
    assert!(xml.contains("<loc>https://bulkchai.test/privacy-policy</loc>"));
    assert!(xml.contains("<loc>https://bulkchai.test/jammu-and-kashmir</loc>"));
    assert!(xml.contains("<loc>https://bulkchai.test/goa/vasco-da-gama</loc>"));
    assert_eq!(xml.matches("<lastmod>").count(), xml.matches("<url>").count());
    // 5 static routes, 19 states, 80 cities
    assert_eq!(xml.matches("<url>").count(), 5 + 19 + 80);
}

#[tokio::test]
async fn robots_points_at_the_sitemap() {
    let test = spawn_app();
    let body = read_text(expect_status(get(&test.app, "/robots.txt").await, StatusCode::OK).await)
        .await;
    assert!(body.contains("Sitemap: https://bulkchai.test/sitemap.xml"));
}

#[tokio::test]
async fn health_reports_dataset_and_store() {
    let test = spawn_app();
    let body: Value =
        read_json(expect_status(get(&test.app, "/health").await, StatusCode::OK).await).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["lead_store"], "up");
    assert_eq!(body["locations"]["states"], 19);
    assert_eq!(body["locations"]["cities"], 80);
}
