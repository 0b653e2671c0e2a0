use axum::http::HeaderMap;

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Caller's apparent address as reported by the fronting proxy:
/// `cf-connecting-ip`, then `x-real-ip`, then the first `x-forwarded-for` hop.
pub fn extract_client_ip(headers: &HeaderMap) -> Option<String> {
    header_value(headers, "cf-connecting-ip")
        .or_else(|| header_value(headers, "x-real-ip"))
        .or_else(|| {
            header_value(headers, "x-forwarded-for")
                .and_then(|s| s.split(',').next())
                .map(str::trim)
                .filter(|s| !s.is_empty())
        })
        .map(str::to_string)
}
