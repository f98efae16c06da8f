use super::*;
use axum::http::HeaderValue;
use axum::http::header::COOKIE;

// =============================================================================
// backend_target
// =============================================================================

#[test]
fn backend_target_joins_base_and_path() {
    assert_eq!(backend_target("http://127.0.0.1:8080", "users", None), "http://127.0.0.1:8080/users");
}

#[test]
fn backend_target_avoids_double_slash() {
    assert_eq!(
        backend_target("http://backend.test/v1/", "/auth/register", None),
        "http://backend.test/v1/auth/register"
    );
}

#[test]
fn backend_target_appends_query() {
    assert_eq!(
        backend_target("http://backend.test", "users", Some("page=2&size=10")),
        "http://backend.test/users?page=2&size=10"
    );
}

#[test]
fn backend_target_ignores_empty_query() {
    assert_eq!(backend_target("http://backend.test", "profile", Some("")), "http://backend.test/profile");
}

// =============================================================================
// forwarded_headers
// =============================================================================

#[test]
fn forwarded_headers_keeps_auth_and_content_headers() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc"));
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let out = forwarded_headers(&headers);
    assert_eq!(out.len(), 3);
    assert_eq!(out.get(AUTHORIZATION).unwrap(), "Bearer abc");
    assert_eq!(out.get(CONTENT_TYPE).unwrap(), "application/json");
}

#[test]
fn forwarded_headers_drops_everything_else() {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static("sid=1"));
    headers.insert("host", HeaderValue::from_static("localhost:3000"));

    assert!(forwarded_headers(&headers).is_empty());
}

#[test]
fn proxy_error_maps_to_bad_gateway() {
    // Building a request with an invalid URL yields a reqwest::Error without I/O.
    let err = reqwest::Client::new().get("not a url").build().unwrap_err();
    let response = ProxyError::from(err).into_response();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
}
