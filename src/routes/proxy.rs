//! `/api/*` forwarding to the REST backend.
//!
//! The browser talks to this host only; requests are replayed against
//! `BACKEND_URL` with the same method, query, body, and auth header, and the
//! backend's status and body come back unchanged so the UI can show the
//! server's own error text.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Request headers replayed to the backend.
const FORWARDED_HEADERS: [HeaderName; 3] = [CONTENT_TYPE, ACCEPT, AUTHORIZATION];

/// Errors produced while forwarding a request.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or the exchange failed mid-flight.
    #[error("backend request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

/// Answered with an empty 502 so callers show their own fallback message;
/// a non-empty body is reserved for text the backend itself produced.
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "api forward failed");
        StatusCode::BAD_GATEWAY.into_response()
    }
}

/// Absolute backend URL for a forwarded path and optional raw query.
pub(crate) fn backend_target(base: &str, path: &str, query: Option<&str>) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    if let Some(q) = query.filter(|q| !q.is_empty()) {
        url.push('?');
        url.push_str(q);
    }
    url
}

/// Subset of `headers` that is replayed to the backend.
pub(crate) fn forwarded_headers(headers: &HeaderMap) -> HeaderMap {
    let mut out = HeaderMap::new();
    for name in &FORWARDED_HEADERS {
        for value in headers.get_all(name) {
            out.append(name.clone(), value.clone());
        }
    }
    out
}

/// `ANY /api/{*path}`: replay the request against the backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let url = backend_target(&state.config.backend_url, &path, query.as_deref());
    tracing::debug!(%method, %url, "forwarding api request");

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(forwarded_headers(&headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let bytes = upstream.bytes().await?;

    if status.is_server_error() {
        tracing::warn!(%method, %url, %status, "backend returned server error");
    }

    let mut response = (status, bytes).into_response();
    if let Some(ct) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, ct);
    }
    Ok(response)
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
