//! REST API helpers for communicating with the LaundryMart backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Errors are not classified for the user. A non-2xx response carries the
//! backend's body text unchanged so forms can display it verbatim; anything
//! else falls back to a caller-chosen generic message via `message_or`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

use super::types::{AuthResponse, LoginRequest, NewUser, ProfileUpdate, User};

/// Same-origin prefix; the SSR host forwards it to the backend.
pub const API_BASE: &str = "/api";

/// Failure of a single API round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-success status.
    Server { status: u16, body: String },
    /// The request never produced a usable response.
    Transport(String),
    /// Called outside the browser.
    Unavailable,
}

impl ApiError {
    /// The backend's error payload when it sent one, otherwise `fallback`.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Server { body, .. } if !body.trim().is_empty() => body.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Server { status, body } if body.trim().is_empty() => write!(f, "request failed: {status}"),
            Self::Server { body, .. } => f.write_str(body),
            Self::Transport(e) => write!(f, "network error: {e}"),
            Self::Unavailable => f.write_str("not available on server"),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn endpoint(path: &str) -> String {
    format!("{API_BASE}/{}", path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
fn with_auth(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session::browser().token() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
fn transport(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(feature = "hydrate")]
async fn check_status(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    log::warn!("api {} -> {status}", resp.url());
    Err(ApiError::Server { status, body })
}

#[cfg(feature = "hydrate")]
async fn read_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let resp = check_status(resp).await?;
    resp.json::<T>().await.map_err(transport)
}

/// Register a new account via `POST /auth/register`.
///
/// # Errors
///
/// Returns the backend's error payload on a non-2xx status, or a transport error.
pub async fn register(new_user: &NewUser) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(&endpoint("auth/register")))
            .json(new_user)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        check_status(resp).await?;
        log::info!("registered user {}", new_user.username);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_user;
        Err(ApiError::Unavailable)
    }
}

/// List all accounts via `GET /users`.
///
/// # Errors
///
/// Returns the backend's error payload on a non-2xx status, or a transport/decode error.
pub async fn get_users() -> Result<Vec<User>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&endpoint("users")))
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Update the current user's profile via `PUT /profile`, returning the stored user.
///
/// # Errors
///
/// Returns the backend's error payload on a non-2xx status, or a transport/decode error.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::put(&endpoint("profile")))
            .json(update)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = update;
        Err(ApiError::Unavailable)
    }
}

/// Authenticate via `POST /auth/login`.
///
/// # Errors
///
/// Returns the backend's error payload on a non-2xx status, or a transport/decode error.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("auth/login"))
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        read_json(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}
