//! REST and auth-provider calls.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): stubs that report the call as unavailable.
//!
//! ERROR HANDLING
//! ==============
//! Every response is reduced to `(status, body)` and handed to a pure
//! `parse_*` function, so status classification and body decoding are
//! tested without a browser. Nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{BookingConfirmation, BookingRequest, ErrorBody, Professional, SessionEntry, User};
use crate::config::ClientConfig;
use crate::error::ApiError;

pub const PROFESSIONALS_PATH: &str = "/api/professionals";
pub const BOOKINGS_PATH: &str = "/api/bookings";
pub const SESSION_PATH: &str = "/.auth/me";
pub const LOGIN_PATH: &str = "/.auth/login/aad";
pub const LOGOUT_PATH: &str = "/.auth/logout";

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// The `message` field of an API error body, if present and non-blank.
#[must_use]
pub fn error_message_from_body(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .map(|m| m.trim().to_owned())
        .filter(|m| !m.is_empty())
}

/// Interpret a `GET /api/professionals` response.
///
/// # Errors
///
/// `Http` on a non-success status, `Decode` if the body is not a list of
/// professionals.
pub fn parse_professionals(status: u16, body: &str) -> Result<Vec<Professional>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Http { status });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a `POST /api/bookings` response.
///
/// # Errors
///
/// `Validation` when a non-success body carries a `message`, otherwise
/// `Http`; `Decode` if a success body is not JSON.
pub fn parse_booking(status: u16, body: &str) -> Result<BookingConfirmation, ApiError> {
    if !is_success(status) {
        return Err(match error_message_from_body(body) {
            Some(message) => ApiError::Validation(message),
            None => ApiError::Http { status },
        });
    }
    if body.trim().is_empty() {
        return Ok(BookingConfirmation::default());
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Interpret a `GET /.auth/me` response.
///
/// A 401 means "no session" and yields `Ok(None)`.
///
/// # Errors
///
/// `AuthUnavailable` for any other non-success status or an unreadable body.
pub fn parse_session(status: u16, body: &str) -> Result<Option<User>, ApiError> {
    if status == 401 {
        return Ok(None);
    }
    if !is_success(status) {
        return Err(ApiError::AuthUnavailable(format!("status {status}")));
    }
    let entries: Vec<SessionEntry> =
        serde_json::from_str(body).map_err(|e| ApiError::AuthUnavailable(e.to_string()))?;
    Ok(User::from_session(&entries))
}

/// Provider login URL that returns the browser to `return_to` afterwards.
#[must_use]
pub fn login_url(config: &ClientConfig, return_to: &str) -> String {
    format!(
        "{}?post_login_redirect_uri={}",
        config.auth_url(LOGIN_PATH),
        urlencoding::encode(return_to)
    )
}

/// Provider logout URL that returns the browser to `return_to` afterwards.
#[must_use]
pub fn logout_url(config: &ClientConfig, return_to: &str) -> String {
    format!(
        "{}?post_logout_redirect_uri={}",
        config.auth_url(LOGOUT_PATH),
        urlencoding::encode(return_to)
    )
}

/// Fetch every professional.
///
/// # Errors
///
/// `Network` if the request cannot complete, otherwise as [`parse_professionals`].
pub async fn list_professionals(config: &ClientConfig) -> Result<Vec<Professional>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&config.api_url(PROFESSIONALS_PATH))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        parse_professionals(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(unavailable())
    }
}

/// Submit a booking.
///
/// # Errors
///
/// `Network` if the request cannot complete, otherwise as [`parse_booking`].
pub async fn create_booking(config: &ClientConfig, request: &BookingRequest) -> Result<BookingConfirmation, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&config.api_url(BOOKINGS_PATH))
            .json(request)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        parse_booking(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, request);
        Err(unavailable())
    }
}

/// Fetch the signed-in user from the provider's session endpoint.
///
/// Returns `None` when there is no session or the check fails; failures are
/// logged, never raised.
pub async fn fetch_current_user(config: &ClientConfig) -> Option<User> {
    let result = fetch_session(config).await;
    match result {
        Ok(user) => user,
        Err(e) => {
            log::warn!("treating visitor as signed out: {e}");
            None
        }
    }
}

async fn fetch_session(config: &ClientConfig) -> Result<Option<User>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let mut request = gloo_net::http::Request::get(&config.auth_url(SESSION_PATH));
        if config.auth_is_cross_origin() {
            request = request.credentials(web_sys::RequestCredentials::Include);
        }
        let resp = request
            .send()
            .await
            .map_err(|e| ApiError::AuthUnavailable(e.to_string()))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::AuthUnavailable(e.to_string()))?;
        parse_session(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
        Err(ApiError::AuthUnavailable("not available outside the browser".to_owned()))
    }
}
