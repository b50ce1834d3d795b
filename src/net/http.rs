//! The single HTTP chokepoint for every backend call.
//!
//! SYSTEM CONTEXT
//! ==============
//! All ~15 API call sites go through these helpers so bearer-token
//! injection and 401 handling never get duplicated. Outbound requests pick
//! up the persisted token when one exists; inbound failures are normalized
//! into [`ApiError`] before they reach callers, and a 401 tears down the
//! persisted session and redirects to the login view as a side effect,
//! regardless of which operation triggered the call.
//!
//! ERROR HANDLING
//! ==============
//! No raw transport error crosses this boundary. A request that produced
//! no response at all is reported with status 0.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::collections::BTreeMap;

use crate::auth::store::{SessionStore, clear_session};

#[cfg(feature = "hydrate")]
use crate::auth::store::{BrowserStore, TOKEN_KEY};
#[cfg(feature = "hydrate")]
use serde::Serialize;
#[cfg(feature = "hydrate")]
use serde::de::DeserializeOwned;

/// Uniform error shape produced from any failed backend call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message, never empty.
    pub message: String,
    /// HTTP status code, or 0 when no response was received.
    pub status: u16,
    /// Request path echoed by the backend, when present.
    pub path: Option<String>,
    /// Field-level validation messages, when present.
    pub field_errors: Option<BTreeMap<String, String>>,
}

/// Error for a request that produced no HTTP response at all.
pub fn network_error() -> ApiError {
    transport_error("Network error. Please check your connection.")
}

/// Error for a transport-level failure with a known message.
pub fn transport_error(message: &str) -> ApiError {
    ApiError {
        message: message.to_owned(),
        status: 0,
        path: None,
        field_errors: None,
    }
}

/// Build an [`ApiError`] from an HTTP failure response.
///
/// Message preference: backend `message` field, then the transport-level
/// message, then a generic fallback. `path` and `errors` are copied through
/// when the backend supplied them.
pub fn normalize_error(status: u16, body: Option<&serde_json::Value>, transport: Option<&str>) -> ApiError {
    let message = body
        .and_then(|b| b.get("message"))
        .and_then(serde_json::Value::as_str)
        .or(transport)
        .unwrap_or("An error occurred")
        .to_owned();
    let path = body
        .and_then(|b| b.get("path"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);
    let field_errors = body
        .and_then(|b| b.get("errors"))
        .and_then(serde_json::Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(field, value)| {
                    let text = value.as_str().map_or_else(|| value.to_string(), str::to_owned);
                    (field.clone(), text)
                })
                .collect()
        });
    ApiError { message, status, path, field_errors }
}

/// Whether a 401 should redirect to the login view. The login and signup
/// views handle their own failures inline.
pub fn should_redirect_after_unauthorized(pathname: &str) -> bool {
    !matches!(pathname, "/login" | "/signup")
}

/// Delete the persisted session after an authorization failure and report
/// whether the caller should redirect to the login view.
pub fn unauthorized_teardown(store: &impl SessionStore, pathname: &str) -> bool {
    clear_session(store);
    should_redirect_after_unauthorized(pathname)
}

/// Join a request path onto the configured API base URL.
pub fn endpoint(path: &str) -> String {
    format!("{}{path}", crate::config::api_base_url())
}

#[cfg(feature = "hydrate")]
fn with_bearer(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match BrowserStore.get(TOKEN_KEY) {
        Some(token) => req.header("Authorization", &format!("Bearer {token}")),
        None => req,
    }
}

/// Normalize a failure response, running the 401 teardown side effect.
#[cfg(feature = "hydrate")]
async fn fail(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.json::<serde_json::Value>().await.ok();
    if status == 401 {
        log::warn!("session invalidated by 401 response");
        let pathname = web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_default();
        if unauthorized_teardown(&BrowserStore, &pathname) {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    }
    normalize_error(status, body.as_ref(), None)
}

#[cfg(feature = "hydrate")]
async fn into_json<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if resp.ok() {
        resp.json::<T>().await.map_err(|e| ApiError {
            message: e.to_string(),
            status,
            path: None,
            field_errors: None,
        })
    } else {
        Err(fail(resp).await)
    }
}

#[cfg(feature = "hydrate")]
async fn into_unit(resp: gloo_net::http::Response) -> Result<(), ApiError> {
    if resp.ok() { Ok(()) } else { Err(fail(resp).await) }
}

/// `GET` a JSON body.
#[cfg(feature = "hydrate")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = with_bearer(gloo_net::http::Request::get(&endpoint(path)))
        .send()
        .await
        .map_err(|_| network_error())?;
    into_json(resp).await
}

/// `POST` a JSON body and decode a JSON response.
#[cfg(feature = "hydrate")]
pub async fn post_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let resp = with_bearer(gloo_net::http::Request::post(&endpoint(path)))
        .json(body)
        .map_err(|e| transport_error(&e.to_string()))?
        .send()
        .await
        .map_err(|_| network_error())?;
    into_json(resp).await
}

/// `POST` without a body, ignoring the response payload.
#[cfg(feature = "hydrate")]
pub async fn post_unit(path: &str) -> Result<(), ApiError> {
    let resp = with_bearer(gloo_net::http::Request::post(&endpoint(path)))
        .send()
        .await
        .map_err(|_| network_error())?;
    into_unit(resp).await
}

/// `PUT` a JSON body and decode a JSON response.
#[cfg(feature = "hydrate")]
pub async fn put_json<T: DeserializeOwned, B: Serialize>(path: &str, body: &B) -> Result<T, ApiError> {
    let resp = with_bearer(gloo_net::http::Request::put(&endpoint(path)))
        .json(body)
        .map_err(|e| transport_error(&e.to_string()))?
        .send()
        .await
        .map_err(|_| network_error())?;
    into_json(resp).await
}

/// `DELETE`, ignoring the response payload.
#[cfg(feature = "hydrate")]
pub async fn delete_unit(path: &str) -> Result<(), ApiError> {
    let resp = with_bearer(gloo_net::http::Request::delete(&endpoint(path)))
        .send()
        .await
        .map_err(|_| network_error())?;
    into_unit(resp).await
}
