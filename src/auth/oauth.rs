//! OAuth2 redirect bridge.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend owns the whole OAuth2 handshake. The client's part is two
//! moves: redirect the browser at `/oauth2/authorization/{provider}` to
//! start, and translate the provider's callback query parameters into a
//! session payload when control returns to `/auth/callback`.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use crate::net::types::{AuthProvider, SessionUser};

/// Failure to turn redirect parameters into a session payload.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    #[error("No token received from OAuth2 provider")]
    MissingToken,
}

/// Session payload carried by a provider redirect.
#[derive(Clone, Debug, PartialEq)]
pub struct CallbackPayload {
    pub token: String,
    pub user: SessionUser,
}

/// Translate callback query parameters into a session payload.
///
/// Pure: `param` is a lookup over the redirect's query string. `provider`
/// defaults to LOCAL when absent or unrecognized. Roles are re-derived as
/// `ROLE_USER` unconditionally because the backend does not echo roles on
/// this path.
///
/// # Errors
///
/// `CallbackError::MissingToken` when the `token` parameter is absent or
/// empty.
pub fn extract_callback_payload<F>(param: F) -> Result<CallbackPayload, CallbackError>
where
    F: Fn(&str) -> Option<String>,
{
    let token = param("token")
        .filter(|t| !t.is_empty())
        .ok_or(CallbackError::MissingToken)?;
    let username = param("username").unwrap_or_default();
    let email = param("email").unwrap_or_default();
    let provider = param("provider").map_or(AuthProvider::Local, |p| AuthProvider::from_param(&p));
    Ok(CallbackPayload {
        token,
        user: SessionUser {
            username,
            email,
            provider,
            roles: vec!["ROLE_USER".to_owned()],
        },
    })
}

/// Backend authorization endpoint for `provider`.
pub fn authorization_url(provider: AuthProvider) -> String {
    format!(
        "{}/oauth2/authorization/{}",
        crate::config::oauth2_authorization_base(),
        provider.as_path_segment()
    )
}

/// Start the provider handshake. Terminal for the current page: control
/// leaves the application.
#[cfg(feature = "hydrate")]
pub fn initiate(provider: AuthProvider) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(&authorization_url(provider));
    }
}
