//! Compile-time environment configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend base URL and OAuth2 endpoints vary between local development
//! and deployment. Values are baked in at build time via `option_env!` so the
//! WASM bundle needs no runtime configuration fetch.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL for all REST calls, without a trailing slash.
pub fn api_base_url() -> &'static str {
    option_env!("PENNYLEDGER_API_BASE_URL").unwrap_or("http://localhost:8080/api")
}

/// Origin of the backend-owned OAuth2 authorization endpoints.
pub fn oauth2_authorization_base() -> &'static str {
    option_env!("PENNYLEDGER_OAUTH2_BASE_URL").unwrap_or("http://localhost:8080")
}

/// Callback URL the OAuth2 provider redirects back to.
pub fn oauth2_redirect_uri() -> &'static str {
    option_env!("PENNYLEDGER_OAUTH2_REDIRECT_URI").unwrap_or("http://localhost:5173/auth/callback")
}
