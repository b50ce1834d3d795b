use super::*;
use crate::auth::store::{MemoryStore, TOKEN_KEY, USER_KEY};

// =============================================================
// Error normalization
// =============================================================

#[test]
fn normalize_prefers_backend_message() {
    let body = serde_json::json!({ "message": "Invalid credentials" });
    let err = normalize_error(400, Some(&body), Some("transport said no"));
    assert_eq!(err.message, "Invalid credentials");
    assert_eq!(err.status, 400);
}

#[test]
fn normalize_falls_back_to_transport_message() {
    let body = serde_json::json!({ "timestamp": "2024-01-01T00:00:00Z" });
    let err = normalize_error(500, Some(&body), Some("request failed"));
    assert_eq!(err.message, "request failed");
}

#[test]
fn normalize_falls_back_to_generic_message() {
    let err = normalize_error(502, None, None);
    assert_eq!(err.message, "An error occurred");
    assert_eq!(err.status, 502);
    assert_eq!(err.path, None);
    assert_eq!(err.field_errors, None);
}

#[test]
fn normalize_copies_path_and_field_errors() {
    let body = serde_json::json!({
        "message": "Validation failed",
        "path": "/api/expenses",
        "errors": { "amount": "Amount must be greater than 0", "description": "Description is required" }
    });
    let err = normalize_error(400, Some(&body), None);
    assert_eq!(err.path.as_deref(), Some("/api/expenses"));
    let fields = err.field_errors.unwrap();
    assert_eq!(fields["amount"], "Amount must be greater than 0");
    assert_eq!(fields["description"], "Description is required");
}

#[test]
fn normalize_stringifies_non_string_field_errors() {
    let body = serde_json::json!({ "errors": { "amount": 42 } });
    let err = normalize_error(400, Some(&body), None);
    assert_eq!(err.field_errors.unwrap()["amount"], "42");
}

#[test]
fn network_error_has_status_zero() {
    let err = network_error();
    assert_eq!(err.status, 0);
    assert_eq!(err.message, "Network error. Please check your connection.");
}

#[test]
fn api_error_displays_its_message() {
    let err = transport_error("boom");
    assert_eq!(err.to_string(), "boom");
}

// =============================================================
// 401 teardown
// =============================================================

#[test]
fn unauthorized_redirects_from_protected_views() {
    assert!(should_redirect_after_unauthorized("/dashboard"));
    assert!(should_redirect_after_unauthorized("/expenses"));
    assert!(should_redirect_after_unauthorized("/"));
}

#[test]
fn unauthorized_does_not_redirect_from_auth_views() {
    assert!(!should_redirect_after_unauthorized("/login"));
    assert!(!should_redirect_after_unauthorized("/signup"));
}

#[test]
fn teardown_clears_both_keys_and_requests_redirect() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "tok");
    store.set(USER_KEY, "{}");
    assert!(unauthorized_teardown(&store, "/dashboard"));
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

#[test]
fn teardown_on_login_view_clears_without_redirect() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "tok");
    store.set(USER_KEY, "{}");
    assert!(!unauthorized_teardown(&store, "/login"));
    assert_eq!(store.len(), 0);
}

// =============================================================
// Endpoint joining
// =============================================================

#[test]
fn endpoint_joins_path_onto_base() {
    assert_eq!(endpoint("/auth/login"), format!("{}/auth/login", crate::config::api_base_url()));
}
