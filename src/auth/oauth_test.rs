use super::*;
use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key: &str| map.get(key).cloned()
}

// =============================================================
// extract_callback_payload
// =============================================================

#[test]
fn missing_token_fails() {
    let err = extract_callback_payload(lookup(&[("username", "alice")])).unwrap_err();
    assert_eq!(err, CallbackError::MissingToken);
    assert_eq!(err.to_string(), "No token received from OAuth2 provider");
}

#[test]
fn empty_token_fails() {
    let err = extract_callback_payload(lookup(&[("token", "")])).unwrap_err();
    assert_eq!(err, CallbackError::MissingToken);
}

#[test]
fn minimal_params_default_provider_and_roles() {
    let payload =
        extract_callback_payload(lookup(&[("token", "t"), ("username", "u"), ("email", "e")])).unwrap();
    assert_eq!(payload.token, "t");
    assert_eq!(payload.user.username, "u");
    assert_eq!(payload.user.email, "e");
    assert_eq!(payload.user.provider, AuthProvider::Local);
    assert_eq!(payload.user.roles, vec!["ROLE_USER".to_owned()]);
}

#[test]
fn provider_param_is_honored() {
    let payload =
        extract_callback_payload(lookup(&[("token", "t"), ("provider", "GITHUB")])).unwrap();
    assert_eq!(payload.user.provider, AuthProvider::Github);
}

#[test]
fn roles_are_rederived_even_if_params_carry_roles() {
    // The redirect never vouches for roles; ROLE_USER is assigned regardless.
    let payload = extract_callback_payload(lookup(&[
        ("token", "t"),
        ("roles", "ROLE_ADMIN"),
    ]))
    .unwrap();
    assert_eq!(payload.user.roles, vec!["ROLE_USER".to_owned()]);
}

#[test]
fn absent_profile_params_default_to_empty() {
    let payload = extract_callback_payload(lookup(&[("token", "t")])).unwrap();
    assert_eq!(payload.user.username, "");
    assert_eq!(payload.user.email, "");
}

// =============================================================
// authorization_url
// =============================================================

#[test]
fn authorization_url_lowercases_provider() {
    let url = authorization_url(AuthProvider::Google);
    assert!(url.ends_with("/oauth2/authorization/google"));
    let url = authorization_url(AuthProvider::Github);
    assert!(url.ends_with("/oauth2/authorization/github"));
}
