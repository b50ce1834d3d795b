use super::*;
use crate::net::types::{AuthProvider, SessionUser};

#[test]
fn redirects_when_settled_and_anonymous() {
    let session = SessionState { token: None, user: None, loading: false };
    assert!(should_redirect_unauth(&session));
}

#[test]
fn does_not_redirect_while_reconciling() {
    let session = SessionState { token: None, user: None, loading: true };
    assert!(!should_redirect_unauth(&session));
}

#[test]
fn does_not_redirect_when_token_present() {
    let session = SessionState {
        token: Some("tok".to_owned()),
        user: Some(SessionUser {
            username: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
            provider: AuthProvider::Local,
            roles: vec!["ROLE_USER".to_owned()],
        }),
        loading: false,
    };
    assert!(!should_redirect_unauth(&session));
}
