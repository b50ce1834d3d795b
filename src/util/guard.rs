//! Shared auth route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authenticated route components should apply identical unauthenticated
//! redirect behavior, and must not redirect while startup reconciliation is
//! still deciding.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Whether an authenticated route should bounce to `/login`.
pub fn should_redirect_unauth(session: &SessionState) -> bool {
    !session.loading && !session.is_authenticated()
}

/// Redirect to `/login` whenever reconciliation has settled and no session
/// is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigate = navigate.clone();
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
