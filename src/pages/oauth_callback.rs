//! OAuth2 provider callback landing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend redirects here with `token`, `username`, `email`, and
//! `provider` query parameters after a successful provider handshake. The
//! whole page is one effect: translate the parameters into a session and
//! move on. Nothing here touches the network.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::notices::NoticeState;
use crate::state::session::SessionState;

#[component]
pub fn OAuthCallbackPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    // Process the redirect parameters exactly once.
    let processed = RwSignal::new(false);
    Effect::new(move || {
        if processed.get() {
            return;
        }
        processed.set(true);
        let params = query.get_untracked();
        let outcome = session
            .try_update(|s| {
                crate::auth::manager::complete_oauth_callback(
                    &crate::auth::store::BrowserStore,
                    s,
                    |key| params.get(key),
                )
            })
            .unwrap_or_default();
        crate::pages::apply_outcome(notices, &navigate, &outcome);
    });

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--centered">
                <div class="spinner"></div>
                <p>"Completing authentication..."</p>
            </div>
        </div>
    }
}
