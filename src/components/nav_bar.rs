//! Top navigation chrome for authenticated screens.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::notices::NoticeState;
use crate::state::session::SessionState;

/// Brand, section links, the signed-in identity, and the logout action.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let identity = move || {
        session
            .get()
            .user
            .map(|user| user.username)
            .unwrap_or_else(|| "account".to_owned())
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::logout().await;
                let outcome = session
                    .try_update(|s| {
                        crate::auth::manager::complete_logout(&crate::auth::store::BrowserStore, s, result)
                    })
                    .unwrap_or_default();
                crate::pages::apply_outcome(notices, &navigate, &outcome);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, notices);
    };

    view! {
        <header class="nav-bar">
            <A href="/" attr:class="nav-bar__brand">
                "PennyLedger"
            </A>
            <nav class="nav-bar__links">
                <A href="/dashboard">"Dashboard"</A>
                <A href="/expenses">"Expenses"</A>
                <A href="/incomes">"Incomes"</A>
            </nav>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__identity">{identity}</span>
            <button class="btn nav-bar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}
