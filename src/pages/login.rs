//! Login page: local credentials plus Google/GitHub OAuth2.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::AuthProvider;
use crate::state::notices::NoticeState;
use crate::state::session::SessionState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || password_value.is_empty() {
            info.set("Enter your username and password.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::login(&username_value, &password_value).await;
                let outcome = session
                    .try_update(|s| {
                        crate::auth::manager::complete_login(&crate::auth::store::BrowserStore, s, result)
                    })
                    .unwrap_or_default();
                crate::pages::apply_outcome(notices, &navigate, &outcome);
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&navigate, notices, session);
    };

    let on_oauth = move |provider: AuthProvider| {
        #[cfg(feature = "hydrate")]
        crate::auth::oauth::initiate(provider);
        #[cfg(not(feature = "hydrate"))]
        let _ = provider;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username or email"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Log in"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <div class="auth-divider"></div>
                <button class="btn auth-oauth" on:click=move |_| on_oauth(AuthProvider::Google)>
                    "Continue with Google"
                </button>
                <button class="btn auth-oauth" on:click=move |_| on_oauth(AuthProvider::Github)>
                    "Continue with GitHub"
                </button>
                <p class="auth-switch">
                    "No account yet? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
