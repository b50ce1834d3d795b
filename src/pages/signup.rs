//! Signup page: local account creation plus Google/GitHub OAuth2.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::types::AuthProvider;
use crate::state::notices::NoticeState;
use crate::state::session::SessionState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let username_value = username.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if username_value.is_empty() || email_value.is_empty() || password_value.is_empty() {
            info.set("Fill in all fields.".to_owned());
            return;
        }
        if password_value.len() < 6 {
            info.set("Password must be at least 6 characters.".to_owned());
            return;
        }
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let result =
                    crate::net::api::signup(&username_value, &email_value, &password_value).await;
                let outcome = session
                    .try_update(|s| {
                        crate::auth::manager::complete_signup(&crate::auth::store::BrowserStore, s, result)
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
                <h1>"Create your account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password (6+ characters)"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign up"
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
                    "Already registered? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}
