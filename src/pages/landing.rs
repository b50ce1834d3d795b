//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::session::SessionState;

#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <div class="landing-page">
            <div class="landing-hero">
                <h1>"PennyLedger"</h1>
                <p class="landing-hero__tagline">
                    "Track expenses and incomes, and see where you stand at a glance."
                </p>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <div class="landing-hero__actions">
                                <A href="/login" attr:class="btn btn--primary">
                                    "Log in"
                                </A>
                                <A href="/signup" attr:class="btn">
                                    "Create an account"
                                </A>
                            </div>
                        }
                    }
                >
                    <div class="landing-hero__actions">
                        <A href="/dashboard" attr:class="btn btn--primary">
                            "Go to dashboard"
                        </A>
                    </div>
                </Show>
            </div>
        </div>
    }
}
