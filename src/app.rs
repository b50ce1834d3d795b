//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_host::NoticeHost;
use crate::pages::{
    dashboard::DashboardPage, expenses::ExpensesPage, incomes::IncomesPage, landing::LandingPage,
    login::LoginPage, oauth_callback::OAuthCallbackPage, signup::SignupPage,
};
use crate::state::dashboard::DashboardState;
use crate::state::notices::NoticeState;
use crate::state::session::SessionState;
use crate::state::transactions::{ExpensesState, IncomesState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, runs startup session reconciliation,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let session = RwSignal::new(SessionState::default());
    let notices = RwSignal::new(NoticeState::default());
    let expenses = RwSignal::new(ExpensesState::default());
    let incomes = RwSignal::new(IncomesState::default());
    let dashboard = RwSignal::new(DashboardState::default());

    provide_context(session);
    provide_context(notices);
    provide_context(expenses);
    provide_context(incomes);
    provide_context(dashboard);

    reconcile_session(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/pennyledger.css"/>
        <Title text="PennyLedger"/>

        <NoticeHost/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("expenses") view=ExpensesPage/>
                <Route path=StaticSegment("incomes") view=IncomesPage/>
                <Route
                    path=(StaticSegment("auth"), StaticSegment("callback"))
                    view=OAuthCallbackPage
                />
            </Routes>
        </Router>
    }
}

/// Adopt any persisted session optimistically, then confirm it against the
/// backend once. A failed probe tears the session back down.
fn reconcile_session(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        use crate::auth::manager::{begin_reconcile, finish_reconcile};
        use crate::auth::store::BrowserStore;

        let needs_probe = session
            .try_update(|s| begin_reconcile(&BrowserStore, s))
            .unwrap_or(false);
        if needs_probe {
            leptos::task::spawn_local(async move {
                let probe = crate::net::api::current_user().await;
                session.update(|s| finish_reconcile(&BrowserStore, s, probe));
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = session;
}
