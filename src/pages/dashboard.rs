//! Dashboard page showing aggregate profit/loss totals.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches all-time totals on
//! entry and lets the user narrow them to an inclusive date range.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::state::dashboard::DashboardState;
use crate::state::session::SessionState;
use crate::util::format::{format_display_date, format_inr};
use crate::util::guard::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    // Fetch all-time totals once on entry.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_pnl(dashboard);
    });

    let start_date = RwSignal::new(String::new());
    let end_date = RwSignal::new(String::new());

    let on_apply_range = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let start = start_date.get();
        let end = end_date.get();
        if start.is_empty() || end.is_empty() {
            return;
        }
        load_pnl_range(dashboard, start, end);
    };

    let on_clear_range = move |_| {
        start_date.set(String::new());
        end_date.set(String::new());
        load_pnl(dashboard);
    };

    let range_label = move || {
        dashboard.get().summary.and_then(|s| {
            let start = s.start_date?;
            let end = s.end_date?;
            Some(format!("{} – {}", format_display_date(&start), format_display_date(&end)))
        })
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>
                            {move || {
                                if session.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <NavBar/>
                <main class="dashboard-page__body">
                    <h1>"Profit & Loss"</h1>

                    <form class="range-form" on:submit=on_apply_range>
                        <label class="range-form__field">
                            "From"
                            <input
                                type="date"
                                prop:value=move || start_date.get()
                                on:input=move |ev| start_date.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="range-form__field">
                            "To"
                            <input
                                type="date"
                                prop:value=move || end_date.get()
                                on:input=move |ev| end_date.set(event_target_value(&ev))
                            />
                        </label>
                        <button class="btn btn--primary" type="submit">
                            "Apply"
                        </button>
                        <Show when=move || dashboard.get().is_ranged()>
                            <button class="btn" type="button" on:click=on_clear_range>
                                "All time"
                            </button>
                        </Show>
                    </form>

                    <Show when=move || dashboard.get().error.is_some()>
                        <p class="dashboard-page__error">
                            {move || dashboard.get().error.unwrap_or_default()}
                        </p>
                    </Show>

                    <Show
                        when=move || !dashboard.get().loading
                        fallback=move || view! { <p>"Loading totals..."</p> }
                    >
                        <Show when=move || range_label().is_some()>
                            <p class="dashboard-page__range">{move || range_label().unwrap_or_default()}</p>
                        </Show>
                        {move || {
                            dashboard
                                .get()
                                .summary
                                .map(|summary| {
                                    let profit = summary.profit_loss >= 0.0;
                                    view! {
                                        <div class="pnl-cards">
                                            <div class="pnl-card pnl-card--income">
                                                <span class="pnl-card__label">"Total Income"</span>
                                                <span class="pnl-card__value">
                                                    {format_inr(summary.total_income)}
                                                </span>
                                            </div>
                                            <div class="pnl-card pnl-card--expense">
                                                <span class="pnl-card__label">"Total Expense"</span>
                                                <span class="pnl-card__value">
                                                    {format_inr(summary.total_expense)}
                                                </span>
                                            </div>
                                            <div class=format!(
                                                "pnl-card pnl-card--{}",
                                                if profit { "profit" } else { "loss" },
                                            )>
                                                <span class="pnl-card__label">
                                                    {if profit { "Profit" } else { "Loss" }}
                                                </span>
                                                <span class="pnl-card__value">
                                                    {format_inr(summary.profit_loss)}
                                                </span>
                                            </div>
                                        </div>
                                    }
                                })
                        }}
                    </Show>
                </main>
            </div>
        </Show>
    }
}

fn load_pnl(dashboard: RwSignal<DashboardState>) {
    #[cfg(feature = "hydrate")]
    {
        dashboard.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::pnl().await {
                Ok(summary) => dashboard.update(|s| s.loaded(summary)),
                Err(err) => dashboard.update(|s| s.failed(err.message)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = dashboard;
}

fn load_pnl_range(dashboard: RwSignal<DashboardState>, start: String, end: String) {
    #[cfg(feature = "hydrate")]
    {
        use crate::util::format::date_for_api;
        dashboard.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::pnl_range(date_for_api(&start), date_for_api(&end)).await {
                Ok(summary) => dashboard.update(|s| s.loaded(summary)),
                Err(err) => dashboard.update(|s| s.failed(err.message)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (dashboard, start, end);
}
