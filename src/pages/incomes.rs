//! Incomes screen: list, create, edit, delete, filter, sort.
//!
//! Structurally mirrors the expenses screen with `source` in place of
//! `category`, including in the sort field names the backend accepts.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::nav_bar::NavBar;
use crate::components::notice_host::notify;
use crate::net::types::{FilterParams, Income, IncomeDraft, IncomeSource, SortOrder};
use crate::state::notices::{NoticeKind, NoticeState};
use crate::state::session::SessionState;
use crate::state::transactions::IncomesState;
use crate::util::format::{date_for_api, format_display_date, format_inr};
use crate::util::guard::install_unauth_redirect;

fn source_from_value(value: &str) -> Option<IncomeSource> {
    IncomeSource::ALL.into_iter().find(|s| s.as_str() == value)
}

#[component]
pub fn IncomesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let incomes = expect_context::<RwSignal<IncomesState>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let navigate = use_navigate();

    install_unauth_redirect(session, navigate);

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        requested.set(true);
        load_incomes(incomes);
    });

    // Add/edit dialog.
    let form_open = RwSignal::new(false);
    let editing_id: RwSignal<Option<i64>> = RwSignal::new(None);
    let form_description = RwSignal::new(String::new());
    let form_source = RwSignal::new(IncomeSource::Salary.as_str().to_owned());
    let form_amount = RwSignal::new(String::new());
    let form_date = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    // Delete confirmation.
    let delete_target: RwSignal<Option<Income>> = RwSignal::new(None);

    // Filter panel.
    let filter_source = RwSignal::new(String::new());
    let filter_start = RwSignal::new(String::new());
    let filter_end = RwSignal::new(String::new());
    let filter_min = RwSignal::new(String::new());
    let filter_max = RwSignal::new(String::new());

    // Sort controls.
    let sort_by = RwSignal::new(String::new());
    let sort_order = RwSignal::new(SortOrder::Asc);

    let open_add = move |_| {
        editing_id.set(None);
        form_description.set(String::new());
        form_source.set(IncomeSource::Salary.as_str().to_owned());
        form_amount.set(String::new());
        form_date.set(String::new());
        form_open.set(true);
    };

    let open_edit = move |income: Income| {
        editing_id.set(Some(income.id));
        form_description.set(income.description);
        form_source.set(income.source.as_str().to_owned());
        form_amount.set(income.amount.to_string());
        form_date.set(income.date_of_income);
        form_open.set(true);
    };

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Ok(amount) = form_amount.get().trim().parse::<f64>() else {
            notify(notices, NoticeKind::Error, "Enter a valid amount".to_owned());
            return;
        };
        let Some(source) = source_from_value(&form_source.get()) else {
            notify(notices, NoticeKind::Error, "Select a source".to_owned());
            return;
        };
        let date = form_date.get();
        if date.is_empty() {
            notify(notices, NoticeKind::Error, "Select a date".to_owned());
            return;
        }
        let draft = IncomeDraft {
            description: form_description.get().trim().to_owned(),
            source,
            amount,
            date_of_income: date_for_api(&date).to_owned(),
        };
        saving.set(true);
        save_income(incomes, notices, editing_id.get(), draft, form_open, saving);
    };

    let on_confirm_delete = move |_| {
        if let Some(income) = delete_target.get() {
            remove_income(incomes, notices, income.id, delete_target);
        }
    };

    let on_apply_filter = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filter = FilterParams {
            category: None,
            source: Some(filter_source.get()).filter(|v| !v.is_empty()),
            start_date: Some(filter_start.get()).filter(|v| !v.is_empty()),
            end_date: Some(filter_end.get()).filter(|v| !v.is_empty()),
            min_amount: filter_min.get().trim().parse::<f64>().ok(),
            max_amount: filter_max.get().trim().parse::<f64>().ok(),
        };
        if filter.is_empty() {
            load_incomes(incomes);
        } else {
            load_filtered(incomes, filter);
        }
        sort_by.set(String::new());
    };

    let on_clear_filter = move |_| {
        filter_source.set(String::new());
        filter_start.set(String::new());
        filter_end.set(String::new());
        filter_min.set(String::new());
        filter_max.set(String::new());
        sort_by.set(String::new());
        load_incomes(incomes);
    };

    let on_sort_field = move |ev: leptos::ev::Event| {
        let field = event_target_value(&ev);
        sort_by.set(field.clone());
        if field.is_empty() {
            load_incomes(incomes);
        } else {
            load_sorted(incomes, field, sort_order.get());
        }
    };

    let on_sort_toggle = move |_| {
        let order = sort_order.get().toggled();
        sort_order.set(order);
        let field = sort_by.get();
        if !field.is_empty() {
            load_sorted(incomes, field, order);
        }
    };

    view! {
        <Show
            when=move || !session.get().loading && session.get().is_authenticated()
            fallback=move || view! { <div class="transactions-page"><p>"Loading..."</p></div> }
        >
            <div class="transactions-page">
                <NavBar/>
                <main class="transactions-page__body">
                    <header class="transactions-page__toolbar">
                        <h1>"Incomes"</h1>
                        <button class="btn btn--primary" on:click=open_add>
                            "Add Income"
                        </button>
                    </header>

                    <form class="filter-panel" on:submit=on_apply_filter>
                        <select
                            prop:value=move || filter_source.get()
                            on:change=move |ev| filter_source.set(event_target_value(&ev))
                        >
                            <option value="">"All sources"</option>
                            {IncomeSource::ALL
                                .into_iter()
                                .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                .collect_view()}
                        </select>
                        <input
                            type="date"
                            prop:value=move || filter_start.get()
                            on:input=move |ev| filter_start.set(event_target_value(&ev))
                        />
                        <input
                            type="date"
                            prop:value=move || filter_end.get()
                            on:input=move |ev| filter_end.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            placeholder="Min amount"
                            prop:value=move || filter_min.get()
                            on:input=move |ev| filter_min.set(event_target_value(&ev))
                        />
                        <input
                            type="number"
                            placeholder="Max amount"
                            prop:value=move || filter_max.get()
                            on:input=move |ev| filter_max.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit">
                            "Filter"
                        </button>
                        <Show when=move || incomes.get().filtered>
                            <button class="btn" type="button" on:click=on_clear_filter>
                                "Clear"
                            </button>
                        </Show>
                    </form>

                    <div class="sort-controls">
                        <label>
                            "Sort by"
                            <select prop:value=move || sort_by.get() on:change=on_sort_field>
                                <option value="">"None"</option>
                                <option value="amount">"Amount"</option>
                                <option value="date">"Date"</option>
                                <option value="source">"Source"</option>
                            </select>
                        </label>
                        <Show when=move || !sort_by.get().is_empty()>
                            <button class="btn" on:click=on_sort_toggle>
                                {move || match sort_order.get() {
                                    SortOrder::Asc => "Ascending",
                                    SortOrder::Desc => "Descending",
                                }}
                            </button>
                        </Show>
                    </div>

                    <Show when=move || incomes.get().error.is_some()>
                        <p class="transactions-page__error">
                            {move || incomes.get().error.unwrap_or_default()}
                        </p>
                    </Show>

                    <Show
                        when=move || !incomes.get().loading
                        fallback=move || view! { <p>"Loading incomes..."</p> }
                    >
                        <Show
                            when=move || !incomes.get().items.is_empty()
                            fallback=move || view! { <p class="transactions-page__empty">"No incomes yet."</p> }
                        >
                            <table class="transactions-table">
                                <thead>
                                    <tr>
                                        <th>"Description"</th>
                                        <th>"Source"</th>
                                        <th>"Amount"</th>
                                        <th>"Date"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || incomes.get().items
                                        key=|income| income.id
                                        children=move |income: Income| {
                                            let edit_row = income.clone();
                                            let delete_row = income.clone();
                                            view! {
                                                <tr>
                                                    <td>{income.description.clone()}</td>
                                                    <td>{income.source.label()}</td>
                                                    <td>{format_inr(income.amount)}</td>
                                                    <td>{format_display_date(&income.date_of_income)}</td>
                                                    <td class="transactions-table__actions">
                                                        <button
                                                            class="btn btn--small"
                                                            on:click=move |_| open_edit(edit_row.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <button
                                                            class="btn btn--small btn--danger"
                                                            on:click=move |_| delete_target.set(Some(delete_row.clone()))
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </Show>
                    </Show>
                </main>

                <Show when=move || form_open.get()>
                    <div class="dialog-overlay" on:click=move |_| form_open.set(false)>
                        <div class="dialog" on:click=|ev| ev.stop_propagation()>
                            <h2>
                                {move || {
                                    if editing_id.get().is_some() { "Edit Income" } else { "Add Income" }
                                }}
                            </h2>
                            <form on:submit=on_save>
                                <label class="dialog__field">
                                    "Description"
                                    <input
                                        type="text"
                                        required
                                        prop:value=move || form_description.get()
                                        on:input=move |ev| form_description.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__field">
                                    "Source"
                                    <select
                                        prop:value=move || form_source.get()
                                        on:change=move |ev| form_source.set(event_target_value(&ev))
                                    >
                                        {IncomeSource::ALL
                                            .into_iter()
                                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                                            .collect_view()}
                                    </select>
                                </label>
                                <label class="dialog__field">
                                    "Amount"
                                    <input
                                        type="number"
                                        step="0.01"
                                        required
                                        prop:value=move || form_amount.get()
                                        on:input=move |ev| form_amount.set(event_target_value(&ev))
                                    />
                                </label>
                                <label class="dialog__field">
                                    "Date"
                                    <input
                                        type="date"
                                        required
                                        prop:value=move || form_date.get()
                                        on:input=move |ev| form_date.set(event_target_value(&ev))
                                    />
                                </label>
                                <div class="dialog__actions">
                                    <button class="btn" type="button" on:click=move |_| form_open.set(false)>
                                        "Cancel"
                                    </button>
                                    <button class="btn btn--primary" type="submit" disabled=move || saving.get()>
                                        {move || if saving.get() { "Saving..." } else { "Save" }}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </Show>

                <Show when=move || delete_target.get().is_some()>
                    <div class="dialog-overlay" on:click=move |_| delete_target.set(None)>
                        <div class="dialog" on:click=|ev| ev.stop_propagation()>
                            <h2>"Delete Income"</h2>
                            <p>
                                {move || {
                                    delete_target
                                        .get()
                                        .map(|i| format!("Delete \"{}\"? This cannot be undone.", i.description))
                                        .unwrap_or_default()
                                }}
                            </p>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| delete_target.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--danger" on:click=on_confirm_delete>
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </div>
        </Show>
    }
}

fn load_incomes(incomes: RwSignal<IncomesState>) {
    #[cfg(feature = "hydrate")]
    {
        incomes.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::list_incomes().await {
                Ok(items) => incomes.update(|s| s.loaded(items, false)),
                Err(err) => incomes.update(|s| s.failed(err.message)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = incomes;
}

fn load_filtered(incomes: RwSignal<IncomesState>, filter: FilterParams) {
    #[cfg(feature = "hydrate")]
    {
        incomes.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::filter_incomes(&filter).await {
                Ok(items) => incomes.update(|s| s.loaded(items, true)),
                Err(err) => incomes.update(|s| s.failed(err.message)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (incomes, filter);
}

fn load_sorted(incomes: RwSignal<IncomesState>, sort_by: String, order: SortOrder) {
    #[cfg(feature = "hydrate")]
    {
        incomes.update(|s| s.loading = true);
        leptos::task::spawn_local(async move {
            match crate::net::api::sort_incomes(&sort_by, order).await {
                Ok(items) => incomes.update(|s| s.loaded(items, false)),
                Err(err) => incomes.update(|s| s.failed(err.message)),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (incomes, sort_by, order);
}

fn save_income(
    incomes: RwSignal<IncomesState>,
    notices: RwSignal<NoticeState>,
    editing_id: Option<i64>,
    draft: IncomeDraft,
    form_open: RwSignal<bool>,
    saving: RwSignal<bool>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => crate::net::api::update_income(id, &draft).await,
                None => crate::net::api::create_income(&draft).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    let message = if editing_id.is_some() {
                        "Income updated successfully"
                    } else {
                        "Income added successfully"
                    };
                    notify(notices, NoticeKind::Success, message.to_owned());
                    form_open.set(false);
                    load_incomes(incomes);
                }
                Err(err) => notify(notices, NoticeKind::Error, err.message),
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (incomes, notices, editing_id, draft, form_open, saving);
}

fn remove_income(
    incomes: RwSignal<IncomesState>,
    notices: RwSignal<NoticeState>,
    id: i64,
    delete_target: RwSignal<Option<Income>>,
) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_income(id).await {
                Ok(()) => {
                    notify(notices, NoticeKind::Success, "Income deleted successfully".to_owned());
                    delete_target.set(None);
                    load_incomes(incomes);
                }
                Err(err) => {
                    notify(notices, NoticeKind::Error, err.message);
                    delete_target.set(None);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (incomes, notices, id, delete_target);
}
