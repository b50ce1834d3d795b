//! Transient notice rendering and the `notify` helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session operations report their user-facing effects as data; pages call
//! [`notify`] to surface them. Notices self-dismiss after a few seconds on
//! the client, and can always be dismissed by hand.

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, NoticeState};

/// Push a notice and schedule its dismissal.
pub fn notify(notices: RwSignal<NoticeState>, kind: NoticeKind, message: String) {
    let id = notices.try_update(|s| s.push(kind, message)).unwrap_or(0);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        notices.update(|s| s.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed overlay listing the currently visible notices.
#[component]
pub fn NoticeHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-host">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div class=format!("notice notice--{}", notice.kind.css_class())>
                                <span class="notice__message">{notice.message}</span>
                                <button
                                    class="notice__dismiss"
                                    on:click=move |_| notices.update(|s| s.dismiss(id))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
