//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (network calls, session
//! operations) and delegates rendering details to `components`. Session
//! operations return their effects as data; [`apply_outcome`] interprets
//! them against the notice queue and the router.

pub mod dashboard;
pub mod expenses;
pub mod incomes;
pub mod landing;
pub mod login;
pub mod oauth_callback;
pub mod signup;

use leptos::prelude::RwSignal;
use leptos_router::NavigateOptions;

use crate::auth::manager::AuthOutcome;
use crate::components::notice_host::notify;
use crate::state::notices::NoticeState;

/// Surface an operation's notice and perform its requested navigation.
pub(crate) fn apply_outcome<F>(notices: RwSignal<NoticeState>, navigate: &F, outcome: &AuthOutcome)
where
    F: Fn(&str, NavigateOptions),
{
    if let Some((kind, message)) = outcome.notice.clone() {
        notify(notices, kind, message);
    }
    if let Some(route) = outcome.navigate {
        navigate(route.path(), NavigateOptions::default());
    }
}
