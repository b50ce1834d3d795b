//! # pennyledger
//!
//! Leptos + WASM frontend for the PennyLedger personal finance tracker.
//! All persistence, aggregation, and authentication live in an external
//! REST backend; this crate is the presentation and state-synchronization
//! layer: a session/auth state machine, a single HTTP request pipeline,
//! and thin route-level screens for expenses, incomes, and P&L totals.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point for client-side hydration.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
