//! Client-side session and authentication.
//!
//! ARCHITECTURE
//! ============
//! `store` wraps durable browser storage for the token + profile pair,
//! `manager` owns the session state machine (reconcile, login, signup,
//! OAuth2 callback, logout) as pure completion functions, and `oauth`
//! bridges the provider redirect flow. Pages supply the async glue.

pub mod manager;
pub mod oauth;
pub mod store;
