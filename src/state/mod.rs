//! Shared reactive state types.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each type here is provided once from `app` as an `RwSignal` context and
//! consumed wherever views need it; there are no ambient singletons.

pub mod dashboard;
pub mod notices;
pub mod session;
pub mod transactions;
