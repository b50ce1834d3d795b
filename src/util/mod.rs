//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and route-guard concerns from page
//! and component logic to improve reuse and testability.

pub mod format;
pub mod guard;
