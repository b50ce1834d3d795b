//! Shared rendering components.

pub mod nav_bar;
pub mod notice_host;
