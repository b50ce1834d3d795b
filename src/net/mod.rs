//! Networking modules for the backend REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the single request chokepoint (bearer injection, error
//! normalization, 401 teardown), `api` maps endpoints to typed calls, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod http;
pub mod types;
