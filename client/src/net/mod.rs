//! Networking modules for the session provider and profile REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls and `types` defines the JSON shapes.

pub mod api;
pub mod types;
