//! Networking modules for the backend auth API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` normalizes failure bodies, and
//! `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod types;
