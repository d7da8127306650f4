//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate validation rules, route guarding, and async
//! cancellation from page and component code to keep them testable.

pub mod auth;
pub mod cancel;
pub mod validation;
