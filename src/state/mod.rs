//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `form`, `dashboard`) so pages depend
//! on small focused models and the transitions stay testable without a DOM.

pub mod dashboard;
pub mod form;
pub mod session;
