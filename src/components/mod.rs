//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components render slices of page state and push user input back through
//! the state's transition methods; they hold no state of their own beyond
//! local display toggles.

pub mod form_field;
