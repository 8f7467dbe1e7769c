//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome while reading session state from the
//! Leptos context provider; only `navbar` mutates it (logout).

pub mod doctor_card;
pub mod loading;
pub mod navbar;
