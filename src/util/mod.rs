//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability. The session core lives
//! here: `token` is the credential slot, `claims` the pure decoder, and
//! `guard` the per-navigation access gate over both.

pub mod claims;
pub mod guard;
pub mod token;
