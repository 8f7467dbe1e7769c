//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the only process-wide mutable value in the app; everything
//! else is page-local signal state. Keeping it in one focused module makes
//! the two permitted mutation flows (login, logout) easy to audit.

pub mod session;
