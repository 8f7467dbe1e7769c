//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied outside the page, by the
//! `Guarded` wrapper in `app`.

pub mod appointments;
pub mod dashboard;
pub mod doctors;
pub mod home;
pub mod login;
pub mod not_found;
pub mod profile;
pub mod register;
