//! # doconcall-client
//!
//! Leptos + WASM frontend for the DoctorOnCall telemedicine booking app.
//!
//! This crate contains pages, components, shared session state, and the REST
//! API helpers. The session and access-control core lives in `util` (token
//! slot, claims decoder, route gate) and `state::session` (the process-wide
//! current-user value); everything else is thin screen plumbing around it.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install logging/panic hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
