//! Top navigation bar with role-aware links and the logout flow.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is the one place that runs the logout flow. Clearing the token
//! slot and resetting the session signal always happen together here —
//! issuing one without the other would leave the session inconsistent
//! (profile cleared but credential still present, or vice versa).

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::claims::{self, Claims};
use crate::util::token;

/// Which link groups the navbar shows for the current credential.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavLinks {
    /// Admin-only dashboard entry.
    pub dashboard: bool,
    /// Patient links: appointments, profile.
    pub patient: bool,
    /// Login/Register entries for anonymous visitors.
    pub auth_entries: bool,
    /// Logout button.
    pub logout: bool,
}

/// Derive link visibility from the decoded credential, failing closed to the
/// anonymous link set when the token is absent or undecodable.
pub fn links_for(token: Option<&str>) -> NavLinks {
    let claims: Option<Claims> = token.and_then(|t| match claims::decode(t) {
        Ok(c) => Some(c),
        Err(_) => None,
    });
    match claims {
        None => NavLinks {
            auth_entries: true,
            ..NavLinks::default()
        },
        Some(c) if c.is_admin => NavLinks {
            dashboard: true,
            logout: true,
            ..NavLinks::default()
        },
        Some(_) => NavLinks {
            patient: true,
            logout: true,
            ..NavLinks::default()
        },
    }
}

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let links = links_for(token::get().as_deref());

    let on_logout = move |_| {
        // Token slot and session state are cleared as one unit.
        token::clear();
        session.update(SessionState::apply_logout);
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="navbar">
            <nav>
                <h2 class="navbar__logo">
                    <A href="/">"DoctorOnCall"</A>
                </h2>
                <ul class="navbar__links">
                    <li><A href="/">"Home"</A></li>
                    <li><A href="/doctors">"Doctors"</A></li>
                    <Show when=move || links.dashboard>
                        <li><A href="/dashboard/users">"Dashboard"</A></li>
                    </Show>
                    <Show when=move || links.patient>
                        <li><A href="/appointments">"Appointments"</A></li>
                        <li><A href="/profile">"Profile"</A></li>
                    </Show>
                    <Show when=move || links.auth_entries>
                        <li><A href="/login">"Login"</A></li>
                        <li><A href="/register">"Register"</A></li>
                    </Show>
                    <Show when=move || links.logout>
                        <li>
                            <button class="navbar__logout" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        </li>
                    </Show>
                </ul>
            </nav>
        </header>
    }
}
