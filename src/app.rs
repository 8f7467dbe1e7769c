//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the one `RwSignal<SessionState>` the rest of the app reads,
//! recomputes it from the stored credential at startup, and declares the
//! route table with an access policy per route.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{
    appointments::AppointmentsPage, dashboard::DashboardPage, doctors::DoctorsPage,
    home::HomePage, login::LoginPage, not_found::NotFoundPage, profile::ProfilePage,
    register::RegisterPage,
};
use crate::state::session::SessionState;
use crate::util::claims;
use crate::util::guard::{Guarded, RoutePolicy};
use crate::util::token;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, restores it from the token slot, and sets
/// up client-side routing with per-route access policies.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);

    // Recompute the session from the stored credential once at startup.
    // Navigation-time decisions never rely on this: the gate re-reads the
    // slot on every attempt.
    if let Some(stored) = token::get() {
        match claims::decode(&stored) {
            Ok(claims) => {
                #[cfg(feature = "hydrate")]
                let subject = claims.user_id.clone();
                session.update(|s| s.apply_login(claims, None));
                #[cfg(feature = "hydrate")]
                {
                    session.update(|s| s.set_loading(true));
                    leptos::task::spawn_local(async move {
                        // This fetch is not cancelled by logout; a late
                        // response can repopulate the profile after the slot
                        // is cleared.
                        let profile = crate::net::api::fetch_user(&subject).await;
                        session.update(|s| {
                            s.set_user_info(profile);
                            s.set_loading(false);
                        });
                    });
                }
            }
            Err(e) => {
                leptos::logging::warn!("stored token failed to decode: {e}");
                token::clear();
            }
        }
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/doconcall.css"/>
        <Title text="DoctorOnCall"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("doctors") view=DoctorsPage/>
                <Route
                    path=StaticSegment("login")
                    view=|| {
                        view! {
                            <Guarded policy=RoutePolicy::PublicOnly>
                                <LoginPage/>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("register")
                    view=|| {
                        view! {
                            <Guarded policy=RoutePolicy::PublicOnly>
                                <RegisterPage/>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("appointments")
                    view=|| {
                        view! {
                            <Guarded policy=RoutePolicy::RequireAuth>
                                <AppointmentsPage/>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| {
                        view! {
                            <Guarded policy=RoutePolicy::RequireAuth>
                                <ProfilePage/>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("users"))
                    view=|| {
                        view! {
                            <Guarded policy=RoutePolicy::RequireAdmin>
                                <DashboardPage/>
                            </Guarded>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
