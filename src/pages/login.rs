//! Login page running the ordered credential flow.
//!
//! DESIGN
//! ======
//! The flow is strictly sequential: obtain the token, persist it, decode the
//! claims, fetch the profile keyed by the decoded subject id, publish the
//! session. A rejected login or failed persist leaves the session untouched;
//! a failed profile fetch still authenticates via claims alone.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Validate the login form before any network traffic, mirroring the
/// backend's own minimum-password rule.
pub fn validate_login_form(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    if password.len() < 5 {
        return Err("Password must be at least 5 characters long");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(msg) = validate_login_form(&email_value, &password_value) {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set("Logging in...".to_owned());
        session.update(|s| s.set_loading(true));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                // Step 1: exchange credentials for a token. Any rejection
                // here leaves the session exactly as it was.
                let resp = match crate::net::api::login(&email_value, &password_value).await {
                    Ok(resp) => resp,
                    Err(e) => {
                        leptos::logging::warn!("login rejected: {e}");
                        info.set("Unable to login".to_owned());
                        session.update(|s| s.set_loading(false));
                        busy.set(false);
                        return;
                    }
                };

                // Step 2: persist the credential before anything reads it.
                crate::util::token::set(&resp.token);

                // Step 3: decode claims from the stored credential.
                let claims = match crate::util::claims::decode(&resp.token) {
                    Ok(claims) => claims,
                    Err(e) => {
                        // The issuer handed back something unreadable; roll
                        // the slot back so the gate stays Anonymous.
                        leptos::logging::warn!("issued token failed to decode: {e}");
                        crate::util::token::clear();
                        info.set("Unable to login".to_owned());
                        session.update(|s| s.set_loading(false));
                        busy.set(false);
                        return;
                    }
                };

                // Step 4: fetch the profile keyed by the decoded subject id.
                // Step 5: publish; a None profile keeps claims-only auth.
                let profile = crate::net::api::fetch_user(&claims.user_id).await;
                if profile.is_none() {
                    leptos::logging::warn!("profile fetch failed; continuing with claims only");
                }
                session.update(|s| s.apply_login(claims, profile));
                navigate("/", NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <section class="login-page flex-center">
            <div class="login-card">
                <h2 class="form-heading">"Welcome Back"</h2>
                <p class="login-card__subtitle">"Sign in to continue to DoctorOnCall"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="form-input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn form-btn" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p>
                    "Don't have an account? "
                    <A href="/register">"Sign Up"</A>
                </p>
            </div>
        </section>
    }
}
