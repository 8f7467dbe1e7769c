//! Registration page; on success the visitor is sent to the login page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Validate the registration form before submitting.
pub fn validate_register_form(
    firstname: &str,
    lastname: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if firstname.is_empty() || lastname.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Please fill in all fields");
    }
    if password.len() < 5 {
        return Err("Password must be at least 5 characters long");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let firstname = RwSignal::new(String::new());
    let lastname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(msg) = validate_register_form(
            firstname.get().trim(),
            lastname.get().trim(),
            email.get().trim(),
            &password.get(),
            &confirm.get(),
        ) {
            info.set(msg.to_owned());
            return;
        }
        busy.set(true);
        info.set("Registering...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            let body = crate::net::types::RegisterRequest {
                firstname: firstname.get().trim().to_owned(),
                lastname: lastname.get().trim().to_owned(),
                email: email.get().trim().to_owned(),
                password: password.get(),
                pic: None,
            };
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&body).await {
                    Ok(()) => navigate("/login", NavigateOptions::default()),
                    Err(e) => {
                        leptos::logging::warn!("registration failed: {e}");
                        info.set("Unable to register".to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &navigate;
        }
    };

    view! {
        <section class="register-page flex-center">
            <div class="register-card">
                <h2 class="form-heading">"Create Account"</h2>
                <form class="register-form" on:submit=on_submit>
                    <input
                        class="form-input"
                        type="text"
                        placeholder="First name"
                        prop:value=move || firstname.get()
                        on:input=move |ev| firstname.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="text"
                        placeholder="Last name"
                        prop:value=move || lastname.get()
                        on:input=move |ev| lastname.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="form-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn form-btn" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="register-message">{move || info.get()}</p>
                </Show>
                <p>
                    "Already have an account? "
                    <A href="/login">"Sign In"</A>
                </p>
            </div>
        </section>
    }
}
