//! Authenticated profile view/edit page.
//!
//! Reads the profile snapshot from the session store; saving pushes the
//! update to the API and refreshes the store copy on success. While the
//! store's loading flag is up (profile fetch in flight) the page shows the
//! shared spinner instead of an empty-profile notice.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

/// Show the unavailable-profile notice only once loading has settled with
/// no profile; while a fetch is in flight the spinner takes its place.
pub fn show_profile_notice(state: &SessionState) -> bool {
    !state.loading && state.user_info.is_none()
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let initial = session.with_untracked(|s| s.user_info.clone().unwrap_or_default());
    let mobile = RwSignal::new(initial.mobile.clone().unwrap_or_default());
    let address = RwSignal::new(initial.address.clone().unwrap_or_default());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let mut updated = session.with_untracked(|s| s.user_info.clone().unwrap_or_default());
            updated.mobile = Some(mobile.get()).filter(|m| !m.is_empty());
            updated.address = Some(address.get()).filter(|a| !a.is_empty());
            leptos::task::spawn_local(async move {
                match crate::net::api::update_profile(&updated).await {
                    Ok(()) => {
                        session.update(|s| s.set_user_info(Some(updated)));
                        info.set("Profile updated".to_owned());
                    }
                    Err(e) => {
                        leptos::logging::warn!("profile update failed: {e}");
                        info.set("Unable to update profile".to_owned());
                    }
                }
                busy.set(false);
            });
        }
    };

    let heading = move || {
        session.with(|s| {
            s.user_info
                .as_ref()
                .map_or_else(|| "Your Profile".to_owned(), |u| u.full_name())
        })
    };

    view! {
        <Navbar/>
        <section class="profile-page">
            <h2>{heading}</h2>
            <Show when=move || session.with(|s| s.loading)>
                <Loading/>
            </Show>
            <Show when=move || session.with(show_profile_notice)>
                <p class="profile-page__notice">
                    "Profile details are unavailable right now; you are still signed in."
                </p>
            </Show>
            <form class="profile-form" on:submit=on_save>
                <input
                    class="form-input"
                    type="tel"
                    placeholder="Mobile number"
                    prop:value=move || mobile.get()
                    on:input=move |ev| mobile.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="text"
                    placeholder="Address"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                />
                <button class="btn form-btn" type="submit" disabled=move || busy.get()>
                    "Save"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="profile-message">{move || info.get()}</p>
            </Show>
        </section>
    }
}
