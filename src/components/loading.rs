//! Full-screen loading indicator shown while route data is in flight.

use leptos::prelude::*;

#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading flex-center">
            <div class="loading__spinner"></div>
            <p>"Loading..."</p>
        </div>
    }
}
