//! Fallback page for unmatched routes.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found flex-center">
            <h2>"Page not found"</h2>
            <A href="/">"Back to home"</A>
        </section>
    }
}
