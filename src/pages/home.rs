//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::navbar::Navbar;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Navbar/>
        <section class="home-hero flex-center">
            <h1>"Your health, one appointment away"</h1>
            <p>"Book consultations with verified doctors from home."</p>
            <A href="/doctors">"Browse doctors"</A>
        </section>
    }
}
