//! Admin dashboard: registered-users table.
//!
//! SYSTEM CONTEXT
//! ==============
//! This route is wrapped in the admin gate; by the time it renders, the
//! stored credential decoded with `isAdmin = true` on this navigation.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::navbar::Navbar;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let users = LocalResource::new(|| crate::net::api::fetch_all_users());

    view! {
        <Navbar/>
        <section class="dashboard-page">
            <h2>"All Users"</h2>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    users.get().map(|list| {
                        view! {
                            <table class="dashboard-page__table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Admin"</th>
                                        <th>"Doctor"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .iter()
                                        .map(|u| {
                                            view! {
                                                <tr>
                                                    <td>{u.full_name()}</td>
                                                    <td>{u.email.clone()}</td>
                                                    <td>{if u.is_admin { "yes" } else { "no" }}</td>
                                                    <td>{if u.is_doctor { "yes" } else { "no" }}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
