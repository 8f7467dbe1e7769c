//! Authenticated appointment list for the current user.

use leptos::prelude::*;

use crate::components::loading::Loading;
use crate::components::navbar::Navbar;
use crate::state::session::SessionState;

#[component]
pub fn AppointmentsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    // The fetch is keyed by the subject id from the decoded claims; the
    // guard has already ensured a decodable credential exists.
    let user_id = session.with_untracked(|s| s.user_id().map(str::to_owned).unwrap_or_default());

    let appointments = LocalResource::new(move || {
        let user_id = user_id.clone();
        async move { crate::net::api::fetch_appointments(&user_id).await }
    });

    view! {
        <Navbar/>
        <section class="appointments-page">
            <h2>"Your Appointments"</h2>
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    appointments.get().map(|list| {
                        if list.is_empty() {
                            view! { <p class="appointments-page__empty">"No appointments yet."</p> }
                                .into_any()
                        } else {
                            view! {
                                <table class="appointments-page__table">
                                    <thead>
                                        <tr>
                                            <th>"Doctor"</th>
                                            <th>"Date"</th>
                                            <th>"Time"</th>
                                            <th>"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        {list
                                            .iter()
                                            .map(|a| {
                                                view! {
                                                    <tr>
                                                        <td>{a.doctorname.clone().unwrap_or_default()}</td>
                                                        <td>{a.date.clone()}</td>
                                                        <td>{a.time.clone()}</td>
                                                        <td>{a.status.clone()}</td>
                                                    </tr>
                                                }
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
