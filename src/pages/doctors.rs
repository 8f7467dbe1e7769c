//! Public doctor listing with a client-side name/specialization filter.

#[cfg(test)]
#[path = "doctors_test.rs"]
mod doctors_test;

use leptos::prelude::*;

use crate::components::doctor_card::DoctorCard;
use crate::components::loading::Loading;
use crate::components::navbar::Navbar;
use crate::net::types::Doctor;

/// Case-insensitive filter over name and specialization.
fn matches_filter(doctor: &Doctor, filter: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    doctor.firstname.to_lowercase().contains(&needle)
        || doctor.lastname.to_lowercase().contains(&needle)
        || doctor.specialization.to_lowercase().contains(&needle)
}

#[component]
pub fn DoctorsPage() -> impl IntoView {
    let filter = RwSignal::new(String::new());
    let doctors = LocalResource::new(|| crate::net::api::fetch_doctors());

    view! {
        <Navbar/>
        <section class="doctors-page">
            <h2>"Our Doctors"</h2>
            <input
                class="form-input doctors-page__filter"
                type="text"
                placeholder="Search by name or specialization"
                prop:value=move || filter.get()
                on:input=move |ev| filter.set(event_target_value(&ev))
            />
            <Suspense fallback=move || view! { <Loading/> }>
                {move || {
                    doctors.get().map(|list| {
                        let shown: Vec<Doctor> = list
                            .iter()
                            .filter(|d| matches_filter(d, filter.get().trim()))
                            .cloned()
                            .collect();
                        if shown.is_empty() {
                            view! { <p class="doctors-page__empty">"No doctors found."</p> }
                                .into_any()
                        } else {
                            view! {
                                <div class="doctors-page__grid">
                                    {shown
                                        .into_iter()
                                        .map(|d| view! { <DoctorCard doctor=d/> })
                                        .collect_view()}
                                </div>
                            }
                            .into_any()
                        }
                    })
                }}
            </Suspense>
        </section>
    }
}
