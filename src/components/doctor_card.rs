//! Card for one doctor in the public listing grid.

use leptos::prelude::*;

use crate::net::types::Doctor;

/// Doctor summary card: name, specialization, experience, fees, rating.
#[component]
pub fn DoctorCard(doctor: Doctor) -> impl IntoView {
    let name = format!("Dr. {} {}", doctor.firstname, doctor.lastname);
    let rating = format!("{:.1} ({} reviews)", doctor.rating, doctor.total_reviews);
    view! {
        <div class="doctor-card">
            <h3 class="doctor-card__name">{name}</h3>
            <p class="doctor-card__specialization">{doctor.specialization}</p>
            <p>{format!("{} years of experience", doctor.experience)}</p>
            <p>{format!("Consultation fee: ${}", doctor.fees)}</p>
            <p class="doctor-card__rating">{rating}</p>
        </div>
    }
}
