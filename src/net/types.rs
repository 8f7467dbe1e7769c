//! Wire DTOs for the booking API boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON documents via serde
//! renames so deserialization stays schema-driven. The backend omits or
//! nulls optional profile fields freely, hence the `default` attributes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Full user record as returned by `GET /api/user/getuser/{id}`.
///
/// This is the "profile" half of the session: richer than the token claims
/// and only present after an explicit fetch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub pic: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(rename = "bloodGroup", default)]
    pub blood_group: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
    #[serde(rename = "emergencyContact", default)]
    pub emergency_contact: Option<String>,
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
    #[serde(rename = "isDoctor", default)]
    pub is_doctor: bool,
}

impl UserInfo {
    /// Display name for navbars and greetings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
            .trim()
            .to_owned()
    }
}

/// A doctor listing entry from `GET /api/doctor/getalldoctors`.
///
/// The backend joins the doctor application document with the user record,
/// so identity fields ride along with practice details.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub lastname: String,
    #[serde(default)]
    pub specialization: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub fees: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub rating: f64,
    #[serde(rename = "totalReviews", default)]
    pub total_reviews: i64,
    #[serde(default)]
    pub pic: Option<String>,
}

/// A booked appointment from `GET /api/appointment/getallappointments`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "userId", default)]
    pub user_id: String,
    #[serde(rename = "doctorId", default)]
    pub doctor_id: String,
    #[serde(default)]
    pub doctorname: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(rename = "appointmentType", default)]
    pub appointment_type: Option<String>,
    #[serde(default)]
    pub status: String,
}

/// Body for `POST /api/user/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response from `POST /api/user/login` — the bearer credential plus a
/// human-readable message.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: String,
    pub token: String,
}

/// Body for `POST /api/user/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pic: Option<String>,
}
