//! REST API helpers for the booking backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side (SSR):
//! stubs returning `None`/error since these endpoints are only meaningful in
//! the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so a rejected
//! login or a failed profile fetch degrades UI behavior without crashing
//! hydration. Authenticated calls attach a bearer header from the token
//! slot; a missing token simply sends no header and lets the backend reject.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Appointment, Doctor, LoginResponse, RegisterRequest, UserInfo};
#[cfg(feature = "hydrate")]
use super::types::LoginRequest;
#[cfg(feature = "hydrate")]
use crate::util::token;

/// Why an API call produced no usable response.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server rejected the request: {0}")]
    Rejected(String),
    #[error("not available on server")]
    NotInBrowser,
}

#[cfg(any(test, feature = "hydrate"))]
fn user_endpoint(user_id: &str) -> String {
    format!("/api/user/getuser/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn appointments_endpoint(user_id: &str) -> String {
    format!("/api/appointment/getallappointments?search={user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn login_rejected_message(status: u16) -> String {
    format!("login failed with status {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn register_rejected_message(status: u16) -> String {
    format!("registration failed with status {status}")
}

#[cfg(feature = "hydrate")]
fn bearer_get(url: &str) -> gloo_net::http::RequestBuilder {
    let builder = gloo_net::http::Request::get(url);
    match token::get() {
        Some(t) => builder.header("Authorization", &format!("Bearer {t}")),
        None => builder,
    }
}

/// Exchange credentials for a bearer token via `POST /api/user/login`.
///
/// # Errors
///
/// [`ApiError::Rejected`] when the backend declines the credentials,
/// [`ApiError::Transport`] when the request never completed.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post("/api/user/login")
            .json(&body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected(login_rejected_message(resp.status())));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::NotInBrowser)
    }
}

/// Create an account via `POST /api/user/register`.
///
/// # Errors
///
/// Same taxonomy as [`login`].
pub async fn register(body: &RegisterRequest) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/user/register")
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected(register_rejected_message(resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::NotInBrowser)
    }
}

/// Fetch a user's full record from `GET /api/user/getuser/{id}`.
/// Returns `None` on any failure — profile absence is not fatal.
pub async fn fetch_user(user_id: &str) -> Option<UserInfo> {
    #[cfg(feature = "hydrate")]
    {
        let resp = bearer_get(&user_endpoint(user_id)).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<UserInfo>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

/// Fetch the public doctor list from `GET /api/doctor/getalldoctors`.
pub async fn fetch_doctors() -> Vec<Doctor> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = gloo_net::http::Request::get("/api/doctor/getalldoctors")
            .send()
            .await
        else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        resp.json::<Vec<Doctor>>().await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Fetch the current user's appointments.
pub async fn fetch_appointments(user_id: &str) -> Vec<Appointment> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = bearer_get(&appointments_endpoint(user_id)).send().await else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        resp.json::<Vec<Appointment>>().await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        Vec::new()
    }
}

/// Fetch every registered user (admin dashboard) from
/// `GET /api/user/getallusers`.
pub async fn fetch_all_users() -> Vec<UserInfo> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = bearer_get("/api/user/getallusers").send().await else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        resp.json::<Vec<UserInfo>>().await.unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Update the current user's profile via `PUT /api/user/updateprofile`.
///
/// # Errors
///
/// Same taxonomy as [`login`].
pub async fn update_profile(body: &UserInfo) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let builder = gloo_net::http::Request::put("/api/user/updateprofile");
        let builder = match token::get() {
            Some(t) => builder.header("Authorization", &format!("Bearer {t}")),
            None => builder,
        };
        let resp = builder
            .json(body)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Rejected(format!(
                "profile update failed with status {}",
                resp.status()
            )));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        Err(ApiError::NotInBrowser)
    }
}
