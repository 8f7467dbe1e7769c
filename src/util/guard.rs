//! Route access gate: per-navigation render/redirect decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed screen is wrapped in [`Guarded`], which re-evaluates the
//! stored token against the route's declared policy on each navigation
//! attempt. Evaluation is synchronous and stateless; the token slot is read
//! fresh every time so logout and token removal take effect immediately.
//!
//! ERROR HANDLING
//! ==============
//! A token that fails to decode is treated exactly like an absent token —
//! the gate fails closed to Anonymous, never open to Authenticated.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::util::claims::{self, Claims};
use crate::util::token;

/// Access policy a route declares for itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoutePolicy {
    /// Only render for anonymous visitors (login, register).
    PublicOnly,
    /// Any authenticated user may render.
    RequireAuth,
    /// Only authenticated admins may render.
    RequireAdmin,
}

/// Terminal outcome of one gate evaluation. Exactly one applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    /// Render the requested view.
    Rendering,
    /// Redirect to `/login`.
    RedirectToLogin,
    /// Redirect to `/`.
    RedirectHome,
}

/// Whether the gate should honor the token's `exp` claim.
///
/// The original flow never checks expiry client-side — an expired token
/// counts as authenticated until the API rejects a request. `Ignore` keeps
/// that behavior and is the routing default; `Enforce` treats an expired
/// token as absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExpiryMode {
    #[default]
    Ignore,
    Enforce,
}

/// Evaluate `policy` against the presented token with the default
/// [`ExpiryMode::Ignore`].
pub fn evaluate(policy: RoutePolicy, token: Option<&str>) -> GateOutcome {
    evaluate_with(policy, token, ExpiryMode::Ignore, 0)
}

/// Evaluate `policy` against the presented token.
///
/// `now_unix` is only consulted under [`ExpiryMode::Enforce`].
pub fn evaluate_with(
    policy: RoutePolicy,
    token: Option<&str>,
    expiry: ExpiryMode,
    now_unix: i64,
) -> GateOutcome {
    // Decode failure is indistinguishable from absence here: both mean
    // Anonymous. The explicit match keeps the failure path visible.
    let claims: Option<Claims> = match token {
        None => None,
        Some(raw) => match claims::decode(raw) {
            Ok(claims) => Some(claims),
            Err(_) => None,
        },
    };
    let claims = match (expiry, claims) {
        (ExpiryMode::Enforce, Some(c)) if c.is_expired(now_unix) => None,
        (_, c) => c,
    };

    match (policy, claims) {
        (RoutePolicy::PublicOnly, None) => GateOutcome::Rendering,
        (RoutePolicy::PublicOnly, Some(_)) => GateOutcome::RedirectHome,
        (RoutePolicy::RequireAuth | RoutePolicy::RequireAdmin, None) => {
            GateOutcome::RedirectToLogin
        }
        (RoutePolicy::RequireAuth, Some(_)) => GateOutcome::Rendering,
        (RoutePolicy::RequireAdmin, Some(c)) => {
            if c.is_admin {
                GateOutcome::Rendering
            } else {
                GateOutcome::RedirectHome
            }
        }
    }
}

/// Current time in seconds since the Unix epoch.
#[allow(clippy::cast_possible_truncation)]
pub fn now_unix() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        (js_sys::Date::now() / 1000.0) as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_secs()).unwrap_or(i64::MAX))
    }
}

/// Route wrapper applying `policy` on every navigation attempt.
///
/// Renders its children only for [`GateOutcome::Rendering`]; otherwise it
/// installs a replace-navigation to the login page or home.
#[component]
pub fn Guarded(
    policy: RoutePolicy,
    #[prop(optional)] expiry: ExpiryMode,
    children: ChildrenFn,
) -> impl IntoView {
    let navigate = use_navigate();
    // Fresh read of the token slot for this navigation attempt.
    let outcome = evaluate_with(policy, token::get().as_deref(), expiry, now_unix());

    Effect::new(move || {
        let options = NavigateOptions {
            replace: true,
            ..NavigateOptions::default()
        };
        match outcome {
            GateOutcome::RedirectToLogin => navigate("/login", options),
            GateOutcome::RedirectHome => navigate("/", options),
            GateOutcome::Rendering => {}
        }
    });

    view! {
        <Show when=move || outcome == GateOutcome::Rendering>
            {children()}
        </Show>
    }
}
