use super::*;

fn claims(is_admin: bool) -> Claims {
    Claims {
        user_id: "u-1".to_owned(),
        is_admin,
        is_doctor: false,
        expires_at: 1_900_000_000,
    }
}

fn profile() -> UserInfo {
    UserInfo {
        id: "u-1".to_owned(),
        firstname: "Asha".to_owned(),
        lastname: "Rao".to_owned(),
        email: "asha@example.com".to_owned(),
        ..UserInfo::default()
    }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_session_is_anonymous_and_empty() {
    let state = SessionState::default();
    assert_eq!(state.status, SessionStatus::Anonymous);
    assert!(state.claims.is_none());
    assert!(state.user_info.is_none());
    assert!(!state.loading);
}

// =============================================================
// Login transition
// =============================================================

#[test]
fn login_with_profile_is_fully_authenticated() {
    let mut state = SessionState::default();
    state.apply_login(claims(false), Some(profile()));
    assert_eq!(state.status, SessionStatus::Authenticated);
    assert_eq!(state.user_id(), Some("u-1"));
    assert_eq!(state.user_info.as_ref().unwrap().firstname, "Asha");
    assert!(!state.loading);
}

#[test]
fn login_without_profile_stays_authenticated_via_claims() {
    // Profile fetch failed after the token was stored: not fatal.
    let mut state = SessionState::default();
    state.apply_login(claims(false), None);
    assert_eq!(state.status, SessionStatus::Authenticated);
    assert!(state.claims.is_some());
    assert!(state.user_info.is_none());
}

#[test]
fn later_profile_fetch_fills_the_empty_profile() {
    let mut state = SessionState::default();
    state.apply_login(claims(false), None);
    state.set_user_info(Some(profile()));
    assert_eq!(state.status, SessionStatus::Authenticated);
    assert!(state.user_info.is_some());
}

#[test]
fn is_admin_reflects_claims() {
    let mut state = SessionState::default();
    assert!(!state.is_admin());
    state.apply_login(claims(true), None);
    assert!(state.is_admin());
}

// =============================================================
// Logout transition
// =============================================================

#[test]
fn logout_resets_to_default() {
    let mut state = SessionState::default();
    state.apply_login(claims(true), Some(profile()));
    state.apply_logout();
    assert_eq!(state, SessionState::default());
}

#[test]
fn logout_from_anonymous_is_idempotent() {
    // Clearing an already-empty session must match a single logout from an
    // authenticated session.
    let mut from_auth = SessionState::default();
    from_auth.apply_login(claims(false), Some(profile()));
    from_auth.apply_logout();

    let mut from_anon = SessionState::default();
    from_anon.apply_logout();
    from_anon.set_user_info(None);

    assert_eq!(from_auth, from_anon);
    assert_eq!(from_anon, SessionState::default());
}

#[test]
fn logout_clears_loading_flag() {
    let mut state = SessionState::default();
    state.set_loading(true);
    state.apply_logout();
    assert!(!state.loading);
}

// =============================================================
// Loading flag
// =============================================================

#[test]
fn set_loading_toggles_only_the_flag() {
    let mut state = SessionState::default();
    state.apply_login(claims(false), Some(profile()));
    state.set_loading(true);
    assert!(state.loading);
    assert_eq!(state.status, SessionStatus::Authenticated);
    state.set_loading(false);
    assert!(!state.loading);
}
