use super::*;
use crate::net::types::UserInfo;
use crate::util::claims::Claims;

fn claims() -> Claims {
    Claims {
        user_id: "u-1".to_owned(),
        is_admin: false,
        is_doctor: false,
        expires_at: 1_900_000_000,
    }
}

#[test]
fn notice_hidden_while_profile_fetch_in_flight() {
    let mut state = SessionState::default();
    state.apply_login(claims(), None);
    state.set_loading(true);
    assert!(!show_profile_notice(&state));
}

#[test]
fn notice_shown_when_loading_settles_without_profile() {
    let mut state = SessionState::default();
    state.apply_login(claims(), None);
    state.set_loading(false);
    assert!(show_profile_notice(&state));
}

#[test]
fn notice_hidden_once_profile_arrives() {
    let mut state = SessionState::default();
    state.apply_login(claims(), None);
    state.set_user_info(Some(UserInfo {
        id: "u-1".to_owned(),
        ..UserInfo::default()
    }));
    assert!(!show_profile_notice(&state));
}
