use super::*;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

fn token(is_admin: bool) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD
        .encode(format!(r#"{{"userId":"u-1","isAdmin":{is_admin},"exp":1900000000}}"#).as_bytes());
    format!("{header}.{payload}.sig")
}

#[test]
fn anonymous_sees_login_and_register_only() {
    let links = links_for(None);
    assert!(links.auth_entries);
    assert!(!links.dashboard);
    assert!(!links.patient);
    assert!(!links.logout);
}

#[test]
fn undecodable_token_falls_back_to_anonymous_links() {
    assert_eq!(links_for(Some("not-a-credential")), links_for(None));
}

#[test]
fn patient_sees_patient_links_and_logout() {
    let links = links_for(Some(&token(false)));
    assert!(links.patient);
    assert!(links.logout);
    assert!(!links.dashboard);
    assert!(!links.auth_entries);
}

#[test]
fn admin_sees_dashboard_and_logout() {
    let links = links_for(Some(&token(true)));
    assert!(links.dashboard);
    assert!(links.logout);
    assert!(!links.patient);
    assert!(!links.auth_entries);
}
