use super::*;

#[test]
fn user_endpoint_formats_expected_path() {
    assert_eq!(user_endpoint("u123"), "/api/user/getuser/u123");
}

#[test]
fn appointments_endpoint_scopes_to_user() {
    assert_eq!(
        appointments_endpoint("u123"),
        "/api/appointment/getallappointments?search=u123"
    );
}

#[test]
fn login_rejected_message_formats_status() {
    assert_eq!(login_rejected_message(400), "login failed with status 400");
}

#[test]
fn register_rejected_message_formats_status() {
    assert_eq!(
        register_rejected_message(409),
        "registration failed with status 409"
    );
}

#[test]
fn api_error_displays_inner_message() {
    let err = ApiError::Rejected("login failed with status 400".to_owned());
    assert_eq!(
        err.to_string(),
        "server rejected the request: login failed with status 400"
    );
}
