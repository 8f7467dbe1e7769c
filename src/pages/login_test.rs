use super::*;

#[test]
fn rejects_empty_email() {
    assert_eq!(
        validate_login_form("", "longenough"),
        Err("Please fill in all fields")
    );
}

#[test]
fn rejects_empty_password() {
    assert_eq!(
        validate_login_form("a@b.c", ""),
        Err("Please fill in all fields")
    );
}

#[test]
fn rejects_short_password() {
    assert_eq!(
        validate_login_form("a@b.c", "1234"),
        Err("Password must be at least 5 characters long")
    );
}

#[test]
fn accepts_minimum_length_password() {
    assert_eq!(validate_login_form("a@b.c", "12345"), Ok(()));
}
