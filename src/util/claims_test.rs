use super::*;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Build an unsigned-but-well-formed token around the given payload JSON.
fn token_with_payload(payload_json: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(payload_json.as_bytes());
    format!("{header}.{payload}.sig")
}

// =============================================================
// Valid tokens
// =============================================================

#[test]
fn decodes_full_claim_document() {
    let token =
        token_with_payload(r#"{"userId":"u-1","isAdmin":true,"isDoctor":false,"exp":1900000000}"#);
    let claims = decode(&token).unwrap();
    assert_eq!(claims.user_id, "u-1");
    assert!(claims.is_admin);
    assert!(!claims.is_doctor);
    assert_eq!(claims.expires_at, 1_900_000_000);
}

#[test]
fn role_flags_default_to_false_when_absent() {
    let token = token_with_payload(r#"{"userId":"u-2","exp":1900000000}"#);
    let claims = decode(&token).unwrap();
    assert!(!claims.is_admin);
    assert!(!claims.is_doctor);
}

#[test]
fn extra_claims_are_ignored() {
    let token =
        token_with_payload(r#"{"userId":"u-3","exp":1900000000,"iss":"doconcall","iat":1}"#);
    assert!(decode(&token).is_ok());
}

// =============================================================
// Malformed tokens — every shape of garbage maps to DecodeError
// =============================================================

#[test]
fn empty_string_is_rejected() {
    assert_eq!(decode(""), Err(DecodeError::Empty));
}

#[test]
fn opaque_garbage_is_rejected() {
    assert_eq!(decode("not-a-credential"), Err(DecodeError::MalformedStructure));
}

#[test]
fn two_segments_are_rejected() {
    assert_eq!(decode("aaaa.bbbb"), Err(DecodeError::MalformedStructure));
}

#[test]
fn four_segments_are_rejected() {
    assert_eq!(decode("a.b.c.d"), Err(DecodeError::MalformedStructure));
}

#[test]
fn empty_payload_segment_is_rejected() {
    assert_eq!(decode("a..c"), Err(DecodeError::MalformedStructure));
}

#[test]
fn non_base64_payload_is_rejected() {
    assert_eq!(decode("head.!!!!.sig"), Err(DecodeError::InvalidBase64));
}

#[test]
fn truncated_payload_is_rejected() {
    // Chop the payload mid-way so the base64 decodes but the JSON is cut off.
    let full = URL_SAFE_NO_PAD.encode(br#"{"userId":"u-1","exp":1900000000}"#);
    let truncated = &full[..full.len() / 2];
    let token = format!("head.{truncated}.sig");
    assert!(matches!(decode(&token), Err(_)));
}

#[test]
fn valid_json_wrong_shape_is_rejected() {
    // Decodes as JSON but carries none of the required fields.
    let token = token_with_payload(r#"{"hello":"world"}"#);
    assert!(matches!(decode(&token), Err(DecodeError::InvalidPayload(_))));
}

#[test]
fn missing_user_id_is_rejected() {
    let token = token_with_payload(r#"{"isAdmin":true,"exp":1900000000}"#);
    assert!(matches!(decode(&token), Err(DecodeError::InvalidPayload(_))));
}

#[test]
fn missing_exp_is_rejected() {
    let token = token_with_payload(r#"{"userId":"u-1","isAdmin":true}"#);
    assert!(matches!(decode(&token), Err(DecodeError::InvalidPayload(_))));
}

#[test]
fn non_object_payload_is_rejected() {
    let token = token_with_payload(r#"[1,2,3]"#);
    assert!(matches!(decode(&token), Err(DecodeError::InvalidPayload(_))));
}

// =============================================================
// Expiry
// =============================================================

#[test]
fn is_expired_compares_against_now() {
    let claims = Claims {
        user_id: "u-1".to_owned(),
        is_admin: false,
        is_doctor: false,
        expires_at: 1000,
    };
    assert!(!claims.is_expired(999));
    assert!(claims.is_expired(1000));
    assert!(claims.is_expired(1001));
}
