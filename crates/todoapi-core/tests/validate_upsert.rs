//! Validator and payload decoding tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use todoapi_core::{
    error::ClientCode, parse_id, validate_upsert, TodoError, UpsertTodo, EMPTY_TEXT_MSG,
};

fn validate(body: &str) -> todoapi_core::Result<todoapi_core::ValidTodo> {
    validate_upsert(UpsertTodo::from_json(body.as_bytes())?)
}

#[test]
fn text_only_defaults_is_complete_to_false() {
    let v = validate(r#"{"text":"Buy milk"}"#).unwrap();
    assert_eq!(v.text, "Buy milk");
    assert!(!v.is_complete);
}

#[test]
fn explicit_is_complete_is_kept() {
    let v = validate(r#"{"text":"Done","isComplete":true}"#).unwrap();
    assert!(v.is_complete);
}

#[test]
fn null_is_complete_is_false() {
    let v = validate(r#"{"text":"x","isComplete":null}"#).unwrap();
    assert!(!v.is_complete);
}

#[test]
fn missing_text_is_rejected() {
    let err = validate(r#"{"isComplete":true}"#).expect_err("must fail");
    assert_eq!(err.client_code(), ClientCode::BadRequest);
    assert_eq!(err.to_string(), EMPTY_TEXT_MSG);
}

#[test]
fn empty_text_is_rejected() {
    let err = validate(r#"{"text":""}"#).expect_err("must fail");
    assert_eq!(err.public_message(), EMPTY_TEXT_MSG);
}

#[test]
fn whitespace_text_is_accepted_verbatim() {
    let v = validate(r#"{"text":"   "}"#).unwrap();
    assert_eq!(v.text, "   ");
}

#[test]
fn empty_body_fails_on_text() {
    let err = validate("").expect_err("must fail");
    assert_eq!(err.to_string(), EMPTY_TEXT_MSG);
}

#[test]
fn unknown_fields_are_ignored() {
    let v = validate(r#"{"id":99,"text":"echo","isComplete":false}"#).unwrap();
    assert_eq!(v.text, "echo");
}

#[test]
fn malformed_json_is_bad_request() {
    let err = validate("{not json").expect_err("must fail");
    assert!(matches!(err, TodoError::Validation(ref m) if m == "invalid JSON body"));
}

#[test]
fn non_string_text_is_bad_request() {
    let err = validate(r#"{"text":5}"#).expect_err("must fail");
    assert_eq!(err.client_code(), ClientCode::BadRequest);
}

#[test]
fn numeric_ids_parse() {
    assert_eq!(parse_id("4").unwrap(), 4);
}

#[test]
fn non_numeric_id_is_not_found() {
    let err = parse_id("abc").expect_err("must fail");
    assert_eq!(err.client_code(), ClientCode::NotFound);
    assert_eq!(err.to_string(), "Todo with ID abc not found");
}

#[test]
fn is_complete_follows_truthiness() {
    let cases = [
        ("1", true),
        ("0", false),
        ("0.0", false),
        (r#""""#, false),
        (r#""yes""#, true),
        (r#""false""#, true),
        ("[]", true),
        ("{}", true),
        ("false", false),
    ];
    for (raw, expected) in cases {
        let body = format!(r#"{{"text":"a","isComplete":{raw}}}"#);
        let v = validate(&body).unwrap();
        assert_eq!(v.is_complete, expected, "isComplete = {raw}");
    }
}
