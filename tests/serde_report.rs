#![cfg(feature = "serde")]

use serde_json::json;
use utf8_sanitize::{
    sanitize_with, ErrorCode, ErrorKind, SanitizeOptions, Utf8Error,
};

#[test]
fn options_roundtrip() {
    let opts = SanitizeOptions::new().with_error_report(true);
    let text = serde_json::to_string(&opts).unwrap();
    assert_eq!(text, r#"{"report_errors":true}"#);
    let back: SanitizeOptions = serde_json::from_str(&text).unwrap();
    assert_eq!(back, opts);
}

#[test]
fn options_fields_default_when_missing() {
    let opts: SanitizeOptions = serde_json::from_str("{}").unwrap();
    assert_eq!(opts, SanitizeOptions::default());
}

#[test]
fn error_roundtrip() {
    let err = Utf8Error::new(ErrorCode::TruncatedSequence, 7);
    let value = serde_json::to_value(err).unwrap();
    assert_eq!(value, json!({"code": "TruncatedSequence", "offset": 7}));
    let back: Utf8Error = serde_json::from_value(value).unwrap();
    assert_eq!(back, err);

    let kind: ErrorKind = serde_json::from_str(r#""Encode""#).unwrap();
    assert_eq!(kind, ErrorKind::Encode);
}

#[test]
fn sanitize_report_serializes() {
    let report = sanitize_with(b"a\xFF", SanitizeOptions::new().with_error_report(true));
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value, json!({"text": "a\u{FFFD}", "errors": [1]}));
}
