use utf8_sanitize::{
    codepoints, display_sanitized, is_valid_utf8, label, sanitize_to, validate, ErrorCode,
    ErrorKind, HexDump, Utf8Error, REPLACEMENT_CHARACTER, REPLACEMENT_CODEPOINT,
};

#[test]
fn replacement_constants_agree() {
    assert_eq!(u32::from(REPLACEMENT_CHARACTER), REPLACEMENT_CODEPOINT);
    let mut buf = [0u8; 4];
    assert_eq!(
        REPLACEMENT_CHARACTER.encode_utf8(&mut buf).as_bytes(),
        utf8_sanitize::REPLACEMENT_BYTES
    );
}

#[test]
fn is_valid_utf8_accepts_well_formed() {
    assert!(is_valid_utf8(b""));
    assert!(is_valid_utf8(b"ascii"));
    assert!(is_valid_utf8("aé€😀".as_bytes()));
    assert!(is_valid_utf8(&[0xED, 0x9F, 0xBF]));
    assert!(is_valid_utf8(&[0xF4, 0x8F, 0xBF, 0xBF]));
}

#[test]
fn is_valid_utf8_rejects_ill_formed() {
    assert!(!is_valid_utf8(&[0xC0, 0x80]));
    assert!(!is_valid_utf8(&[0xE0, 0x80, 0x80]));
    assert!(!is_valid_utf8(&[0xED, 0xA0, 0x80]));
    assert!(!is_valid_utf8(&[0xF4, 0x90, 0x80, 0x80]));
    assert!(!is_valid_utf8(&[0xF5]));
    assert!(!is_valid_utf8(b"ok\xE2\x82"));
}

#[test]
fn validate_borrows_valid_input() {
    let input = "π ≈ 3.14".as_bytes();
    assert_eq!(validate(input), Ok("π ≈ 3.14"));
}

#[test]
fn validate_reports_first_error() {
    let err = validate(b"ab\xFFcd\xFF").unwrap_err();
    assert_eq!((err.code, err.offset), (ErrorCode::InvalidLeadByte, 2));
    assert_eq!(err.kind(), ErrorKind::Decode);

    let err = validate(b"abc\xF0\x9F\x98").unwrap_err();
    assert_eq!((err.code, err.offset), (ErrorCode::TruncatedSequence, 6));

    let err = validate(b"\xC3(").unwrap_err();
    assert_eq!((err.code, err.offset), (ErrorCode::InvalidContinuation, 1));
}

#[test]
fn codepoints_iterator() {
    let cps: Vec<u32> = codepoints(b"A\xC3\xA9\xC3").collect();
    assert_eq!(cps, [0x41, 0xE9, 0xFFFD]);
    assert_eq!(codepoints(b"").next(), None);
}

#[cfg(feature = "alloc")]
#[test]
fn to_codepoints_vectors() {
    use utf8_sanitize::to_codepoints;

    assert_eq!(to_codepoints(&[0x41, 0xC3, 0xA9]), [0x41, 0xE9]);
    assert_eq!(to_codepoints("😀".as_bytes()), [0x1F600]);
    assert_eq!(to_codepoints(&[0xE0, 0x80, 0x80]), [0xFFFD; 3]);
    assert!(to_codepoints(b"").is_empty());
}

#[test]
fn sanitize_to_writer() {
    let mut out = String::new();
    sanitize_to(b"x\xF8y", &mut out).unwrap();
    assert_eq!(out, "x\u{FFFD}y");
}

#[test]
fn lossy_display() {
    assert_eq!(display_sanitized(b"caf\xC3").to_string(), "caf\u{FFFD}");
    assert_eq!(format!("[{}]", display_sanitized("ok".as_bytes())), "[ok]");
}

#[test]
fn codepoint_labels() {
    assert_eq!(label(0).to_string(), "U+0000");
    assert_eq!(label(0x41).to_string(), "U+0041");
    assert_eq!(label(0xFE68).to_string(), "U+FE68");
    assert_eq!(label(0x1F600).to_string(), "U+1F600");
    assert_eq!(label(0x10FFFF).to_string(), "U+10FFFF");
}

#[test]
fn hex_dump() {
    assert_eq!(HexDump(&[]).to_string(), "");
    assert_eq!(HexDump(&[0x0A]).to_string(), "0A");
    assert_eq!(HexDump(&[0xEF, 0xBF, 0xBD]).to_string(), "EF BF BD");
}

#[test]
fn error_display() {
    assert_eq!(
        Utf8Error::new(ErrorCode::InvalidLeadByte, 3).to_string(),
        "utf-8 decode failed at 3: invalid lead byte"
    );
    assert_eq!(
        Utf8Error::encode(ErrorCode::InvalidCodepoint).to_string(),
        "utf-8 encode failed: codepoint outside [0, 0x10FFFF]"
    );
    assert_eq!(
        Utf8Error::new(ErrorCode::InvalidChunkSize, 0).to_string(),
        "invalid argument: chunk size must be at least 1"
    );
}

#[cfg(feature = "std")]
#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Utf8Error::new(ErrorCode::TrailingBytes, 1));
}
