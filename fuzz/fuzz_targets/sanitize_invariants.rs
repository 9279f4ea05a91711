#![no_main]

use libfuzzer_sys::fuzz_target;

use utf8_sanitize::{
    is_valid_utf8, sanitize, sanitize_with, split_into_chunks, to_codepoints, validate,
    SanitizeOptions,
};

fuzz_target!(|data: &[u8]| {
    let text = sanitize(data);
    assert!(is_valid_utf8(text.as_bytes()));
    assert_eq!(sanitize(text.as_bytes()), text);

    // The fast validator and the decoder must agree.
    let report = sanitize_with(data, SanitizeOptions::new().with_error_report(true));
    assert_eq!(report.errors.is_empty(), validate(data).is_ok());
    assert_eq!(report.errors.is_empty(), core::str::from_utf8(data).is_ok());

    assert_eq!(to_codepoints(data).len(), text.chars().count());
    assert_eq!(split_into_chunks(data, 3).expect("chunk size").concat(), text);
});
