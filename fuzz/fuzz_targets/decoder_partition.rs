#![no_main]

use libfuzzer_sys::fuzz_target;

use utf8_sanitize::Decoder;

fuzz_target!(|data: &[u8]| {
    // Events must cover the input exactly once, in order.
    let mut next = 0;
    for ev in Decoder::new(data) {
        assert_eq!(ev.offset(), next);
        assert!(!ev.bytes().is_empty());
        next += ev.bytes().len();
    }
    assert_eq!(next, data.len());
});
