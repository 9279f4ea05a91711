use utf8_sanitize::{decode_char, encode, ErrorCode, ErrorKind, HexDump, MAX_CODEPOINT};

#[cfg(feature = "alloc")]
use utf8_sanitize::encode_into;

fn enc(cp: u32) -> Vec<u8> {
    encode(cp).unwrap().as_bytes().to_vec()
}

#[test]
fn encode_length_boundaries() {
    assert_eq!(enc(0x00), [0x00]);
    assert_eq!(enc(0x41), [0x41]);
    assert_eq!(enc(0x7F), [0x7F]);
    assert_eq!(enc(0x80), [0xC2, 0x80]);
    assert_eq!(enc(0x7FF), [0xDF, 0xBF]);
    assert_eq!(enc(0x800), [0xE0, 0xA0, 0x80]);
    assert_eq!(enc(0xFFFD), [0xEF, 0xBF, 0xBD]);
    assert_eq!(enc(0xFFFF), [0xEF, 0xBF, 0xBF]);
    assert_eq!(enc(0x10000), [0xF0, 0x90, 0x80, 0x80]);
    assert_eq!(enc(MAX_CODEPOINT), [0xF4, 0x8F, 0xBF, 0xBF]);
}

#[test]
fn encode_rejects_codepoint_above_max() {
    for cp in [MAX_CODEPOINT + 1, 0x20_0000, u32::MAX] {
        let err = encode(cp).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidCodepoint);
        assert_eq!(err.kind(), ErrorKind::Encode);
        assert_eq!(err.offset, 0);
    }
}

#[test]
fn encode_accepts_surrogates_but_decode_rejects_them() {
    assert_eq!(enc(0xD800), [0xED, 0xA0, 0x80]);
    assert_eq!(enc(0xDFFF), [0xED, 0xBF, 0xBF]);

    let err = decode_char(&enc(0xD800)).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidContinuation);
}

#[test]
fn encode_matches_core_for_every_scalar_value() {
    let mut buf = [0u8; 4];
    for ch in (0..=MAX_CODEPOINT).filter_map(char::from_u32) {
        let expected = ch.encode_utf8(&mut buf);
        let actual = encode(u32::from(ch)).unwrap();
        assert_eq!(
            actual.as_bytes(),
            expected.as_bytes(),
            "U+{:04X}",
            u32::from(ch)
        );
        assert_eq!(actual.len(), ch.len_utf8());
    }
}

#[test]
fn decode_is_the_complement_of_encode() {
    for cp in (0..=MAX_CODEPOINT).filter(|cp| !(0xD800..=0xDFFF).contains(cp)) {
        let c = encode(cp).unwrap();
        let back = decode_char(&c).unwrap_or_else(|e| {
            panic!("not complement: U+{cp:04X} {} ({e})", HexDump(&c));
        });
        assert_eq!(back, cp);
    }
}

#[test]
fn encoded_char_accessors() {
    let c = encode(0x10FFFF).unwrap();
    assert_eq!(c.len(), 4);
    assert!(!c.is_empty());
    assert_eq!(&*c, &[0xF4, 0x8F, 0xBF, 0xBF]);
    assert_eq!(AsRef::<[u8]>::as_ref(&c), [0xF4, 0x8F, 0xBF, 0xBF]);
    assert_eq!(format!("{c:?}"), "EncodedChar(F4 8F BF BF)");
}

#[cfg(feature = "alloc")]
#[test]
fn encode_into_appends() {
    let mut out = b"x".to_vec();
    encode_into(0xE9, &mut out).unwrap();
    encode_into(0x20AC, &mut out).unwrap();
    assert_eq!(out, "xé€".as_bytes());

    let err = encode_into(0x11_0000, &mut out).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidCodepoint);
    assert_eq!(out, "xé€".as_bytes());
}
