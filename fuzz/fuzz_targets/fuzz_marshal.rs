#![no_main]
//! Drives arbitrary payloads through every marshalling direction and checks
//! the boundary laws: valid UTF-8 round-trips byte-for-byte, invalid input
//! is rejected with no output, and the encoders are exact inverses of the
//! decoders over whatever they accept.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wirestr::{
    decode_utf16, decode_utf32, encode_utf16, encode_utf32, validate, BoundaryAdapter, StrView,
    Wide16, Wide32,
};

#[derive(Arbitrary, Debug)]
enum MarshalInput {
    /// Raw bytes: may or may not be UTF-8.
    Bytes(Vec<u8>),
    /// Raw 16-bit units: may contain unpaired surrogates.
    Units16(Vec<u16>),
    /// Raw 32-bit units: may contain non-scalar values.
    Units32(Vec<u32>),
    /// Known-valid text: every operation must succeed.
    Text(String),
}

fn check_bytes(data: &[u8]) {
    let valid = validate(data).is_ok();
    assert_eq!(
        valid,
        std::str::from_utf8(data).is_ok(),
        "validator disagrees with str::from_utf8"
    );

    let mut w16 = Vec::new();
    let mut w32 = Vec::new();
    if valid {
        decode_utf16(data, &mut w16).unwrap();
        decode_utf32(data, &mut w32).unwrap();

        // decode then re-encode is the identity on bytes
        let mut back = Vec::new();
        encode_utf16(&w16, &mut back).unwrap();
        assert_eq!(back, data);
        back.clear();
        encode_utf32(&w32, &mut back).unwrap();
        assert_eq!(back, data);
    } else {
        assert!(decode_utf16(data, &mut w16).is_err());
        assert!(decode_utf32(data, &mut w32).is_err());
        assert!(w16.is_empty() && w32.is_empty(), "output on rejected input");
    }
}

fn check_units16(units: &[u16]) {
    let mut bytes = Vec::new();
    match encode_utf16(units, &mut bytes) {
        Ok(()) => {
            let mut back = Vec::new();
            decode_utf16(&bytes, &mut back).unwrap();
            assert_eq!(back, units, "utf16 encode/decode not inverse");
        }
        Err(_) => assert!(bytes.is_empty()),
    }
}

fn check_units32(units: &[u32]) {
    let mut bytes = Vec::new();
    match encode_utf32(units, &mut bytes) {
        Ok(()) => {
            let mut back = Vec::new();
            decode_utf32(&bytes, &mut back).unwrap();
            assert_eq!(back, units, "utf32 encode/decode not inverse");
        }
        Err(_) => assert!(bytes.is_empty()),
    }
}

fn check_text(text: &str) {
    let view = StrView::from_str(text);
    let out = BoundaryAdapter::<Wide16>::new().roundtrip(view).unwrap();
    assert_eq!(out.as_bytes(), text.as_bytes());
    let out = BoundaryAdapter::<Wide32>::new().roundtrip(view).unwrap();
    assert_eq!(out.as_bytes(), text.as_bytes());
}

fuzz_target!(|data: &[u8]| {
    let mut u = arbitrary::Unstructured::new(data);
    match MarshalInput::arbitrary_take_rest(&mut u) {
        Ok(MarshalInput::Bytes(data)) => check_bytes(&data),
        Ok(MarshalInput::Units16(units)) => check_units16(&units),
        Ok(MarshalInput::Units32(units)) => check_units32(&units),
        Ok(MarshalInput::Text(text)) => check_text(&text),
        Err(_) => {}
    }
});
