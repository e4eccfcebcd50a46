//! Property tests for the round-trip law and validation completeness.

use quickcheck_macros::quickcheck;
use wirestr::{
    BoundaryAdapter, StrView, Wide16, Wide32, decode_utf16, decode_utf32, encode_utf16,
    encode_utf32, validate,
};

#[quickcheck]
fn roundtrip_law_wide16(s: String) -> bool {
    let adapter = BoundaryAdapter::<Wide16>::new();
    let out = adapter.roundtrip(StrView::from_str(&s)).unwrap();
    out.as_bytes() == s.as_bytes()
}

#[quickcheck]
fn roundtrip_law_wide32(s: String) -> bool {
    let adapter = BoundaryAdapter::<Wide32>::new();
    let out = adapter.roundtrip(StrView::from_str(&s)).unwrap();
    out.as_bytes() == s.as_bytes()
}

#[quickcheck]
fn encode_agrees_with_std_utf16(s: String) -> bool {
    let units: Vec<u16> = s.encode_utf16().collect();
    let mut bytes = Vec::new();
    encode_utf16(&units, &mut bytes).unwrap();
    bytes == s.as_bytes()
}

#[quickcheck]
fn decode_agrees_with_std_utf16(s: String) -> bool {
    let mut units = Vec::new();
    decode_utf16(s.as_bytes(), &mut units).unwrap();
    units == s.encode_utf16().collect::<Vec<u16>>()
}

#[quickcheck]
fn utf32_codec_agrees_with_chars(s: String) -> bool {
    let scalars: Vec<u32> = s.chars().map(u32::from).collect();

    let mut bytes = Vec::new();
    encode_utf32(&scalars, &mut bytes).unwrap();
    if bytes != s.as_bytes() {
        return false;
    }

    let mut decoded = Vec::new();
    decode_utf32(s.as_bytes(), &mut decoded).unwrap();
    decoded == scalars
}

#[quickcheck]
fn validate_accepts_exactly_what_str_accepts(bytes: Vec<u8>) -> bool {
    validate(&bytes).is_ok() == std::str::from_utf8(&bytes).is_ok()
}

#[quickcheck]
fn invalid_bytes_leave_destinations_untouched(bytes: Vec<u8>) -> bool {
    if validate(&bytes).is_ok() {
        return true; // covered by the roundtrip laws
    }
    let mut w16 = vec![0xBEEFu16];
    let mut w32 = vec![0xBEEFu32];
    decode_utf16(&bytes, &mut w16).is_err()
        && decode_utf32(&bytes, &mut w32).is_err()
        && w16 == [0xBEEF]
        && w32 == [0xBEEF]
}

#[quickcheck]
fn arbitrary_u16_units_never_panic(units: Vec<u16>) -> bool {
    let mut bytes = Vec::new();
    match encode_utf16(&units, &mut bytes) {
        Ok(()) => {
            // whatever encodes must decode back to the same units
            let mut back = Vec::new();
            decode_utf16(&bytes, &mut back).unwrap();
            back == units
        }
        Err(_) => bytes.is_empty(),
    }
}

#[quickcheck]
fn arbitrary_u32_units_never_panic(units: Vec<u32>) -> bool {
    let mut bytes = Vec::new();
    match encode_utf32(&units, &mut bytes) {
        Ok(()) => {
            let mut back = Vec::new();
            decode_utf32(&bytes, &mut back).unwrap();
            back == units
        }
        Err(_) => bytes.is_empty(),
    }
}
