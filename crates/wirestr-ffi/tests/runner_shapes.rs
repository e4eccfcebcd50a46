//! Replays the runtime string contract over the C surface: borrow-in,
//! unicode return, empty return, round-trip, and the release discipline.

use wirestr_ffi::{
    wirestr_buffer_release, wirestr_decode_utf16, wirestr_decode_utf32, wirestr_encode_utf16,
    wirestr_encode_utf32, wirestr_roundtrip, wirestr_take, WirestrBuffer, WirestrStatus,
    WirestrView,
};

const UNICODE: &str = "🚀🚀🚀 𠈄𓀀";

fn view_of(s: &str) -> WirestrView {
    WirestrView {
        ptr: s.as_ptr(),
        len: s.len(),
    }
}

fn buffer_bytes(buffer: &WirestrBuffer) -> &[u8] {
    assert!(!buffer.ptr.is_null());
    unsafe { std::slice::from_raw_parts(buffer.ptr, buffer.len) }
}

#[test]
fn take_basic() {
    let status = unsafe { wirestr_take(view_of("latin utf16")) };
    assert_eq!(status, WirestrStatus::Ok);
}

#[test]
fn take_rejects_invalid_utf8() {
    let bad = [0x66u8, 0x6F, 0xC0, 0x80];
    let view = WirestrView {
        ptr: bad.as_ptr(),
        len: bad.len(),
    };
    assert_eq!(unsafe { wirestr_take(view) }, WirestrStatus::InvalidUtf8);
}

#[test]
fn return_unicode() {
    let units: Vec<u16> = UNICODE.encode_utf16().collect();
    let mut out = WirestrBuffer::RELEASED;
    let status = unsafe { wirestr_encode_utf16(units.as_ptr(), units.len(), &mut out) };
    assert_eq!(status, WirestrStatus::Ok);
    assert_eq!(buffer_bytes(&out), UNICODE.as_bytes());

    assert_eq!(
        unsafe { wirestr_buffer_release(&mut out) },
        WirestrStatus::Ok
    );
}

#[test]
fn return_empty() {
    let mut out = WirestrBuffer::RELEASED;
    let status = unsafe { wirestr_encode_utf16(std::ptr::null(), 0, &mut out) };
    assert_eq!(status, WirestrStatus::Ok);
    assert!(!out.ptr.is_null(), "empty crosses as non-null, zero length");
    assert_eq!(out.len, 0);

    assert_eq!(
        unsafe { wirestr_buffer_release(&mut out) },
        WirestrStatus::Ok
    );
}

#[test]
fn roundtrip() {
    let mut out = WirestrBuffer::RELEASED;
    let status = unsafe { wirestr_roundtrip(view_of(UNICODE), &mut out) };
    assert_eq!(status, WirestrStatus::Ok);
    assert_eq!(buffer_bytes(&out), UNICODE.as_bytes());
    assert_eq!(out.len, UNICODE.len(), "byte length unchanged");

    assert_eq!(
        unsafe { wirestr_buffer_release(&mut out) },
        WirestrStatus::Ok
    );
}

#[test]
fn roundtrip_empty() {
    let mut out = WirestrBuffer::RELEASED;
    let status = unsafe { wirestr_roundtrip(view_of(""), &mut out) };
    assert_eq!(status, WirestrStatus::Ok);
    assert_eq!(out.len, 0);
    assert!(!out.ptr.is_null());

    assert_eq!(
        unsafe { wirestr_buffer_release(&mut out) },
        WirestrStatus::Ok
    );
}

#[test]
fn double_release_is_reported_not_undefined() {
    let mut out = WirestrBuffer::RELEASED;
    unsafe { wirestr_roundtrip(view_of("once"), &mut out) };
    assert_eq!(
        unsafe { wirestr_buffer_release(&mut out) },
        WirestrStatus::Ok
    );
    assert!(out.ptr.is_null(), "release leaves a dead descriptor");
    assert_eq!(
        unsafe { wirestr_buffer_release(&mut out) },
        WirestrStatus::Usage
    );
    assert_eq!(
        unsafe { wirestr_buffer_release(std::ptr::null_mut()) },
        WirestrStatus::Usage
    );
}

#[test]
fn decode_two_call_pattern_utf16() {
    let view = view_of(UNICODE);
    let mut required = 0usize;

    // length query
    let status = unsafe { wirestr_decode_utf16(view, std::ptr::null_mut(), 0, &mut required) };
    assert_eq!(status, WirestrStatus::Ok);
    assert_eq!(required, UNICODE.encode_utf16().count());

    // undersized destination: nothing written
    let mut dst = vec![0u16; required - 1];
    let status =
        unsafe { wirestr_decode_utf16(view, dst.as_mut_ptr(), dst.len(), &mut required) };
    assert_eq!(status, WirestrStatus::TooSmall);

    // full decode
    let mut dst = vec![0u16; required];
    let status =
        unsafe { wirestr_decode_utf16(view, dst.as_mut_ptr(), dst.len(), &mut required) };
    assert_eq!(status, WirestrStatus::Ok);
    assert_eq!(dst, UNICODE.encode_utf16().collect::<Vec<u16>>());
}

#[test]
fn decode_two_call_pattern_utf32() {
    let view = view_of(UNICODE);
    let mut required = 0usize;

    let status = unsafe { wirestr_decode_utf32(view, std::ptr::null_mut(), 0, &mut required) };
    assert_eq!(status, WirestrStatus::Ok);
    assert_eq!(required, UNICODE.chars().count());

    let mut dst = vec![0u32; required];
    let status =
        unsafe { wirestr_decode_utf32(view, dst.as_mut_ptr(), dst.len(), &mut required) };
    assert_eq!(status, WirestrStatus::Ok);
    assert_eq!(dst, UNICODE.chars().map(u32::from).collect::<Vec<u32>>());
}

#[test]
fn encode_reports_unpaired_surrogates() {
    let units = [0x0041u16, 0xD800];
    let mut out = WirestrBuffer::RELEASED;
    let status = unsafe { wirestr_encode_utf16(units.as_ptr(), units.len(), &mut out) };
    assert_eq!(status, WirestrStatus::MalformedUnits);
    assert!(out.ptr.is_null(), "no buffer is transferred on failure");

    let scalars = [0x11_0000u32];
    let status = unsafe { wirestr_encode_utf32(scalars.as_ptr(), scalars.len(), &mut out) };
    assert_eq!(status, WirestrStatus::MalformedUnits);
    assert!(out.ptr.is_null());
}

#[test]
fn encode_utf32_matches_utf16_output() {
    let units16: Vec<u16> = UNICODE.encode_utf16().collect();
    let units32: Vec<u32> = UNICODE.chars().map(u32::from).collect();

    let mut a = WirestrBuffer::RELEASED;
    let mut b = WirestrBuffer::RELEASED;
    unsafe {
        assert_eq!(
            wirestr_encode_utf16(units16.as_ptr(), units16.len(), &mut a),
            WirestrStatus::Ok
        );
        assert_eq!(
            wirestr_encode_utf32(units32.as_ptr(), units32.len(), &mut b),
            WirestrStatus::Ok
        );
    }
    assert_eq!(buffer_bytes(&a), buffer_bytes(&b));
    unsafe {
        wirestr_buffer_release(&mut a);
        wirestr_buffer_release(&mut b);
    }
}

#[test]
fn null_view_with_length_is_usage() {
    let view = WirestrView {
        ptr: std::ptr::null(),
        len: 4,
    };
    assert_eq!(unsafe { wirestr_take(view) }, WirestrStatus::Usage);
}
