//! C ABI surface for the `wirestr` marshalling crate.
//!
//! Arguments cross as [`WirestrView`] (borrowed, call-scoped, never released
//! by the callee); results cross as [`WirestrBuffer`] (owned, released
//! exactly once through [`wirestr_buffer_release`]). Empty strings are real
//! zero-length descriptors, never null. Decoding into host memory uses the
//! two-call pattern: pass a null destination to learn the required unit
//! count, then call again with a buffer the host owns.

mod abi;

pub use abi::{WirestrBuffer, WirestrStatus, WirestrView};

use std::slice;

use wirestr::{
    decode_utf16, decode_utf32, encode_utf16, encode_utf32, BoundaryAdapter, OwnedBytes, StrView,
    Wide16,
};

/// Borrow the bytes a view points at, for the current call only.
///
/// A null pointer is accepted only for the empty view; anything else is a
/// detectable usage violation.
unsafe fn view_bytes<'a>(view: WirestrView) -> Result<&'a [u8], WirestrStatus> {
    if view.ptr.is_null() {
        return if view.len == 0 {
            Ok(&[])
        } else {
            Err(WirestrStatus::Usage)
        };
    }
    Ok(unsafe { slice::from_raw_parts(view.ptr, view.len) })
}

unsafe fn unit_slice<'a, T>(units: *const T, len: usize) -> Result<&'a [T], WirestrStatus> {
    if units.is_null() {
        return if len == 0 {
            Ok(&[])
        } else {
            Err(WirestrStatus::Usage)
        };
    }
    Ok(unsafe { slice::from_raw_parts(units, len) })
}

/// Transfer encoder output to the caller through `out`.
fn finish_encode(bytes: Vec<u8>, out: *mut WirestrBuffer) -> WirestrStatus {
    match OwnedBytes::acquire(bytes) {
        Ok(owned) => {
            unsafe { *out = WirestrBuffer::from_owned(owned) };
            WirestrStatus::Ok
        }
        Err(_) => WirestrStatus::InvalidUtf8,
    }
}

/// Read-only argument path: validate the view and observe it for the
/// duration of this call. Nothing is allocated and nothing is retained.
///
/// # Safety
///
/// `view` must describe readable memory that stays valid and unmodified
/// until this call returns.
#[no_mangle]
pub unsafe extern "C" fn wirestr_take(view: WirestrView) -> WirestrStatus {
    let bytes = match unsafe { view_bytes(view) } {
        Ok(bytes) => bytes,
        Err(status) => return status,
    };
    match StrView::new(bytes) {
        Ok(_) => WirestrStatus::Ok,
        Err(_) => WirestrStatus::InvalidUtf8,
    }
}

/// Encode UTF-16 host units into a freshly allocated owned buffer.
///
/// On `Ok`, `*out` owns the allocation and the caller must pass it to
/// [`wirestr_buffer_release`] exactly once. On any other status `*out` is
/// the dead descriptor and owns nothing.
///
/// # Safety
///
/// `units` must point at `len` readable `u16`s (or be null with `len == 0`)
/// and `out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn wirestr_encode_utf16(
    units: *const u16,
    len: usize,
    out: *mut WirestrBuffer,
) -> WirestrStatus {
    if out.is_null() {
        return WirestrStatus::Usage;
    }
    unsafe { *out = WirestrBuffer::RELEASED };
    let units = match unsafe { unit_slice(units, len) } {
        Ok(units) => units,
        Err(status) => return status,
    };

    let mut bytes = Vec::new();
    match encode_utf16(units, &mut bytes) {
        Ok(()) => finish_encode(bytes, out),
        Err(_) => WirestrStatus::MalformedUnits,
    }
}

/// Encode UTF-32 host units into a freshly allocated owned buffer.
///
/// Same ownership contract as [`wirestr_encode_utf16`].
///
/// # Safety
///
/// `units` must point at `len` readable `u32`s (or be null with `len == 0`)
/// and `out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn wirestr_encode_utf32(
    units: *const u32,
    len: usize,
    out: *mut WirestrBuffer,
) -> WirestrStatus {
    if out.is_null() {
        return WirestrStatus::Usage;
    }
    unsafe { *out = WirestrBuffer::RELEASED };
    let units = match unsafe { unit_slice(units, len) } {
        Ok(units) => units,
        Err(status) => return status,
    };

    let mut bytes = Vec::new();
    match encode_utf32(units, &mut bytes) {
        Ok(()) => finish_encode(bytes, out),
        Err(_) => WirestrStatus::MalformedUnits,
    }
}

/// Decode a UTF-8 view into UTF-16 units in memory the host owns.
///
/// `*written` always receives the required unit count on success paths.
/// With a null `dst` this is a pure length query; otherwise `cap` units are
/// available at `dst` and `TooSmall` is returned when that is not enough,
/// with nothing written.
///
/// # Safety
///
/// `view` must be readable for the call, `written` must be writable, and a
/// non-null `dst` must have room for `cap` units.
#[no_mangle]
pub unsafe extern "C" fn wirestr_decode_utf16(
    view: WirestrView,
    dst: *mut u16,
    cap: usize,
    written: *mut usize,
) -> WirestrStatus {
    if written.is_null() {
        return WirestrStatus::Usage;
    }
    let bytes = match unsafe { view_bytes(view) } {
        Ok(bytes) => bytes,
        Err(status) => return status,
    };

    let mut units = Vec::new();
    if decode_utf16(bytes, &mut units).is_err() {
        return WirestrStatus::InvalidUtf8;
    }
    unsafe { *written = units.len() };

    if dst.is_null() {
        return WirestrStatus::Ok;
    }
    if cap < units.len() {
        return WirestrStatus::TooSmall;
    }
    unsafe { std::ptr::copy_nonoverlapping(units.as_ptr(), dst, units.len()) };
    WirestrStatus::Ok
}

/// Decode a UTF-8 view into UTF-32 units in memory the host owns.
///
/// Same contract as [`wirestr_decode_utf16`].
///
/// # Safety
///
/// `view` must be readable for the call, `written` must be writable, and a
/// non-null `dst` must have room for `cap` units.
#[no_mangle]
pub unsafe extern "C" fn wirestr_decode_utf32(
    view: WirestrView,
    dst: *mut u32,
    cap: usize,
    written: *mut usize,
) -> WirestrStatus {
    if written.is_null() {
        return WirestrStatus::Usage;
    }
    let bytes = match unsafe { view_bytes(view) } {
        Ok(bytes) => bytes,
        Err(status) => return status,
    };

    let mut units = Vec::new();
    if decode_utf32(bytes, &mut units).is_err() {
        return WirestrStatus::InvalidUtf8;
    }
    unsafe { *written = units.len() };

    if dst.is_null() {
        return WirestrStatus::Ok;
    }
    if cap < units.len() {
        return WirestrStatus::TooSmall;
    }
    unsafe { std::ptr::copy_nonoverlapping(units.as_ptr(), dst, units.len()) };
    WirestrStatus::Ok
}

/// Decode the view, re-encode it, and return a fresh owned buffer with
/// byte-identical content. The caller releases the buffer exactly once.
///
/// # Safety
///
/// `view` must be readable for the call and `out` must be writable.
#[no_mangle]
pub unsafe extern "C" fn wirestr_roundtrip(
    view: WirestrView,
    out: *mut WirestrBuffer,
) -> WirestrStatus {
    if out.is_null() {
        return WirestrStatus::Usage;
    }
    unsafe { *out = WirestrBuffer::RELEASED };
    let bytes = match unsafe { view_bytes(view) } {
        Ok(bytes) => bytes,
        Err(status) => return status,
    };
    let view = match StrView::new(bytes) {
        Ok(view) => view,
        Err(_) => return WirestrStatus::InvalidUtf8,
    };

    match BoundaryAdapter::<Wide16>::new().roundtrip(view) {
        Ok(owned) => {
            unsafe { *out = WirestrBuffer::from_owned(owned) };
            WirestrStatus::Ok
        }
        Err(err) => err.into(),
    }
}

/// The single deallocation entry point. Frees a buffer previously returned
/// by this library and nulls the descriptor, so releasing it a second time
/// is reported as `Usage` instead of corrupting the heap. Accepts only
/// buffer descriptors, never views.
///
/// # Safety
///
/// `buffer` must be null, point at a descriptor this library returned, or
/// point at an already-released descriptor. The bytes must no longer be in
/// use by anyone.
#[no_mangle]
pub unsafe extern "C" fn wirestr_buffer_release(buffer: *mut WirestrBuffer) -> WirestrStatus {
    if buffer.is_null() {
        return WirestrStatus::Usage;
    }
    let descriptor = unsafe { *buffer };
    if descriptor.ptr.is_null() {
        // already released, or never a live buffer
        return WirestrStatus::Usage;
    }
    drop(unsafe { Vec::from_raw_parts(descriptor.ptr, descriptor.len, descriptor.cap) });
    unsafe { *buffer = WirestrBuffer::RELEASED };
    WirestrStatus::Ok
}
