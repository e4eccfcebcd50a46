//! Encoder: host-native code units in, UTF-8 bytes out.
//!
//! Both entry points are single-pass: the destination is reserved from a
//! worst-case factor of the input length, then filled while validating, so no
//! sizing pre-scan is needed. On error the destination is rolled back to its
//! starting length; partial output is never exposed.

use alloc::vec::Vec;

use crate::{error::EncodeError, surrogate};

/// Worst-case UTF-8 bytes per 16-bit unit (a lone BMP unit can need three;
/// a surrogate pair spends two units on four bytes).
pub(crate) const MAX_UTF8_PER_U16: usize = 3;
/// Worst-case UTF-8 bytes per 32-bit unit.
pub(crate) const MAX_UTF8_PER_U32: usize = 4;

/// Append the UTF-8 encoding of a valid scalar value.
///
/// Callers guarantee `scalar` is a Unicode scalar value; this is the only
/// byte-emission path, shared by both unit widths.
#[inline]
fn push_scalar(dst: &mut Vec<u8>, scalar: u32) {
    debug_assert!(scalar <= 0x10_FFFF && !surrogate::is_surrogate_scalar(scalar));
    if scalar < 0x80 {
        dst.push(scalar as u8);
    } else if scalar < 0x800 {
        dst.push(0xC0 | (scalar >> 6) as u8);
        dst.push(0x80 | (scalar & 0x3F) as u8);
    } else if scalar < 0x1_0000 {
        dst.push(0xE0 | (scalar >> 12) as u8);
        dst.push(0x80 | ((scalar >> 6) & 0x3F) as u8);
        dst.push(0x80 | (scalar & 0x3F) as u8);
    } else {
        dst.push(0xF0 | (scalar >> 18) as u8);
        dst.push(0x80 | ((scalar >> 12) & 0x3F) as u8);
        dst.push(0x80 | ((scalar >> 6) & 0x3F) as u8);
        dst.push(0x80 | (scalar & 0x3F) as u8);
    }
}

/// Encode a UTF-16 code-unit sequence into UTF-8, appending to `dst`.
///
/// Supplementary-plane scalars arrive as high/low surrogate pairs and are
/// reassembled; an unpaired half of either kind fails with the unit index.
/// A zero-length input appends nothing and succeeds.
///
/// # Errors
///
/// [`EncodeError::UnpairedHighSurrogate`] or
/// [`EncodeError::UnpairedLowSurrogate`] when the sequence does not decode
/// to well-formed scalar values. `dst` is left at its original length.
pub fn encode_utf16(units: &[u16], dst: &mut Vec<u8>) -> Result<(), EncodeError> {
    let start = dst.len();
    dst.reserve(units.len() * MAX_UTF8_PER_U16);

    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        if surrogate::is_low(unit) {
            dst.truncate(start);
            return Err(EncodeError::UnpairedLowSurrogate { unit, index: i });
        }
        if surrogate::is_high(unit) {
            let Some(scalar) = units
                .get(i + 1)
                .and_then(|&low| surrogate::combine(unit, low))
            else {
                dst.truncate(start);
                return Err(EncodeError::UnpairedHighSurrogate { unit, index: i });
            };
            push_scalar(dst, scalar);
            i += 2;
        } else {
            push_scalar(dst, u32::from(unit));
            i += 1;
        }
    }
    Ok(())
}

/// Encode a UTF-32 code-unit sequence into UTF-8, appending to `dst`.
///
/// A zero-length input appends nothing and succeeds.
///
/// # Errors
///
/// [`EncodeError::InvalidScalar`] when a unit falls in the surrogate range
/// or exceeds U+10FFFF. `dst` is left at its original length.
pub fn encode_utf32(units: &[u32], dst: &mut Vec<u8>) -> Result<(), EncodeError> {
    let start = dst.len();
    dst.reserve(units.len() * MAX_UTF8_PER_U32);

    for (index, &value) in units.iter().enumerate() {
        if value > 0x10_FFFF || surrogate::is_surrogate_scalar(value) {
            dst.truncate(start);
            return Err(EncodeError::InvalidScalar { value, index });
        }
        push_scalar(dst, value);
    }
    Ok(())
}
