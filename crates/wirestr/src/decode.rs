//! Decoder: UTF-8 bytes in, host-native code units out.
//!
//! One strict scalar decoder drives everything here. It never substitutes
//! U+FFFD: every malformed shape (stray continuation, bad lead, truncation,
//! overlong form, encoded surrogate, out-of-range value) is classified and
//! reported with its byte offset, and the destination is rolled back so no
//! partially decoded output is exposed.

use alloc::vec::Vec;

use crate::{error::DecodeError, surrogate};

/// Decode one scalar starting at `offset`, returning the scalar value and
/// the byte width of its encoding.
///
/// Strict per Unicode: shortest-form only, surrogate code points and values
/// above U+10FFFF rejected.
pub(crate) fn next_scalar(bytes: &[u8], offset: usize) -> Result<(u32, usize), DecodeError> {
    let b0 = bytes[offset];
    let declared = match b0 {
        0x00..=0x7F => return Ok((u32::from(b0), 1)),
        0x80..=0xBF => return Err(DecodeError::StrayContinuation { byte: b0, offset }),
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        0xF8..=0xFF => return Err(DecodeError::InvalidLeadByte { byte: b0, offset }),
    };

    // Payload bits of the lead byte, then six per continuation byte.
    let mut scalar = u32::from(b0) & (0x7F >> declared);
    for k in 1..declared {
        match bytes.get(offset + k) {
            Some(&b) if (0x80..=0xBF).contains(&b) => {
                scalar = (scalar << 6) | u32::from(b & 0x3F);
            }
            _ => return Err(DecodeError::Truncated { offset, declared }),
        }
    }

    let shortest = match declared {
        2 => 0x80,
        3 => 0x800,
        _ => 0x1_0000,
    };
    if scalar < shortest {
        return Err(DecodeError::Overlong { scalar, offset });
    }
    if surrogate::is_surrogate_scalar(scalar) {
        return Err(DecodeError::SurrogateCodePoint { scalar, offset });
    }
    if scalar > 0x10_FFFF {
        return Err(DecodeError::OutOfRange { scalar, offset });
    }
    Ok((scalar, declared))
}

/// Check that `bytes` is well-formed UTF-8 without materializing code units.
///
/// # Errors
///
/// The [`DecodeError`] for the first malformed sequence encountered.
pub fn validate(bytes: &[u8]) -> Result<(), DecodeError> {
    let mut offset = 0;
    while offset < bytes.len() {
        let (_, width) = next_scalar(bytes, offset)?;
        offset += width;
    }
    Ok(())
}

/// Decode UTF-8 into UTF-16 code units, appending to `dst`.
///
/// Supplementary-plane scalars are emitted as a correctly ordered high/low
/// surrogate pair. A zero-length input appends nothing and succeeds.
///
/// # Errors
///
/// The [`DecodeError`] for the first malformed sequence; `dst` is left at
/// its original length.
pub fn decode_utf16(bytes: &[u8], dst: &mut Vec<u16>) -> Result<(), DecodeError> {
    let start = dst.len();
    dst.reserve(bytes.len());

    let mut offset = 0;
    while offset < bytes.len() {
        let (scalar, width) = match next_scalar(bytes, offset) {
            Ok(ok) => ok,
            Err(err) => {
                dst.truncate(start);
                return Err(err);
            }
        };
        match surrogate::split(scalar) {
            Some((high, low)) => {
                dst.push(high);
                dst.push(low);
            }
            None => dst.push(scalar as u16),
        }
        offset += width;
    }
    Ok(())
}

/// Decode UTF-8 into UTF-32 code units, appending to `dst`.
///
/// A zero-length input appends nothing and succeeds.
///
/// # Errors
///
/// The [`DecodeError`] for the first malformed sequence; `dst` is left at
/// its original length.
pub fn decode_utf32(bytes: &[u8], dst: &mut Vec<u32>) -> Result<(), DecodeError> {
    let start = dst.len();
    dst.reserve(bytes.len());

    let mut offset = 0;
    while offset < bytes.len() {
        let (scalar, width) = match next_scalar(bytes, offset) {
            Ok(ok) => ok,
            Err(err) => {
                dst.truncate(start);
                return Err(err);
            }
        };
        dst.push(scalar);
        offset += width;
    }
    Ok(())
}
