//! Host-side text representations the boundary can marshal for.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::{
    decode, encode,
    error::{DecodeError, EncodeError},
};

/// A host runtime's native code-unit width and its conversions to and from
/// UTF-8. Generic boundary code (the adapter, property tests) is written
/// once against this trait.
pub trait HostEncoding {
    /// The native code unit: `u16` for UTF-16 hosts, `u32` for UTF-32 hosts.
    type Unit: Copy + Eq + Debug;

    /// Worst-case UTF-8 bytes one unit can expand to, used to size encode
    /// destinations in a single pass.
    const MAX_UTF8_PER_UNIT: usize;

    /// Encode native units into UTF-8, appending to `dst`.
    ///
    /// # Errors
    ///
    /// [`EncodeError`] when the units are not a well-formed sequence of
    /// scalar values; `dst` is left at its original length.
    fn encode(units: &[Self::Unit], dst: &mut Vec<u8>) -> Result<(), EncodeError>;

    /// Decode UTF-8 into native units, appending to `dst`.
    ///
    /// # Errors
    ///
    /// [`DecodeError`] when the bytes are not well-formed UTF-8; `dst` is
    /// left at its original length.
    fn decode(bytes: &[u8], dst: &mut Vec<Self::Unit>) -> Result<(), DecodeError>;
}

/// A host with 16-bit code units (UTF-16 with surrogate pairs).
#[derive(Debug, Clone, Copy, Default)]
pub struct Wide16;

impl HostEncoding for Wide16 {
    type Unit = u16;

    const MAX_UTF8_PER_UNIT: usize = encode::MAX_UTF8_PER_U16;

    fn encode(units: &[u16], dst: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode::encode_utf16(units, dst)
    }

    fn decode(bytes: &[u8], dst: &mut Vec<u16>) -> Result<(), DecodeError> {
        decode::decode_utf16(bytes, dst)
    }
}

/// A host with 32-bit code units (UTF-32, one unit per scalar).
#[derive(Debug, Clone, Copy, Default)]
pub struct Wide32;

impl HostEncoding for Wide32 {
    type Unit = u32;

    const MAX_UTF8_PER_UNIT: usize = encode::MAX_UTF8_PER_U32;

    fn encode(units: &[u32], dst: &mut Vec<u8>) -> Result<(), EncodeError> {
        encode::encode_utf32(units, dst)
    }

    fn decode(bytes: &[u8], dst: &mut Vec<u32>) -> Result<(), DecodeError> {
        decode::decode_utf32(bytes, dst)
    }
}
