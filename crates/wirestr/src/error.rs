use thiserror::Error;

/// The byte payload presented to the decoder is not well-formed UTF-8.
///
/// Offsets are byte positions into the rejected input. Each malformed shape
/// gets its own variant so a boundary failure can be reported precisely
/// rather than as a bare "invalid string".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A continuation byte (`0x80..=0xBF`) appeared without a lead byte.
    #[error("continuation byte 0x{byte:02X} at offset {offset} without a lead byte")]
    StrayContinuation {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending byte.
        offset: usize,
    },
    /// A byte that can never start a UTF-8 sequence (`0xF8..=0xFF`).
    #[error("invalid lead byte 0x{byte:02X} at offset {offset}")]
    InvalidLeadByte {
        /// The offending byte.
        byte: u8,
        /// Byte offset of the offending byte.
        offset: usize,
    },
    /// A lead byte declared a sequence the following bytes do not satisfy,
    /// either because the input ended or because a follower is not a
    /// continuation byte.
    #[error("sequence at offset {offset} declares {declared} bytes but is not satisfied")]
    Truncated {
        /// Byte offset of the lead byte.
        offset: usize,
        /// Total sequence length the lead byte declared.
        declared: usize,
    },
    /// A scalar value encoded with more bytes than it requires.
    #[error("overlong encoding of U+{scalar:04X} at offset {offset}")]
    Overlong {
        /// The scalar value the overlong sequence decodes to.
        scalar: u32,
        /// Byte offset of the lead byte.
        offset: usize,
    },
    /// A surrogate code point (U+D800..=U+DFFF) encoded directly as UTF-8,
    /// which is never valid.
    #[error("surrogate code point U+{scalar:04X} encoded at offset {offset}")]
    SurrogateCodePoint {
        /// The surrogate code point.
        scalar: u32,
        /// Byte offset of the lead byte.
        offset: usize,
    },
    /// A four-byte sequence decoding above U+10FFFF.
    #[error("code point 0x{scalar:X} at offset {offset} exceeds U+10FFFF")]
    OutOfRange {
        /// The out-of-range value.
        scalar: u32,
        /// Byte offset of the lead byte.
        offset: usize,
    },
}

impl DecodeError {
    /// Byte offset into the rejected input, for any variant.
    #[must_use]
    pub fn offset(&self) -> usize {
        match self {
            Self::StrayContinuation { offset, .. }
            | Self::InvalidLeadByte { offset, .. }
            | Self::Truncated { offset, .. }
            | Self::Overlong { offset, .. }
            | Self::SurrogateCodePoint { offset, .. }
            | Self::OutOfRange { offset, .. } => *offset,
        }
    }
}

/// The host-native code-unit sequence presented to the encoder does not
/// decode to a well-formed sequence of Unicode scalar values.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// A high surrogate not followed by a low surrogate.
    #[error("unpaired high surrogate 0x{unit:04X} at unit {index}")]
    UnpairedHighSurrogate {
        /// The offending 16-bit unit.
        unit: u16,
        /// Index of the offending unit in the input sequence.
        index: usize,
    },
    /// A low surrogate with no preceding high surrogate.
    #[error("unpaired low surrogate 0x{unit:04X} at unit {index}")]
    UnpairedLowSurrogate {
        /// The offending 16-bit unit.
        unit: u16,
        /// Index of the offending unit in the input sequence.
        index: usize,
    },
    /// A 32-bit unit in the surrogate range or above U+10FFFF.
    #[error("unit 0x{value:08X} at index {index} is not a Unicode scalar value")]
    InvalidScalar {
        /// The offending 32-bit unit.
        value: u32,
        /// Index of the offending unit in the input sequence.
        index: usize,
    },
}

/// The injected heap refused an allocation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("allocation of {requested} bytes failed")]
pub struct AllocError {
    /// Capacity that was requested, in bytes.
    pub requested: usize,
}

/// Any failure a boundary-crossing operation can report.
///
/// Ownership and lifetime violations have no variant here: the owned buffer
/// is move-only and the borrow view is lifetime-bound, so double release,
/// use-after-release, and view escape are rejected at compile time instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarshalError {
    /// Invalid host-native code units presented to the encoder.
    #[error("malformed code units: {0}")]
    MalformedCodeUnits(#[from] EncodeError),
    /// Invalid UTF-8 presented to the decoder.
    #[error("invalid utf-8: {0}")]
    InvalidUtf8(#[from] DecodeError),
    /// The injected heap refused an allocation.
    #[error("allocation failure: {0}")]
    Alloc(#[from] AllocError),
}
