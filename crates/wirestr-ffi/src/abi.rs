//! C-compatible descriptors and status codes.

use wirestr::{MarshalError, OwnedBytes, RawParts};

/// Non-owning `{ptr, len}` view of caller-owned UTF-8, valid only for the
/// duration of the call it is passed to. Never released by the callee.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WirestrView {
    /// Base address of the bytes. May be null only when `len` is zero.
    pub ptr: *const u8,
    /// Length in bytes.
    pub len: usize,
}

/// Owning `{ptr, len, cap}` descriptor for a buffer allocated by this
/// library. Must be passed to [`wirestr_buffer_release`] exactly once.
///
/// [`wirestr_buffer_release`]: crate::wirestr_buffer_release
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct WirestrBuffer {
    /// Base address. Non-null even for a zero-length buffer; null only
    /// after release.
    pub ptr: *mut u8,
    /// Initialized length in bytes.
    pub len: usize,
    /// Allocated capacity in bytes.
    pub cap: usize,
}

impl WirestrBuffer {
    /// The dead descriptor: what a release leaves behind, and the right
    /// initializer for an out-parameter. Owns nothing; releasing it is a
    /// reported usage violation, not undefined behavior.
    pub const RELEASED: Self = Self {
        ptr: core::ptr::null_mut(),
        len: 0,
        cap: 0,
    };

    pub(crate) fn from_owned(owned: OwnedBytes) -> Self {
        let RawParts { ptr, len, cap } = owned.into_raw();
        Self { ptr, len, cap }
    }
}

/// Result of every boundary entry point.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WirestrStatus {
    /// The operation completed.
    Ok = 0,
    /// Host-native code units did not decode to scalar values.
    MalformedUnits = 1,
    /// A byte payload was not well-formed UTF-8.
    InvalidUtf8 = 2,
    /// An allocation was refused.
    AllocFailed = 3,
    /// A caller-provided destination was too small; retry with the
    /// reported required length.
    TooSmall = 4,
    /// The ownership contract was broken in a detectable way: a null
    /// descriptor, or a buffer released twice.
    Usage = 5,
}

impl From<MarshalError> for WirestrStatus {
    fn from(err: MarshalError) -> Self {
        match err {
            MarshalError::MalformedCodeUnits(_) => Self::MalformedUnits,
            MarshalError::InvalidUtf8(_) => Self::InvalidUtf8,
            MarshalError::Alloc(_) => Self::AllocFailed,
        }
    }
}
