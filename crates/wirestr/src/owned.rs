//! Move-only owned buffers and the injectable heap seam.

use alloc::vec::Vec;
use core::mem::ManuallyDrop;

use crate::{
    decode,
    error::{AllocError, DecodeError},
    view::StrView,
};

/// Where boundary allocations come from.
///
/// The heap is an explicit parameter rather than ambient state so tests can
/// inject counting or failing implementations. Allocation failure is an
/// `Err`, never an abort.
pub trait HeapSource {
    /// Allocate an empty `Vec<T>` with at least `capacity` elements reserved.
    ///
    /// # Errors
    ///
    /// [`AllocError`] when the reservation cannot be satisfied.
    fn reserve<T>(&self, capacity: usize) -> Result<Vec<T>, AllocError>;
}

/// The process heap, via fallible reservation.
#[derive(Debug, Default, Clone, Copy)]
pub struct GlobalHeap;

impl HeapSource for GlobalHeap {
    fn reserve<T>(&self, capacity: usize) -> Result<Vec<T>, AllocError> {
        let mut v = Vec::new();
        v.try_reserve_exact(capacity).map_err(|_| AllocError {
            requested: capacity * core::mem::size_of::<T>(),
        })?;
        Ok(v)
    }
}

/// Raw `{ptr, len, cap}` descriptor for handing a buffer across a C
/// boundary. Produced by [`OwnedBytes::into_raw`], consumed by
/// [`OwnedBytes::from_raw`]; between the two, exactly one side owns the
/// allocation.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawParts {
    /// Base address. Non-null even for a zero-length buffer.
    pub ptr: *mut u8,
    /// Initialized length in bytes.
    pub len: usize,
    /// Allocated capacity in bytes.
    pub cap: usize,
}

/// A heap buffer of validated UTF-8 with exactly one owner.
///
/// `OwnedBytes` is deliberately neither `Clone` nor `Copy`: handing one off
/// is a move that leaves no usable handle behind, so double release and
/// use-after-release cannot be written in safe code. Release is `Drop`, or
/// [`release`](Self::release) when the drop point should be explicit.
#[derive(Debug, PartialEq, Eq)]
pub struct OwnedBytes {
    bytes: Vec<u8>,
}

impl OwnedBytes {
    /// Take ownership of `bytes`, validating them as UTF-8 first.
    ///
    /// # Errors
    ///
    /// The [`DecodeError`] for the first malformed sequence; the vector is
    /// returned to the caller untouched inside the error path's drop.
    pub fn acquire(bytes: Vec<u8>) -> Result<Self, DecodeError> {
        decode::validate(&bytes)?;
        Ok(Self { bytes })
    }

    /// Take ownership of encoder output, which is valid by construction.
    pub(crate) fn from_encoded(bytes: Vec<u8>) -> Self {
        debug_assert!(decode::validate(&bytes).is_ok());
        Self { bytes }
    }

    /// The zero-length buffer. Allocates nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self { bytes: Vec::new() }
    }

    /// The owned bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The owned text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Invariant: validated at acquisition.
        unsafe { core::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Re-borrow as a call-scoped view without copying.
    #[must_use]
    pub fn as_view(&self) -> StrView<'_> {
        StrView::from_str(self.as_str())
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Is this the zero-length buffer?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Give the allocation back as a plain vector.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.bytes
    }

    /// Release the buffer now. Consumes the handle; equivalent to dropping.
    pub fn release(self) {}

    /// Transfer ownership out as a raw descriptor, e.g. to return the buffer
    /// to a foreign caller. The callee-side handle is gone after this; the
    /// descriptor must eventually come back through [`from_raw`](Self::from_raw)
    /// to be freed.
    #[must_use]
    pub fn into_raw(self) -> RawParts {
        let mut bytes = ManuallyDrop::new(self.bytes);
        RawParts {
            ptr: bytes.as_mut_ptr(),
            len: bytes.len(),
            cap: bytes.capacity(),
        }
    }

    /// Resume ownership of a descriptor produced by [`into_raw`](Self::into_raw).
    ///
    /// # Safety
    ///
    /// `raw` must have come from `into_raw` (same allocator, same layout),
    /// must not have been resumed before, and the bytes must not have been
    /// modified into invalid UTF-8 while out of Rust's hands.
    #[must_use]
    pub unsafe fn from_raw(raw: RawParts) -> Self {
        Self {
            bytes: unsafe { Vec::from_raw_parts(raw.ptr, raw.len, raw.cap) },
        }
    }
}
