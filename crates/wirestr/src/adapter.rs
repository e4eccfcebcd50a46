//! Per-call orchestration of passing modes at the boundary.
//!
//! Each string value crossing the boundary moves through
//! `unmarshalled -> validated -> borrowed or owned -> released`, and the
//! types carry the machine: raw bytes become a [`StrView`] only by passing
//! validation, a view is lifetime-bound to its call, an [`OwnedBytes`] is
//! move-only, and a validation failure is a `Result::Err` before any buffer
//! exists. There is no state to corrupt at runtime.

use alloc::vec::Vec;
use core::marker::PhantomData;

use crate::{
    error::MarshalError,
    host::HostEncoding,
    owned::{GlobalHeap, HeapSource, OwnedBytes},
    view::StrView,
};

/// Decides and enforces the passing mode for each boundary operation:
/// read-only call-scoped arguments cross as borrow views with no allocation,
/// newly produced return values cross as owned buffers whose ownership
/// transfers to the caller by move.
///
/// Generic over the host's code-unit width and over the heap that backs
/// owned allocations, so tests can inject counting or failing heaps.
#[derive(Debug, Default)]
pub struct BoundaryAdapter<H: HostEncoding, A: HeapSource = GlobalHeap> {
    heap: A,
    _host: PhantomData<H>,
}

impl<H: HostEncoding> BoundaryAdapter<H> {
    /// An adapter backed by the process heap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_heap(GlobalHeap)
    }
}

impl<H: HostEncoding, A: HeapSource> BoundaryAdapter<H, A> {
    /// An adapter backed by an explicit heap.
    pub fn with_heap(heap: A) -> Self {
        Self {
            heap,
            _host: PhantomData,
        }
    }

    /// Argument path, read-only: hand the callee a borrow scoped to this
    /// call. No allocation, no copy, and the borrow cannot be retained past
    /// `read` returning.
    pub fn take<R>(&self, view: StrView<'_>, read: impl FnOnce(&str) -> R) -> R {
        read(view.as_str())
    }

    /// Argument path, retained: decode the view into freshly allocated
    /// host-native units the caller may keep beyond the call.
    ///
    /// # Errors
    ///
    /// [`MarshalError::Alloc`] if the heap refuses the reservation. The view
    /// was validated at construction, so decoding itself cannot fail.
    pub fn lift(&self, view: StrView<'_>) -> Result<Vec<H::Unit>, MarshalError> {
        let mut units = self.heap.reserve::<H::Unit>(view.len())?;
        H::decode(view.as_bytes(), &mut units)?;
        Ok(units)
    }

    /// Return path: encode host-native units into a fresh owned buffer.
    /// Ownership transfers to the caller with the returned value; this
    /// adapter retains nothing.
    ///
    /// # Errors
    ///
    /// [`MarshalError::MalformedCodeUnits`] for unpaired surrogates or
    /// non-scalar units, [`MarshalError::Alloc`] if the heap refuses the
    /// reservation. No buffer survives the failure path.
    pub fn produce(&self, units: &[H::Unit]) -> Result<OwnedBytes, MarshalError> {
        let mut dst = self
            .heap
            .reserve::<u8>(units.len() * H::MAX_UTF8_PER_UNIT)?;
        H::encode(units, &mut dst)?;
        Ok(OwnedBytes::from_encoded(dst))
    }

    /// Decode the view to host units and re-encode them into a fresh owned
    /// buffer. The result is byte-for-byte identical to the input view; the
    /// round-trip property tests pin this law for arbitrary content.
    ///
    /// # Errors
    ///
    /// [`MarshalError::Alloc`] if either allocation is refused.
    pub fn roundtrip(&self, view: StrView<'_>) -> Result<OwnedBytes, MarshalError> {
        let units = self.lift(view)?;
        self.produce(&units)
    }
}
