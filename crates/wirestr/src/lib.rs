//! String marshalling primitives for foreign-function boundaries.
//!
//! A host runtime whose native strings are UTF-16 or UTF-32 code units calls
//! into a callee that consumes and produces UTF-8. This crate is the contract
//! at that seam: validated borrow views for call-scoped arguments, move-only
//! owned buffers for return values, and encoders/decoders that classify every
//! malformed input instead of silently replacing it.
//!
//! The round-trip law is the core guarantee: any valid UTF-8 payload that
//! crosses the boundary and comes back is byte-for-byte identical, including
//! the empty string and astral-plane scalars.
//!
//! ```rust
//! use wirestr::{BoundaryAdapter, StrView, Wide16};
//!
//! let adapter = BoundaryAdapter::<Wide16>::new();
//! let view = StrView::from_str("🚀🚀🚀 𠈄𓀀");
//! let out = adapter.roundtrip(view).unwrap();
//! assert_eq!(out.as_bytes(), view.as_bytes());
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod adapter;
mod decode;
mod encode;
mod error;
mod host;
mod owned;
mod surrogate;
mod view;

pub use adapter::BoundaryAdapter;
pub use decode::{decode_utf16, decode_utf32, validate};
pub use encode::{encode_utf16, encode_utf32};
pub use error::{AllocError, DecodeError, EncodeError, MarshalError};
pub use host::{HostEncoding, Wide16, Wide32};
pub use owned::{GlobalHeap, HeapSource, OwnedBytes, RawParts};
pub use view::StrView;
