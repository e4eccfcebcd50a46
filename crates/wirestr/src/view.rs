//! Borrowed, call-scoped view of validated UTF-8.

use core::fmt;

use crate::{decode, error::DecodeError};

/// A non-owning `{base, length}` descriptor over caller-owned UTF-8.
///
/// A `StrView` in hand is proof the bytes were validated: construction from
/// raw bytes runs the strict decoder once, and every later read skips
/// re-validation. The lifetime parameter is the ownership contract — a view
/// cannot outlive the memory it refers to, so storing one past its call is
/// a compile error, not a runtime check.
///
/// Views are `Copy`: they carry no ownership and must never be released.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct StrView<'a> {
    bytes: &'a [u8],
}

impl<'a> StrView<'a> {
    /// Validate `bytes` as UTF-8 and wrap them, without copying.
    ///
    /// # Errors
    ///
    /// The [`DecodeError`] for the first malformed sequence; nothing is
    /// allocated either way.
    pub fn new(bytes: &'a [u8]) -> Result<Self, DecodeError> {
        decode::validate(bytes)?;
        Ok(Self { bytes })
    }

    /// Wrap an existing `&str`. Infallible: `str` is already valid UTF-8.
    #[must_use]
    pub fn from_str(s: &'a str) -> Self {
        Self { bytes: s.as_bytes() }
    }

    /// The zero-length view. A real descriptor, not a null sentinel.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bytes: &[] }
    }

    /// The viewed bytes, borrowed for the original lifetime.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// The viewed text.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        // Invariant: validated at construction.
        unsafe { core::str::from_utf8_unchecked(self.bytes) }
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Is this the zero-length view?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for StrView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StrView").field(&self.as_str()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodeError;

    #[test]
    fn wraps_without_copying() {
        let owned = alloc::string::String::from("latin utf16");
        let view = StrView::new(owned.as_bytes()).unwrap();
        assert_eq!(view.as_str(), "latin utf16");
        assert_eq!(view.len(), 11);
        assert!(core::ptr::eq(view.as_bytes().as_ptr(), owned.as_ptr()));
    }

    #[test]
    fn rejects_invalid_bytes() {
        assert_eq!(
            StrView::new(&[0x66, 0x80]),
            Err(DecodeError::StrayContinuation {
                byte: 0x80,
                offset: 1
            })
        );
    }

    #[test]
    fn empty_view_is_zero_length_not_null() {
        let view = StrView::empty();
        assert!(view.is_empty());
        assert_eq!(view.len(), 0);
        assert_eq!(view.as_str(), "");
        assert!(!view.as_bytes().as_ptr().is_null());
    }

    #[test]
    fn copies_are_the_same_descriptor() {
        let view = StrView::from_str("🚀");
        let copy = view;
        assert_eq!(copy, view);
        assert!(core::ptr::eq(
            copy.as_bytes().as_ptr(),
            view.as_bytes().as_ptr()
        ));
    }
}
