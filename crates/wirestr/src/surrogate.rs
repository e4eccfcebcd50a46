//! The one place surrogate-pair arithmetic is allowed to live.
//!
//! Pairing bugs (unpaired halves, swapped ordering, off-by-one range checks)
//! are the most error-prone part of UTF-16 handling, so splitting and
//! combining are isolated here and every other module goes through these
//! helpers.

/// First high (leading) surrogate.
pub(crate) const HIGH_START: u16 = 0xD800;
/// First low (trailing) surrogate.
pub(crate) const LOW_START: u16 = 0xDC00;
/// Last low (trailing) surrogate.
pub(crate) const LOW_END: u16 = 0xDFFF;

/// Scalar values at or above this require a surrogate pair in UTF-16.
pub(crate) const SUPPLEMENTARY_START: u32 = 0x1_0000;

/// Is `unit` a high (leading) surrogate?
#[inline]
pub(crate) fn is_high(unit: u16) -> bool {
    (HIGH_START..LOW_START).contains(&unit)
}

/// Is `unit` a low (trailing) surrogate?
#[inline]
pub(crate) fn is_low(unit: u16) -> bool {
    (LOW_START..=LOW_END).contains(&unit)
}

/// Does `value` fall in the surrogate code-point range U+D800..=U+DFFF?
#[inline]
pub(crate) fn is_surrogate_scalar(value: u32) -> bool {
    (u32::from(HIGH_START)..=u32::from(LOW_END)).contains(&value)
}

/// Combine a high/low pair into the supplementary-plane scalar it encodes.
///
/// Returns `None` unless `high` is a high surrogate and `low` is a low
/// surrogate, in that order.
#[inline]
pub(crate) fn combine(high: u16, low: u16) -> Option<u32> {
    if !is_high(high) || !is_low(low) {
        return None;
    }
    let hi = u32::from(high - HIGH_START);
    let lo = u32::from(low - LOW_START);
    Some(SUPPLEMENTARY_START + (hi << 10) + lo)
}

/// Split a supplementary-plane scalar (>= U+10000) into its surrogate pair.
///
/// Returns `None` for BMP scalars, which need no pair.
#[inline]
pub(crate) fn split(scalar: u32) -> Option<(u16, u16)> {
    if scalar < SUPPLEMENTARY_START {
        return None;
    }
    debug_assert!(scalar <= 0x10_FFFF);
    let v = scalar - SUPPLEMENTARY_START;
    let high = HIGH_START + u16::try_from(v >> 10).ok()?;
    let low = LOW_START + (v as u16 & 0x3FF);
    Some((high, low))
}
