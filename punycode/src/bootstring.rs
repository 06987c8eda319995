//! Bootstring parameters and helpers for Punycode.
//!
//! RFC 3492 defines Punycode as Bootstring instantiated with base 36 over
//! the alphabet a-z (0-25) + 0-9 (26-35). The constants below are the
//! RFC's section 5 parameter values and must not change: any difference
//! produces labels that other implementations cannot decode.

/// Base for generalized variable-length integers.
pub(crate) const BASE: u32 = 36;

/// Minimum threshold value.
pub(crate) const T_MIN: u32 = 1;

/// Maximum threshold value.
pub(crate) const T_MAX: u32 = 26;

/// Skew factor for bias adaptation.
pub(crate) const SKEW: u32 = 38;

/// Damping factor for the first adaptation.
pub(crate) const DAMP: u32 = 700;

/// Initial bias value.
pub(crate) const INITIAL_BIAS: u32 = 72;

/// First extended code point; everything below is copied verbatim.
pub(crate) const INITIAL_N: u32 = 0x80;

/// Separator between the basic code points and the encoded deltas.
pub(crate) const DELIMITER: u8 = b'-';

/// Adapt bias after a delta has been encoded.
///
/// - delta: the generalized integer just emitted
/// - num_points: handled count including the code point just emitted
/// - first_time: whether this is the first adaptation of the encode
///
/// The order of operations follows RFC 3492 section 6.1 exactly.
pub(crate) fn adapt_bias(mut delta: u32, num_points: u32, first_time: bool) -> u32 {
    delta = if first_time { delta / DAMP } else { delta / 2 };

    delta += delta / num_points;

    let mut k = 0u32;
    let base_minus_tmin = BASE - T_MIN;
    let threshold = (base_minus_tmin * T_MAX) / 2;

    while delta > threshold {
        delta /= base_minus_tmin;
        k += BASE;
    }

    k + ((base_minus_tmin + 1) * delta) / (delta + SKEW)
}

/// Encode a digit value (0-35) as its lowercase ASCII representation.
///
/// Values 0-25 map to `a`-`z` and 26-35 map to `0`-`9`. The caller
/// guarantees `d < BASE`.
pub(crate) fn encode_digit(d: u32) -> u8 {
    debug_assert!(d < BASE, "digit {} out of range", d);
    if d < 26 {
        b'a' + d as u8
    } else {
        b'0' + (d - 26) as u8
    }
}

/// Threshold for the digit at position `k` under the given bias, clamped
/// to `T_MIN..=T_MAX`.
pub(crate) fn threshold(k: u32, bias: u32) -> u32 {
    if k <= bias {
        T_MIN
    } else if k >= bias + T_MAX {
        T_MAX
    } else {
        k - bias
    }
}
