//! Error type for Punycode encoding.

/// Errors that can occur during Punycode encoding.
///
/// Encoding has exactly one failure mode. Any output written before the
/// failure is NUL-terminated but is not a usable label.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The delta accumulator would wrap around its 32-bit range.
    ///
    /// Happens when the gap between successive extended code points times
    /// the number of code points already handled, plus the running delta,
    /// exceeds `u32::MAX`.
    #[error("punycode encoding overflowed")]
    Overflow,
}
