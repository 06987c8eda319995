//! Trusting UTF-8 decoding.
//!
//! The encoder never validates its input. These helpers decode whatever
//! bytes they are given as if they were well-formed UTF-8: continuation
//! bytes are not checked, overlong forms are accepted, and a sequence cut
//! short by a NUL or by the end of the slice yields a partial value. Bad
//! input produces wrong output, never an out-of-bounds read.

/// Decode one code point from the start of `bytes`.
///
/// Returns the decoded value and the number of bytes consumed (1-4). The
/// lead byte decides the sequence length; if a NUL or the end of the slice
/// is reached before the sequence is complete, decoding stops there and the
/// count of bytes consumed so far is returned.
///
/// `bytes` must not be empty.
pub(crate) fn decode_unchecked(bytes: &[u8]) -> (u32, usize) {
    let lead = bytes[0];
    let len = match lead {
        0x00..=0x7F => return (u32::from(lead), 1),
        0x80..=0xDF => 2,
        0xE0..=0xEF => 3,
        _ => 4,
    };

    let mut codepoint = u32::from(lead & (0x7Fu8 >> len));
    for i in 1..len {
        match bytes.get(i) {
            None | Some(0) => return (codepoint, i),
            Some(&b) => codepoint = (codepoint << 6) | u32::from(b & 0x3F),
        }
    }

    (codepoint, len)
}

/// Iterator over the code points of a NUL-terminated byte string.
///
/// Iteration ends at the first NUL byte or at the end of the slice,
/// whichever comes first. Cloning is cheap, so the encoder rescans the
/// input by cloning a pristine iterator.
#[derive(Debug, Clone)]
pub(crate) struct CodePoints<'a> {
    bytes: &'a [u8],
}

impl<'a> CodePoints<'a> {
    /// Create an iterator over `bytes`.
    pub(crate) fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }
}

impl Iterator for CodePoints<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        match self.bytes.first() {
            None | Some(0) => None,
            Some(_) => {
                let (codepoint, consumed) = decode_unchecked(self.bytes);
                self.bytes = &self.bytes[consumed..];
                Some(codepoint)
            }
        }
    }
}
