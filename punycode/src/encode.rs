//! Punycode encoding implementation.

use crate::bootstring::{
    adapt_bias, encode_digit, threshold, BASE, DELIMITER, INITIAL_BIAS, INITIAL_N,
};
use crate::utf8::CodePoints;
use crate::EncodeError;

/// Outcome of a successful [`encode_into`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded {
    len: usize,
    truncated: bool,
}

impl Encoded {
    fn new(len: usize, capacity: usize) -> Self {
        Self {
            len,
            truncated: len >= capacity,
        }
    }

    /// Full length of the label, excluding the NUL terminator, whether or
    /// not it fit in the buffer.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the label is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the buffer was too small to hold the label and its
    /// terminator. When set, only a prefix of the label was written.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    /// Buffer size needed to hold the whole label plus its terminator.
    pub fn required_capacity(&self) -> usize {
        self.len + 1
    }
}

/// Write side of the encoder. Counts every byte pushed but only stores
/// the ones that leave room for the terminator.
struct Output<'a> {
    dst: &'a mut [u8],
    len: usize,
}

impl<'a> Output<'a> {
    fn new(dst: &'a mut [u8]) -> Self {
        Self { dst, len: 0 }
    }

    fn push(&mut self, byte: u8) {
        if let Some(slot) = self.dst.get_mut(self.len) {
            *slot = byte;
        }
        self.len += 1;
    }

    /// NUL-terminate what was written. The terminator never counts toward
    /// `len`.
    fn terminate(&mut self) {
        if self.len < self.dst.len() {
            self.dst[self.len] = 0;
        } else if let Some(last) = self.dst.last_mut() {
            *last = 0;
        }
    }
}

/// Encode a UTF-8 byte string as a Punycode label into `dst`.
///
/// `src` ends at its first NUL byte or at the end of the slice. It is
/// assumed to be valid UTF-8 and is not checked; malformed input yields a
/// meaningless label, never a panic.
///
/// At most `dst.len() - 1` label bytes are written, followed by a NUL
/// terminator. The returned [`Encoded`] always carries the full label
/// length, so a caller whose buffer was too small can grow it to
/// [`Encoded::required_capacity`] and call again. An empty `dst` writes
/// nothing and only measures.
///
/// On [`EncodeError::Overflow`] the bytes written so far are still
/// terminated, but they are not a valid label.
///
/// # Examples
///
/// ```
/// use punycode::encode_into;
///
/// let mut buf = [0u8; 16];
/// let encoded = encode_into(&mut buf, "München".as_bytes()).unwrap();
/// assert_eq!(encoded.len(), 10);
/// assert!(!encoded.is_truncated());
/// assert_eq!(&buf[..11], b"Mnchen-3ya\0");
///
/// let mut small = [0u8; 4];
/// let encoded = encode_into(&mut small, "München".as_bytes()).unwrap();
/// assert!(encoded.is_truncated());
/// assert_eq!(encoded.required_capacity(), 11);
/// assert_eq!(&small, b"Mnc\0");
/// ```
pub fn encode_into(dst: &mut [u8], src: &[u8]) -> Result<Encoded, EncodeError> {
    let capacity = dst.len();
    let mut output = Output::new(dst);

    let result = encode_label(&mut output, CodePoints::new(src));
    output.terminate();

    match result {
        Ok(()) => Ok(Encoded::new(output.len, capacity)),
        Err(e) => {
            log::debug!("{} after {} output bytes", e, output.len);
            Err(e)
        }
    }
}

/// Compute the length of the Punycode label for `src` without writing it.
pub fn encoded_len(src: &[u8]) -> Result<usize, EncodeError> {
    encode_into(&mut [], src).map(|encoded| encoded.len())
}

/// Encode a UTF-8 byte string as a Punycode label.
///
/// Measures the label first, then encodes into a buffer of exactly the
/// required size. See [`encode_into`] for how `src` is interpreted.
pub fn encode(src: &[u8]) -> Result<String, EncodeError> {
    let len = encoded_len(src)?;
    let mut buf = vec![0u8; len + 1];
    let encoded = encode_into(&mut buf, src)?;
    debug_assert!(!encoded.is_truncated());
    buf.truncate(encoded.len());

    // Basic code points are below 0x80 and digits are a-z0-9.
    Ok(buf.into_iter().map(char::from).collect())
}

/// Encode a string as a Punycode label.
///
/// # Examples
///
/// ```
/// use punycode::encode_str;
///
/// assert_eq!(encode_str("München-Ost").unwrap(), "Mnchen-Ost-9db");
/// assert_eq!(encode_str("例").unwrap(), "fsq");
/// assert_eq!(encode_str("London").unwrap(), "London-");
/// ```
pub fn encode_str(input: &str) -> Result<String, EncodeError> {
    encode(input.as_bytes())
}

/// Number of code points handled so far plus one, as the encoder's
/// arithmetic needs it.
fn points(handled: usize) -> Result<u32, EncodeError> {
    handled
        .checked_add(1)
        .and_then(|p| u32::try_from(p).ok())
        .ok_or(EncodeError::Overflow)
}

/// Core of RFC 3492 section 6.3.
fn encode_label(output: &mut Output<'_>, input: CodePoints<'_>) -> Result<(), EncodeError> {
    let mut n = INITIAL_N;
    let mut input_len = 0usize;

    // Copy the basic code points in order.
    for codepoint in input.clone() {
        input_len += 1;
        if codepoint < n {
            output.push(codepoint as u8);
        }
    }

    let basic = output.len;
    let mut handled = basic;
    if basic > 0 {
        output.push(DELIMITER);
    }

    let mut delta: u32 = 0;
    let mut bias = INITIAL_BIAS;

    while handled < input_len {
        // Smallest code point not yet handled.
        let Some(m) = input.clone().filter(|&cp| cp >= n).min() else {
            break;
        };

        delta = (m - n)
            .checked_mul(points(handled)?)
            .and_then(|advance| delta.checked_add(advance))
            .ok_or(EncodeError::Overflow)?;
        n = m;

        log::trace!("round n={:#x} delta={} handled={}", n, delta, handled);

        for codepoint in input.clone() {
            if codepoint < n {
                delta = delta.checked_add(1).ok_or(EncodeError::Overflow)?;
            } else if codepoint == n {
                encode_varint(output, delta, bias);
                bias = adapt_bias(delta, points(handled)?, handled == basic);
                delta = 0;
                handled += 1;
            }
        }

        delta = delta.checked_add(1).ok_or(EncodeError::Overflow)?;
        n += 1;
    }

    Ok(())
}

/// Emit `value` as a generalized variable-length integer.
fn encode_varint(output: &mut Output<'_>, value: u32, bias: u32) {
    let mut q = value;
    let mut k = BASE;

    loop {
        let t = threshold(k, bias);
        if q < t {
            break;
        }

        output.push(encode_digit(t + (q - t) % (BASE - t)));

        q = (q - t) / (BASE - t);
        k += BASE;
    }

    output.push(encode_digit(q));
}
