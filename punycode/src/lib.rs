//! Punycode: encode Unicode strings as ASCII labels (RFC 3492).
//!
//! Punycode maps a sequence of Unicode code points onto the letters,
//! digits and hyphen of US-ASCII, the alphabet allowed in domain name
//! labels. Basic (ASCII) code points are copied verbatim and followed by a
//! `-`; every other code point is described by a delta encoded as a
//! base-36 generalized variable-length integer.
//!
//! The buffer interface follows `strlcpy`: [`encode_into`] writes as much
//! of the label as fits, always NUL-terminates, and reports the full
//! length so the caller can grow its buffer and retry. [`encode`] and
//! [`encode_str`] do that retry for you.
//!
//! Only encoding is provided. Input is trusted to be UTF-8 and is never
//! validated; case folding or normalization is left to the caller.
//!
//! # Examples
//!
//! ```
//! use punycode::{encode_str, EncodeError};
//!
//! // Basic code points are echoed, followed by the delimiter
//! assert_eq!(encode_str("London").unwrap(), "London-");
//!
//! // Extended code points are moved to the end as digits
//! assert_eq!(encode_str("München").unwrap(), "Mnchen-3ya");
//! assert_eq!(encode_str("ü").unwrap(), "tda");
//!
//! // Deltas that do not fit in 32 bits are an error, not a wrong label
//! let mut huge = "\u{80}".repeat(5000);
//! huge.push('\u{10FFFF}');
//! assert_eq!(encode_str(&huge), Err(EncodeError::Overflow));
//! ```

mod bootstring;
mod encode;
mod error;
mod utf8;

pub use encode::{encode, encode_into, encode_str, encoded_len, Encoded};
pub use error::EncodeError;


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn is_label_byte(b: u8) -> bool {
        b.is_ascii_alphanumeric() || b == b'-'
    }

    proptest! {
        /// ASCII echo: a pure-ASCII input is copied and gets one trailing hyphen
        #[test]
        fn prop_ascii_echo(s in "[ -~]{1,64}") {
            let encoded = encode_str(&s).unwrap();
            prop_assert_eq!(encoded.len(), s.len() + 1);
            prop_assert_eq!(&encoded[..s.len()], s.as_str());
            prop_assert!(encoded.ends_with('-'));
        }

        /// Alphabet: LDH-only inputs produce LDH-only labels
        #[test]
        fn prop_ldh_alphabet(s in "[a-zA-Z0-9\\-\u{80}-\u{10FFFF}]{0,32}") {
            let encoded = encode_str(&s).unwrap();
            prop_assert!(
                encoded.bytes().all(is_label_byte),
                "encode('{}') = '{}' has a non-LDH byte",
                &s, &encoded
            );
        }

        /// Re-encoding a label appends exactly one hyphen
        #[test]
        fn prop_reencode_appends_hyphen(s in "\\PC{1,24}") {
            if let Ok(once) = encode_str(&s) {
                if !once.is_empty() {
                    let twice = encode_str(&once).unwrap();
                    prop_assert_eq!(twice, format!("{}-", once));
                }
            }
        }

        /// Truncating copy: every capacity yields a prefix of the full label
        /// and the same reported length
        #[test]
        fn prop_truncated_prefix(s in "\\PC{0,24}", cap in 0usize..80) {
            let full = encode_str(&s);
            let mut buf = vec![0xFFu8; cap];
            let result = encode_into(&mut buf, s.as_bytes());

            match (full, result) {
                (Ok(full), Ok(encoded)) => {
                    prop_assert_eq!(encoded.len(), full.len());
                    prop_assert_eq!(encoded.is_truncated(), full.len() >= cap);
                    if cap > 0 {
                        let written = full.len().min(cap - 1);
                        prop_assert_eq!(&buf[..written], &full.as_bytes()[..written]);
                        prop_assert_eq!(buf[written], 0);
                    }
                }
                (Err(a), Err(b)) => {
                    prop_assert_eq!(a, b);
                }
                (full, result) => {
                    prop_assert!(false, "disagreement: {:?} vs {:?}", full, result);
                }
            }
        }

        /// Length stability: a large enough buffer holds exactly the label
        #[test]
        fn prop_length_stable(s in "\\PC{0,24}", extra in 1usize..16) {
            if let Ok(len) = encoded_len(s.as_bytes()) {
                let mut buf = vec![0xFFu8; len + extra];
                let encoded = encode_into(&mut buf, s.as_bytes()).unwrap();
                prop_assert_eq!(encoded.len(), len);
                prop_assert!(!encoded.is_truncated());
                prop_assert_eq!(buf[len], 0);
                let label = encode_str(&s).unwrap();
                prop_assert_eq!(label.as_bytes(), &buf[..len]);
            }
        }
    }
}
