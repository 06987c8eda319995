//! Command-line interface for Punycode encoding.

use std::io::{self, BufRead, Write};

use clap::Parser;
use punycode::{encode_into, EncodeError};

/// punyenc - Encode UTF-8 text as Punycode labels (RFC 3492)
///
/// Reads lines from stdin and prints one label per line. Lines that cannot
/// be encoded are reported on stderr and skipped; the exit status is then 1.
#[derive(Parser, Debug)]
#[command(name = "punyenc")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lowercase each input before encoding
    #[arg(long)]
    lowercase: bool,

    /// Strings to encode instead of reading stdin
    inputs: Vec<String>,
}

/// Encodes lines into one output buffer that grows to fit the longest
/// label seen so far.
struct LineEncoder {
    buf: Vec<u8>,
    lowercase: bool,
}

impl LineEncoder {
    fn new(lowercase: bool) -> Self {
        Self {
            buf: Vec::new(),
            lowercase,
        }
    }

    fn encode(&mut self, line: &[u8]) -> Result<&[u8], EncodeError> {
        let folded;
        let line = if self.lowercase {
            folded = lowercase(line);
            folded.as_slice()
        } else {
            line
        };

        let mut encoded = encode_into(&mut self.buf, line)?;
        if encoded.is_truncated() {
            log::debug!(
                "growing output buffer from {} to {} bytes",
                self.buf.len(),
                encoded.required_capacity()
            );
            self.buf.resize(encoded.required_capacity(), 0);
            encoded = encode_into(&mut self.buf, line)?;
        }

        Ok(&self.buf[..encoded.len()])
    }
}

/// Unicode lowercasing. Input that is not UTF-8 is passed through as-is.
fn lowercase(line: &[u8]) -> Vec<u8> {
    match std::str::from_utf8(line) {
        Ok(s) => s.to_lowercase().into_bytes(),
        Err(_) => line.to_vec(),
    }
}

/// Encode one input and print its label. Returns `false` if the input was
/// skipped.
fn emit(
    encoder: &mut LineEncoder,
    out: &mut impl Write,
    line: &[u8],
    lineno: usize,
) -> io::Result<bool> {
    match encoder.encode(line) {
        Ok(label) => {
            out.write_all(label)?;
            out.write_all(b"\n")?;
            Ok(true)
        }
        Err(e) => {
            log::warn!("skipping input {}: {}", lineno, e);
            Ok(false)
        }
    }
}

/// Encode every input. Returns whether all of them were encoded.
fn run(args: &Args) -> io::Result<bool> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut encoder = LineEncoder::new(args.lowercase);
    let mut all_ok = true;

    if !args.inputs.is_empty() {
        for (i, input) in args.inputs.iter().enumerate() {
            all_ok &= emit(&mut encoder, &mut out, input.as_bytes(), i + 1)?;
        }
    } else {
        let stdin = io::stdin();
        let mut reader = stdin.lock();
        let mut line = Vec::new();
        let mut lineno = 0;

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            lineno += 1;
            if line.last() == Some(&b'\n') {
                line.pop();
            }
            all_ok &= emit(&mut encoder, &mut out, &line, lineno)?;
        }
    }

    out.flush()?;
    Ok(all_ok)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match run(&args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_encoder_grows_buffer() {
        let mut encoder = LineEncoder::new(false);
        assert_eq!(encoder.encode(b"a").unwrap(), b"a-");
        assert_eq!(encoder.encode("München".as_bytes()).unwrap(), b"Mnchen-3ya");
        assert_eq!(encoder.buf.len(), 11);

        // A shorter label reuses the larger buffer
        assert_eq!(encoder.encode("ü".as_bytes()).unwrap(), b"tda");
        assert_eq!(encoder.buf.len(), 11);
    }

    #[test]
    fn test_line_encoder_empty_line() {
        let mut encoder = LineEncoder::new(false);
        assert_eq!(encoder.encode(b"").unwrap(), b"");
    }

    #[test]
    fn test_line_encoder_lowercase() {
        let mut encoder = LineEncoder::new(true);
        assert_eq!(encoder.encode("MÜNCHEN".as_bytes()).unwrap(), b"mnchen-3ya");
    }

    #[test]
    fn test_line_encoder_overflow() {
        let mut encoder = LineEncoder::new(false);
        let mut input = "\u{80}".repeat(5000);
        input.push('\u{10FFFF}');
        assert_eq!(encoder.encode(input.as_bytes()), Err(EncodeError::Overflow));
        // The encoder is still usable afterwards
        assert_eq!(encoder.encode(b"ok").unwrap(), b"ok-");
    }

    #[test]
    fn test_emit_skips_failed_line() {
        let mut encoder = LineEncoder::new(false);
        let mut out = Vec::new();
        let mut input = "\u{80}".repeat(5000);
        input.push('\u{10FFFF}');

        assert!(emit(&mut encoder, &mut out, "ü".as_bytes(), 1).unwrap());
        assert!(!emit(&mut encoder, &mut out, input.as_bytes(), 2).unwrap());
        assert!(emit(&mut encoder, &mut out, b"a", 3).unwrap());
        assert_eq!(out, b"tda\na-\n");
    }

    #[test]
    fn test_lowercase_passes_invalid_utf8() {
        assert_eq!(lowercase(&[0xC3, b'A']), vec![0xC3, b'A']);
        assert_eq!(lowercase("ÄB".as_bytes()), "äb".as_bytes());
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["punyenc", "--lowercase", "München", "a"]);
        assert!(args.lowercase);
        assert_eq!(args.inputs, vec!["München", "a"]);
    }
}
