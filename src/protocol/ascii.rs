//! # ASCII Text Encoding
//!
//! The DSP-420 character ROM only covers printable ASCII. Text sent as raw
//! bytes passes through unchanged when it is ASCII; anything else becomes
//! `?` so a stray multi-byte sequence can never be mistaken for a frame.

use tracing::warn;

/// Encode a string as display bytes.
///
/// - Printable ASCII (0x20–0x7E): passed through as-is
/// - Anything else: replaced with `?`, logged at warn level
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        if ch.is_ascii() && !ch.is_ascii_control() {
            out.push(ch as u8);
        } else {
            warn!(
                "ascii: unsupported character {:?} (U+{:04X}), replacing with '?'",
                ch, ch as u32
            );
            out.push(b'?');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("Hello 123!"), b"Hello 123!".to_vec());
    }

    #[test]
    fn test_non_ascii_replaced() {
        assert_eq!(encode("café"), b"caf?".to_vec());
    }

    #[test]
    fn test_control_bytes_replaced() {
        // EOT would otherwise open a control frame mid-text
        assert_eq!(encode("a\u{4}b"), b"a?b".to_vec());
    }
}
