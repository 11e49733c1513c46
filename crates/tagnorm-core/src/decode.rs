// crates/tagnorm-core/src/decode.rs
//
// Byte input -> text. Ill-formed UTF-8 never fails normalization; what gets
// lost is chosen by the caller through `InvalidUtf8`.

use std::borrow::Cow;
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum InvalidUtf8 {
    /// Silently discard ill-formed sequences.
    #[default]
    Drop,
    /// Substitute U+FFFD for each ill-formed sequence.
    Replace,
}

impl InvalidUtf8 {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidUtf8::Drop => "drop",
            InvalidUtf8::Replace => "replace",
        }
    }
}

/// Decode `bytes` according to `policy`. Borrows when the input is valid UTF-8.
pub fn decode_lossy(bytes: &[u8], policy: InvalidUtf8) -> Cow<'_, str> {
    if let Ok(s) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(s);
    }

    match policy {
        InvalidUtf8::Drop => {
            let mut out = String::with_capacity(bytes.len());
            let mut dropped = 0usize;
            for chunk in bytes.utf8_chunks() {
                out.push_str(chunk.valid());
                dropped += chunk.invalid().len();
            }
            debug!(dropped, input_len = bytes.len(), "dropped ill-formed utf-8 bytes");
            Cow::Owned(out)
        }
        InvalidUtf8::Replace => {
            debug!(input_len = bytes.len(), "replaced ill-formed utf-8 bytes");
            String::from_utf8_lossy(bytes)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_is_borrowed() {
        assert!(matches!(decode_lossy(b"web-01", InvalidUtf8::Drop), Cow::Borrowed("web-01")));
    }

    #[test]
    fn drop_discards_bad_bytes() {
        assert_eq!(decode_lossy(b"ab\xFFcd\xC3", InvalidUtf8::Drop), "abcd");
    }

    #[test]
    fn replace_inserts_replacement_char() {
        assert_eq!(decode_lossy(b"ab\xFFcd", InvalidUtf8::Replace), "ab\u{FFFD}cd");
    }

    #[test]
    fn multibyte_survives_drop() {
        assert_eq!(decode_lossy("caf\u{e9}\u{80}".as_bytes(), InvalidUtf8::Drop), "caf\u{e9}\u{80}");
        assert_eq!(decode_lossy(b"caf\xC3\xA9\x80", InvalidUtf8::Drop), "caf\u{e9}");
    }
}
