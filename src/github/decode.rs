// src/github/decode.rs
// =============================================================================
// Decodes the base64 `content` field of the README endpoint.
//
// GitHub wraps the base64 text with newlines every 60 characters, so all
// whitespace is removed before decoding. Invalid base64 is an error;
// invalid UTF-8 is not, the bad bytes become U+FFFD.
// =============================================================================

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::Result;

/// Decodes base64 file content into text.
///
/// Example:
///   "SGVs\nbG8=\n" -> "Hello"
pub fn decode_content(raw: &str) -> Result<String> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact.as_bytes())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GlanceError;

    #[test]
    fn test_decode_simple() {
        assert_eq!(decode_content("SGVsbG8sIHdvcmxkIQ==").unwrap(), "Hello, world!");
    }

    #[test]
    fn test_whitespace_is_ignored() {
        let plain = decode_content("IyBUaXRsZQoKU29tZSAqKmJvbGQqKiB0ZXh0Lg==").unwrap();
        let padded =
            decode_content("  IyBUaXRsZQoKU29t\nZSAqKmJvbGQqKiB0\r\nZXh0Lg==\n\t").unwrap();
        assert_eq!(plain, padded);
        assert_eq!(plain, "# Title\n\nSome **bold** text.");
    }

    #[test]
    fn test_empty_content() {
        assert_eq!(decode_content("").unwrap(), "");
        assert_eq!(decode_content("\n").unwrap(), "");
    }

    #[test]
    fn test_invalid_base64_is_an_error() {
        let err = decode_content("this is *not* base64!").unwrap_err();
        assert!(matches!(err, GlanceError::Decode(_)));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        // 0xFF is never valid UTF-8
        let text = decode_content("/w==").unwrap();
        assert_eq!(text, "\u{FFFD}");
    }
}
