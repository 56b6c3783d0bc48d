//! This module contains reusable components for decoding text in DICOM
//! data structures.
//!
//! Text is decoded as UTF-8 (ISO-IR 192) when it is valid UTF-8,
//! and as ISO-8859-1 (ISO-IR 100) otherwise.
//! Since ISO-8859-1 is a superset of the default repertoire
//! and maps every byte, decoding never fails.

use encoding::all::{ISO_8859_1, UTF_8};
use encoding::{DecoderTrap, Encoding};

/// Decode the given bytes into a string.
pub fn decode_text(bytes: &[u8]) -> String {
    UTF_8
        .decode(bytes, DecoderTrap::Strict)
        .or_else(|_| ISO_8859_1.decode(bytes, DecoderTrap::Replace))
        .unwrap_or_else(|_| String::from_utf8_lossy(bytes).into_owned())
}

/// Cut off trailing spaces and NUL characters,
/// used in DICOM to pad values to an even length.
pub fn trim_padding(text: &str) -> &str {
    text.trim_end_matches([' ', '\0'])
}

/// Split a multi-valued string at its backslash delimiters.
pub fn split_values(text: &str) -> impl Iterator<Item = &str> {
    text.split('\\')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_and_latin1() {
        assert_eq!(decode_text(b"Jos\xc3\xa9"), "José");
        assert_eq!(decode_text(b"Jos\xe9"), "José");
        assert_eq!(decode_text(b"plain"), "plain");
    }

    #[test]
    fn padding_is_trimmed_at_the_end_only() {
        assert_eq!(trim_padding(" ORIGINAL \0"), " ORIGINAL");
        assert_eq!(trim_padding("\0\0"), "");
    }

    #[test]
    fn values_split_at_backslash() {
        let values: Vec<_> = split_values("ORIGINAL\\PRIMARY\\M\\ND").collect();
        assert_eq!(values, vec!["ORIGINAL", "PRIMARY", "M", "ND"]);
    }
}
