//! UTF-8 length counting
//!
//! Computes the exact number of bytes a UTF-16 code-unit sequence needs
//! once encoded as UTF-8, without building the encoded form. An encoder
//! can therefore allocate its output buffer in one step and fill it
//! without ever growing it.

use crate::classify::{is_high_surrogate, is_low_surrogate};
use std::fmt;

/// Error from [`encoded_length`]: the input is not a well-formed UTF-16
/// sequence because a surrogate code unit has no partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalSequence {
    /// Index of the offending code unit.
    pub at: usize,
}

impl fmt::Display for IllegalSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unpaired surrogate at index {}", self.at)
    }
}

impl std::error::Error for IllegalSequence {}

/// Compute the exact UTF-8 byte length of a UTF-16 code-unit sequence.
///
/// Walks the sequence once, left to right. Each unit contributes 1, 2, or
/// 3 bytes depending on its range; a high/low surrogate pair contributes
/// 4 bytes for the supplementary scalar value it denotes. A high
/// surrogate not followed by a low surrogate, or a low surrogate on its
/// own, stops the count with an [`IllegalSequence`] carrying that unit's
/// index.
///
/// The running total is a `u64`. A slice holds at most `isize::MAX / 2`
/// units and each unit contributes at most 3 bytes, so the total cannot
/// wrap.
///
/// # Example
/// ```
/// let units: Vec<u16> = "H\u{00E9}llo".encode_utf16().collect();
/// assert_eq!(utfscan::encoded_length(&units), Ok(6));
/// ```
pub fn encoded_length(units: &[u16]) -> Result<u64, IllegalSequence> {
    let mut total: u64 = 0;
    let mut i = 0;

    while i < units.len() {
        let unit = units[i];

        // ASCII range, the common case.
        if unit <= 0x7F {
            total += 1;
            i += 1;
            continue;
        }
        if unit <= 0x7FF {
            total += 2;
            i += 1;
            continue;
        }
        if is_high_surrogate(unit) {
            // Only a high surrogate immediately followed by a low
            // surrogate denotes a scalar value.
            match units.get(i + 1) {
                Some(&next) if is_low_surrogate(next) => {
                    total += 4;
                    i += 2;
                }
                _ => return Err(IllegalSequence { at: i }),
            }
            continue;
        }
        if is_low_surrogate(unit) {
            return Err(IllegalSequence { at: i });
        }

        // Remaining BMP range 0x800-0xFFFF outside the surrogate block.
        total += 3;
        i += 1;
    }

    Ok(total)
}

/// Get the UTF-16 code-unit count of a UTF-8 string.
///
/// The inverse sizing question: how large a UTF-16 buffer the string
/// needs once decoded.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(|c| c.len_utf16()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units_of(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn test_empty() {
        assert_eq!(encoded_length(&[]), Ok(0));
    }

    #[test]
    fn test_ascii_identity() {
        assert_eq!(encoded_length(&units_of("Hello")), Ok(5));

        // Every all-ASCII sequence encodes to exactly one byte per unit.
        let ascii: Vec<u16> = (0x00..=0x7F).collect();
        assert_eq!(encoded_length(&ascii), Ok(ascii.len() as u64));
    }

    #[test]
    fn test_two_byte_range() {
        assert_eq!(encoded_length(&units_of("H\u{00E9}llo")), Ok(6));
        assert_eq!(encoded_length(&[0x80]), Ok(2));
        assert_eq!(encoded_length(&[0x7FF]), Ok(2));
    }

    #[test]
    fn test_three_byte_range() {
        assert_eq!(encoded_length(&[0x800]), Ok(3));
        assert_eq!(encoded_length(&units_of("中")), Ok(3));
        // The last units before and after the surrogate block.
        assert_eq!(encoded_length(&[0xD7FF]), Ok(3));
        assert_eq!(encoded_length(&[0xE000]), Ok(3));
        assert_eq!(encoded_length(&[0xFFFF]), Ok(3));
    }

    #[test]
    fn test_surrogate_pair() {
        // 😀 is U+1F600, the pair D83D DE00.
        assert_eq!(encoded_length(&[0xD83D, 0xDE00]), Ok(4));
        assert_eq!(encoded_length(&units_of("😀")), Ok(4));
    }

    #[test]
    fn test_mixed_widths() {
        // 'a' (1) + '中' (3) + '😀' (4)
        assert_eq!(encoded_length(&[0x61, 0x4E2D, 0xD83D, 0xDE00]), Ok(8));
    }

    #[test]
    fn test_high_surrogate_at_end() {
        assert_eq!(
            encoded_length(&[0x41, 0xD800]),
            Err(IllegalSequence { at: 1 })
        );
    }

    #[test]
    fn test_high_surrogate_without_low() {
        assert_eq!(
            encoded_length(&[0xD800, 0x41]),
            Err(IllegalSequence { at: 0 })
        );
        // A high surrogate followed by another high surrogate is just as
        // unpaired.
        assert_eq!(
            encoded_length(&[0xD800, 0xD800, 0xDC00]),
            Err(IllegalSequence { at: 0 })
        );
    }

    #[test]
    fn test_lone_low_surrogate() {
        assert_eq!(encoded_length(&[0xDC00]), Err(IllegalSequence { at: 0 }));
        assert_eq!(
            encoded_length(&[0x41, 0xDFFF, 0x42]),
            Err(IllegalSequence { at: 1 })
        );
    }

    #[test]
    fn test_matches_actual_encoding() {
        for s in ["", "Hello", "H\u{00E9}llo", "中文テキスト", "a中😀b", "🎉🚀"] {
            let expected = s.len() as u64;
            assert_eq!(encoded_length(&units_of(s)), Ok(expected), "input {:?}", s);
        }
    }

    #[test]
    fn test_error_display() {
        let err = IllegalSequence { at: 7 };
        assert_eq!(err.to_string(), "unpaired surrogate at index 7");
    }

    #[test]
    fn test_utf16_len() {
        assert_eq!(utf16_len(""), 0);
        assert_eq!(utf16_len("hello"), 5);
        assert_eq!(utf16_len("h\u{00E9}llo"), 5);
        assert_eq!(utf16_len("中文"), 2);
        assert_eq!(utf16_len("😀"), 2); // one surrogate pair
    }
}
