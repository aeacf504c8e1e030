//! UTF-8 well-formedness checking
//!
//! Structural validation of byte regions: valid lead bytes, in-range
//! continuation bytes, no overlong forms, no encoded surrogates, no
//! truncated sequences. The checker never decodes; it only classifies
//! bytes and advances a cursor, so malformed content costs one short
//! scan and a `false`.

use crate::classify::{classify, is_continuation, CONT_MAX, CONT_MIN, LeadByte};

/// Check whether a whole buffer is well-formed UTF-8.
///
/// # Example
/// ```
/// assert!(utfscan::is_well_formed("héllo".as_bytes()));
/// assert!(!utfscan::is_well_formed(&[0xC3, 0x28]));
/// ```
#[inline]
pub fn is_well_formed(bytes: &[u8]) -> bool {
    is_well_formed_range(bytes, 0, bytes.len())
}

/// Check whether the byte range `[offset, offset + length)` is
/// well-formed UTF-8.
///
/// Returns `false` at the first violation: an invalid lead byte, a
/// second byte outside the lead-specific range, a continuation byte
/// outside 0x80-0xBF, or a sequence running past the end of the range.
/// Content can never make this function panic; only a range that does
/// not fit the buffer can.
///
/// # Panics
/// Panics if `offset + length` overflows or exceeds `bytes.len()`. That
/// is a caller mistake, kept distinct from the `false` verdict on data.
pub fn is_well_formed_range(bytes: &[u8], offset: usize, length: usize) -> bool {
    let end = match offset.checked_add(length) {
        Some(end) if end <= bytes.len() => end,
        _ => panic!(
            "range out of bounds: offset {} + length {} exceeds buffer of {} bytes",
            offset,
            length,
            bytes.len()
        ),
    };

    let mut i = offset;
    while i < end {
        // Fast path: ASCII needs nothing beyond the range test.
        if bytes[i] <= 0x7F {
            i += 1;
            continue;
        }

        // Slow path: the lead byte fixes the sequence length and the
        // admissible range for the second byte.
        let (second_min, second_max, seq_len) = match classify(bytes[i]) {
            LeadByte::TwoByte => (CONT_MIN, CONT_MAX, 2),
            LeadByte::ThreeByte { second_min, second_max } => (second_min, second_max, 3),
            LeadByte::FourByte { second_min, second_max } => (second_min, second_max, 4),
            // 0x80-0xC1 and 0xF5-0xFF cannot lead a sequence; the fast
            // path already consumed everything classified as Ascii.
            LeadByte::Invalid | LeadByte::Ascii => return false,
        };

        // The whole sequence must fit inside the range.
        if end - i < seq_len {
            return false;
        }
        let second = bytes[i + 1];
        if second < second_min || second > second_max {
            return false;
        }
        // Third and fourth bytes only need the generic continuation
        // range.
        let mut k = i + 2;
        while k < i + seq_len {
            if !is_continuation(bytes[k]) {
                return false;
            }
            k += 1;
        }

        i += seq_len;
    }

    true
}
