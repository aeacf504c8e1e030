//! UTF-16 to UTF-8 encoding
//!
//! The encoder that consumes the sizing engine: it asks
//! [`encoded_length`] for the exact output size, allocates once, and
//! fills the buffer in a second pass. Its output is always well-formed,
//! which also makes it the reference encoder for the round-trip tests.

use crate::classify::{combine_surrogates, is_high_surrogate};
use crate::length::{encoded_length, IllegalSequence};

/// Encode a UTF-16 code-unit sequence as UTF-8.
///
/// The output buffer is sized by [`encoded_length`] up front and never
/// grows. The same pass that sizes the buffer rejects unpaired
/// surrogates, so the emit loop below only ever sees units that pair up.
pub fn encode_utf16(units: &[u16]) -> Result<Vec<u8>, IllegalSequence> {
    let size = encoded_length(units)?;
    let mut out = Vec::with_capacity(size as usize);

    let mut i = 0;
    while i < units.len() {
        let unit = units[i];
        let scalar = if is_high_surrogate(unit) {
            // encoded_length accepted the input, so a low surrogate
            // follows every high one and i + 1 is in bounds.
            let low = units[i + 1];
            i += 2;
            combine_surrogates(unit, low)
        } else {
            // Lone low surrogates were rejected by the sizing pass, so
            // this unit is a BMP scalar value.
            i += 1;
            unit as u32
        };
        push_scalar(&mut out, scalar);
    }

    Ok(out)
}

/// Append the UTF-8 encoding of one scalar value (1 to 4 bytes).
#[inline]
pub fn push_scalar(out: &mut Vec<u8>, scalar: u32) {
    if scalar < 0x80 {
        out.push(scalar as u8);
    } else if scalar < 0x800 {
        out.push(0xC0 | (scalar >> 6) as u8);
        out.push(0x80 | (scalar & 0x3F) as u8);
    } else if scalar < 0x10000 {
        out.push(0xE0 | (scalar >> 12) as u8);
        out.push(0x80 | ((scalar >> 6) & 0x3F) as u8);
        out.push(0x80 | (scalar & 0x3F) as u8);
    } else {
        out.push(0xF0 | (scalar >> 18) as u8);
        out.push(0x80 | ((scalar >> 12) & 0x3F) as u8);
        out.push(0x80 | ((scalar >> 6) & 0x3F) as u8);
        out.push(0x80 | (scalar & 0x3F) as u8);
    }
}
