//! Byte and code-unit classification
//!
//! Range constants and predicates shared by the length counter and the
//! well-formedness checker. Everything here is a pure function of its
//! argument; the tables are fixed at compile time.

/// First code unit of the high (leading) surrogate range.
pub const HIGH_SURROGATE_MIN: u16 = 0xD800;
/// Last code unit of the high (leading) surrogate range.
pub const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
/// First code unit of the low (trailing) surrogate range.
pub const LOW_SURROGATE_MIN: u16 = 0xDC00;
/// Last code unit of the low (trailing) surrogate range.
pub const LOW_SURROGATE_MAX: u16 = 0xDFFF;

/// First scalar value that needs a surrogate pair in UTF-16.
pub const SUPPLEMENTARY_BASE: u32 = 0x10000;
/// Largest Unicode scalar value.
pub const MAX_SCALAR: u32 = 0x10_FFFF;

/// Tag bits of a UTF-8 continuation byte (`10xxxxxx`).
pub const CONT_TAG: u8 = 0b1000_0000;
/// Mask selecting the tag bits of a continuation byte.
pub const CONT_MASK: u8 = 0b1100_0000;
/// Smallest generic continuation byte.
pub const CONT_MIN: u8 = 0x80;
/// Largest generic continuation byte.
pub const CONT_MAX: u8 = 0xBF;

/// Classification of a UTF-8 lead byte.
///
/// The lead byte fixes the total sequence length and, for the 3- and
/// 4-byte forms, a narrowed range for the second byte. The narrowed
/// ranges are what rule out overlong encodings, encoded surrogates, and
/// scalar values above U+10FFFF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadByte {
    /// 0x80-0xC1 and 0xF5-0xFF: can never start a sequence.
    Invalid,
    /// 0x00-0x7F: a complete single-byte sequence.
    Ascii,
    /// 0xC2-0xDF: one continuation byte follows.
    TwoByte,
    /// 0xE0-0xEF: two continuation bytes follow; the second byte is
    /// restricted to `second_min..=second_max`.
    ThreeByte { second_min: u8, second_max: u8 },
    /// 0xF0-0xF4: three continuation bytes follow; the second byte is
    /// restricted to `second_min..=second_max`.
    FourByte { second_min: u8, second_max: u8 },
}

/// Classify a lead byte.
///
/// The second-byte restrictions follow RFC 3629: 0xE0 must not be
/// followed by a byte below 0xA0 (overlong), 0xED must not be followed by
/// a byte above 0x9F (would encode a surrogate U+D800-U+DFFF), 0xF0 must
/// not be followed by a byte below 0x90 (overlong), and 0xF4 must not be
/// followed by a byte above 0x8F (scalar value above U+10FFFF).
#[inline]
pub const fn classify(byte: u8) -> LeadByte {
    match byte {
        0x00..=0x7F => LeadByte::Ascii,
        0xC2..=0xDF => LeadByte::TwoByte,
        0xE0 => LeadByte::ThreeByte { second_min: 0xA0, second_max: CONT_MAX },
        0xE1..=0xEC | 0xEE..=0xEF => LeadByte::ThreeByte { second_min: CONT_MIN, second_max: CONT_MAX },
        0xED => LeadByte::ThreeByte { second_min: CONT_MIN, second_max: 0x9F },
        0xF0 => LeadByte::FourByte { second_min: 0x90, second_max: CONT_MAX },
        0xF1..=0xF3 => LeadByte::FourByte { second_min: CONT_MIN, second_max: CONT_MAX },
        0xF4 => LeadByte::FourByte { second_min: CONT_MIN, second_max: 0x8F },
        _ => LeadByte::Invalid,
    }
}

/// Check if a byte is a generic UTF-8 continuation byte (0x80-0xBF).
#[inline]
pub const fn is_continuation(byte: u8) -> bool {
    (byte & CONT_MASK) == CONT_TAG
}

/// Check if a code unit is a high (leading) surrogate.
#[inline]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX)
}

/// Check if a code unit is a low (trailing) surrogate.
#[inline]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX)
}

/// Check if a code unit is in the surrogate block.
#[inline]
pub const fn is_surrogate(unit: u16) -> bool {
    matches!(unit, HIGH_SURROGATE_MIN..=LOW_SURROGATE_MAX)
}

/// Combine a high/low surrogate pair into the scalar value it denotes.
///
/// Both units must lie in their respective surrogate ranges; the result
/// is then always in `0x10000..=0x10FFFF`.
#[inline]
pub const fn combine_surrogates(high: u16, low: u16) -> u32 {
    let high_bits = (high as u32 - HIGH_SURROGATE_MIN as u32) << 10;
    let low_bits = low as u32 - LOW_SURROGATE_MIN as u32;
    SUPPLEMENTARY_BASE + (high_bits | low_bits)
}
