//! utfscan - UTF-8 well-formedness scanning and exact UTF-16 sizing
//!
//! utfscan answers two questions about text without allocating:
//! how many UTF-8 bytes a UTF-16 sequence needs, and whether a byte
//! buffer (or a slice of one) is structurally valid UTF-8.
//!
//! # Features
//! - Exact UTF-8 byte count for UTF-16 input, rejecting unpaired surrogates
//! - Single-pass well-formedness scan with an ASCII fast path
//! - Subrange scanning over a larger buffer without copying
//! - A sized encoder whose output the scanner always accepts
//!
//! # Example
//! ```
//! use utfscan::{encoded_length, is_well_formed};
//!
//! let units: Vec<u16> = "caf\u{00E9}".encode_utf16().collect();
//! assert_eq!(encoded_length(&units), Ok(5));
//!
//! assert!(is_well_formed("caf\u{00E9}".as_bytes()));
//! assert!(!is_well_formed(&[0xC3, 0x28])); // bad continuation byte
//! ```

// Byte and code-unit classification
pub mod classify;

// UTF-16 to UTF-8 sizing
pub mod length;

// UTF-8 structural validation
pub mod wellformed;

// Sized encoding
pub mod encode;

// Re-export the main entry points
pub use encode::encode_utf16;
pub use length::{encoded_length, utf16_len, IllegalSequence};
pub use wellformed::{is_well_formed, is_well_formed_range};
