//! Decoding of canonical u64 text back to native values

use crate::digits::{checked_accumulate, Accumulated, WIDTH};
use crate::error::{DecodeError, DecodeResult};
use crate::validator::is_canonical;

/// Decode a canonical text to its `u64` value
///
/// Shape is checked first, then the digits are accumulated with overflow
/// detection. The result never wraps or saturates.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidFormat`] if the input is not exactly 20 ASCII
/// digits, and [`DecodeError::NumericOverflow`] if the digits spell a number
/// greater than `u64::MAX`.
pub fn decode(text: impl AsRef<[u8]>) -> DecodeResult<u64> {
    let bytes = text.as_ref();
    if !is_canonical(bytes) {
        return Err(DecodeError::InvalidFormat(describe_violation(bytes)));
    }

    match checked_accumulate(bytes) {
        Accumulated::Value(value) => Ok(value),
        Accumulated::Overflow => Err(DecodeError::NumericOverflow),
        // Unreachable after the shape check, reported rather than assumed
        Accumulated::NonDigit { index, byte } => Err(DecodeError::InvalidFormat(format!(
            "non-digit byte 0x{byte:02x} at position {index}"
        ))),
    }
}

fn describe_violation(bytes: &[u8]) -> String {
    if bytes.len() != WIDTH {
        return format!("expected {WIDTH} digits, got {} bytes", bytes.len());
    }
    match bytes.iter().position(|b| !b.is_ascii_digit()) {
        Some(index) => format!("non-digit byte 0x{:02x} at position {index}", bytes[index]),
        None => "not a canonical u64 text".to_string(),
    }
}
