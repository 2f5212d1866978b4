//! Encoding into the canonical 20-digit form

use crate::digits::{checked_accumulate, write_padded, Accumulated, WIDTH};
use crate::error::{EncodeError, EncodeResult};
use crate::text::U64Text;

/// Encode a native value. Total: every `u64` fits in 20 decimal digits.
#[must_use]
pub fn encode(value: u64) -> U64Text {
    let mut buf = [0u8; WIDTH];
    write_padded(value, &mut buf);
    U64Text::from_array_unchecked(buf)
}

/// Parse free decimal text (`"1000"`, `"018"`) and encode it.
///
/// The whole input must be ASCII digits: no sign, no whitespace, no
/// fractional part. Leading zeros are accepted and may make the input longer
/// than 20 bytes.
///
/// # Errors
///
/// Returns [`EncodeError::InvalidNumberFormat`] for empty input or any
/// non-digit byte, and [`EncodeError::NumericOverflow`] when the value does not
/// fit in a `u64`.
pub fn encode_from_text(input: &str) -> EncodeResult<U64Text> {
    if input.is_empty() {
        return Err(EncodeError::InvalidNumberFormat(
            "input contains no digits".to_string(),
        ));
    }

    match checked_accumulate(input.as_bytes()) {
        Accumulated::Value(value) => Ok(encode(value)),
        Accumulated::Overflow => Err(EncodeError::NumericOverflow),
        Accumulated::NonDigit { index, .. } => {
            // Report the whole character, the byte may start a multi-byte sequence
            let ch = input[index..].chars().next().unwrap_or('\u{FFFD}');
            Err(EncodeError::InvalidNumberFormat(format!(
                "invalid digit {ch:?} at position {index}"
            )))
        }
    }
}
