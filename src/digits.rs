//! Digit-level helpers shared by the encoder and decoder.

/// Width in bytes of a canonical u64 text. `u64::MAX` has exactly 20 digits.
pub const WIDTH: usize = 20;

/// Write `value` as zero-padded decimal into a fixed 20-byte buffer.
///
/// Digits are produced least-significant first from the end of the buffer;
/// the untouched prefix is already `'0'`.
#[allow(clippy::cast_possible_truncation)]
pub fn write_padded(mut value: u64, buf: &mut [u8; WIDTH]) {
    *buf = [b'0'; WIDTH];
    let mut pos = WIDTH;
    while value > 0 {
        pos -= 1;
        buf[pos] = b'0' + (value % 10) as u8;
        value /= 10;
    }
}

/// Outcome of accumulating a run of decimal digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accumulated {
    Value(u64),
    /// First byte that is not an ASCII digit, with its index
    NonDigit { index: usize, byte: u8 },
    Overflow,
}

/// Fold ASCII digits into a `u64` with checked multiply-add at every step.
///
/// Scanning stops at the first non-digit. Overflow is only reported for a
/// string made entirely of digits, so a malformed input is never reported as
/// an overflow just because its digit prefix was long.
pub fn checked_accumulate(bytes: &[u8]) -> Accumulated {
    let mut value: u64 = 0;
    let mut overflowed = false;

    for (index, &byte) in bytes.iter().enumerate() {
        if !byte.is_ascii_digit() {
            return Accumulated::NonDigit { index, byte };
        }
        if overflowed {
            continue;
        }
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(byte - b'0')))
        {
            Some(next) => value = next,
            None => overflowed = true,
        }
    }

    if overflowed {
        Accumulated::Overflow
    } else {
        Accumulated::Value(value)
    }
}
