//! Raw-coercion scheme
//!
//! The older of the two storage conventions: the value is kept as a native
//! signed integer whose bits are read back as unsigned, and text operands are
//! compared after a lenient parse. Nothing here validates or canonicalizes.
//! Columns written through this scheme must not be mixed with `U64TEXT`
//! columns.

use std::cmp::Ordering;

/// Read the bit pattern of a signed value as unsigned (`-1` becomes `u64::MAX`)
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub const fn reinterpret_as_u64(value: i64) -> u64 {
    value as u64
}

/// Inverse of [`reinterpret_as_u64`], used to hand values back to a host
/// that only stores signed integers
#[must_use]
#[allow(clippy::cast_possible_wrap)]
pub const fn reinterpret_as_i64(value: u64) -> i64 {
    value as i64
}

/// Lenient unsigned parse in the style of C `strtoull`.
///
/// Leading ASCII whitespace is skipped, one `+` or `-` is accepted (`-` negates
/// modulo 2^64), digits are consumed up to the first non-digit and the rest is
/// ignored. Overflow saturates at `u64::MAX`. No digits gives `0`.
#[must_use]
pub fn parse_unchecked(text: &[u8]) -> u64 {
    let mut rest = text;
    while let Some((first, tail)) = rest.split_first() {
        if !first.is_ascii_whitespace() {
            break;
        }
        rest = tail;
    }

    let negative = match rest.first() {
        Some(b'-') => {
            rest = &rest[1..];
            true
        }
        Some(b'+') => {
            rest = &rest[1..];
            false
        }
        _ => false,
    };

    let mut value: u64 = 0;
    for &b in rest.iter().take_while(|b| b.is_ascii_digit()) {
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(b - b'0')))
        {
            Some(next) => value = next,
            None => return u64::MAX,
        }
    }

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Three-way comparison of two decimal texts by their leniently parsed
/// magnitudes. Returns `-1`, `0` or `1`.
#[must_use]
pub fn raw_compare(a: &[u8], b: &[u8]) -> i32 {
    match parse_unchecked(a).cmp(&parse_unchecked(b)) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    }
}
