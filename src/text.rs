use crate::decoder::decode;
use crate::digits::WIDTH;
use crate::display::display;
use crate::encoder::{encode, encode_from_text};
use crate::error::{DecodeError, EncodeError};
use std::fmt;
use std::str::FromStr;

/// A `u64` stored in its canonical 20-digit zero-padded decimal form
///
/// The struct holds the encoded bytes inline, providing:
/// - Zero-copy access via `as_bytes()` / `as_str()`
/// - Direct byte comparison for Ord (order-preserving)
/// - No heap allocation; the type is `Copy`
///
/// Every `U64Text` is in range: it can only be built from a `u64`, from free
/// text through the checked parser, or from bytes that pass [`decode`].
/// Twenty nines therefore never make it into a `U64Text`.
///
/// `Display` prints the minimal decimal form (`42`), while `as_str()` gives the
/// stored form (`00000000000000000042`).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct U64Text {
    bytes: [u8; WIDTH],
}

impl U64Text {
    /// Smallest value, `00000000000000000000`
    pub const MIN: Self = Self {
        bytes: [b'0'; WIDTH],
    };

    /// Largest value, `18446744073709551615`
    pub const MAX: Self = Self {
        bytes: *b"18446744073709551615",
    };

    /// Wrap an already padded buffer. Callers guarantee the invariant.
    pub(crate) const fn from_array_unchecked(bytes: [u8; WIDTH]) -> Self {
        Self { bytes }
    }

    /// Create from canonical bytes with validation
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::InvalidFormat`] if `bytes` is not 20 ASCII digits
    /// and [`DecodeError::NumericOverflow`] if it is above `u64::MAX`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let value = decode(bytes)?;
        Ok(encode(value))
    }

    /// Get the canonical bytes (zero-copy)
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; WIDTH] {
        &self.bytes
    }

    /// Get the canonical form as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Safety: the buffer only ever holds ASCII digits
        unsafe { std::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Consume and return the canonical bytes
    #[must_use]
    pub const fn into_bytes(self) -> [u8; WIDTH] {
        self.bytes
    }

    /// The minimal decimal form, borrowed from the canonical buffer
    #[must_use]
    pub fn display_str(&self) -> &str {
        display(self.as_str())
    }

    /// The native value
    #[must_use]
    pub fn value(&self) -> u64 {
        let value = decode(self.bytes);
        debug_assert!(value.is_ok(), "U64Text out of range: {:?}", self.as_str());
        value.unwrap_or_default()
    }
}

impl Default for U64Text {
    fn default() -> Self {
        Self::MIN
    }
}

impl FromStr for U64Text {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        encode_from_text(s)
    }
}

impl TryFrom<&[u8]> for U64Text {
    type Error = DecodeError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl fmt::Display for U64Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_str())
    }
}

impl fmt::Debug for U64Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("U64Text").field(&self.as_str()).finish()
    }
}

impl AsRef<[u8]> for U64Text {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl AsRef<str> for U64Text {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<u64> for U64Text {
    fn from(value: u64) -> Self {
        encode(value)
    }
}

impl From<U64Text> for u64 {
    fn from(text: U64Text) -> Self {
        text.value()
    }
}

// Smaller unsigned types — widen to u64
impl From<u8> for U64Text {
    fn from(value: u8) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u16> for U64Text {
    fn from(value: u16) -> Self {
        Self::from(u64::from(value))
    }
}

impl From<u32> for U64Text {
    fn from(value: u32) -> Self {
        Self::from(u64::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_match_encoder() {
        assert_eq!(U64Text::MIN, encode(0));
        assert_eq!(U64Text::MAX, encode(u64::MAX));
        assert_eq!(U64Text::default(), U64Text::MIN);
    }

    #[test]
    fn test_parse_free_text() {
        let t: U64Text = "1000".parse().unwrap();
        assert_eq!(t.as_str(), "00000000000000001000");
        assert_eq!(t.value(), 1000);
    }

    #[test]
    fn test_parse_rejects_sign() {
        assert!("-1".parse::<U64Text>().is_err());
        assert!("+1".parse::<U64Text>().is_err());
    }

    #[test]
    fn test_display_is_minimal() {
        assert_eq!(U64Text::from(42u64).to_string(), "42");
        assert_eq!(U64Text::MIN.to_string(), "0");
        assert_eq!(U64Text::MAX.to_string(), "18446744073709551615");
    }

    #[test]
    fn test_debug_shows_canonical_form() {
        assert_eq!(
            format!("{:?}", U64Text::from(7u8)),
            "U64Text(\"00000000000000000007\")"
        );
    }

    #[test]
    fn test_from_bytes_validates_range() {
        assert_eq!(
            U64Text::from_bytes(b"99999999999999999999"),
            Err(DecodeError::NumericOverflow)
        );
        assert!(matches!(
            U64Text::try_from(&b"123"[..]),
            Err(DecodeError::InvalidFormat(_))
        ));
        let t = U64Text::try_from(&b"09223372036854775808"[..]).unwrap();
        assert_eq!(u64::from(t), 9_223_372_036_854_775_808);
    }

    #[test]
    fn test_ord_matches_numeric_order() {
        let values = [0u64, 1, 9, 10, 99, 100, i64::MAX as u64, 1 << 63, u64::MAX];
        let texts: Vec<U64Text> = values.iter().map(|&v| U64Text::from(v)).collect();
        for i in 1..texts.len() {
            assert!(
                texts[i - 1] < texts[i],
                "Order not preserved: {} < {} failed",
                values[i - 1],
                values[i]
            );
        }
    }

    #[test]
    fn test_value_matches_source() {
        for v in [0u64, 1, 10, 9_007_199_254_740_993, 1 << 63, u64::MAX] {
            assert_eq!(U64Text::from(v).value(), v);
        }
        assert_eq!(U64Text::MAX.value(), u64::MAX);
    }

    #[test]
    fn test_widening_impls() {
        assert_eq!(U64Text::from(42u8), U64Text::from(42u64));
        assert_eq!(U64Text::from(42u16), U64Text::from(42u64));
        assert_eq!(U64Text::from(42u32), U64Text::from(42u64));
    }
}
