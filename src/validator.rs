use crate::digits::WIDTH;

/// Check whether `bytes` is a canonical u64 text: exactly 20 ASCII digits.
///
/// Shape only. Twenty nines pass here even though they exceed `u64::MAX`;
/// [`decode`](crate::decode) is the range check.
#[must_use]
#[inline]
pub fn is_canonical(bytes: &[u8]) -> bool {
    bytes.len() == WIDTH && bytes.iter().all(u8::is_ascii_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_twenty_digits() {
        assert!(is_canonical(b"00000000000000000000"));
        assert!(is_canonical(b"18446744073709551615"));
        assert!(is_canonical(b"99999999999999999999"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_canonical(b""));
        assert!(!is_canonical(b"0000000000000000000"));
        assert!(!is_canonical(b"000000000000000000000"));
        assert!(!is_canonical(b"42"));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(!is_canonical(b"1234567890123456789a"));
        assert!(!is_canonical(b"+1234567890123456789"));
        assert!(!is_canonical(b" 1234567890123456789"));
        assert!(!is_canonical(b"1234567890abcdef1234"));
    }
}
