use crate::digits::WIDTH;
use crate::validator::is_canonical;

/// Render a canonical text as minimal decimal.
///
/// Leading zeros are stripped and an all-zero input gives `"0"`. Input that is
/// not canonical comes back unchanged, so the function can be applied to
/// mixed columns without failing. The result always borrows from `text`.
#[must_use]
pub fn display(text: &str) -> &str {
    if !is_canonical(text.as_bytes()) {
        return text;
    }
    // The last digit is kept even when it is '0'
    let start = text
        .bytes()
        .position(|b| b != b'0')
        .unwrap_or(WIDTH - 1);
    &text[start..]
}

/// Null-propagating form of [`display`]
#[must_use]
pub fn display_opt(text: Option<&str>) -> Option<&str> {
    text.map(display)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_leading_zeros() {
        assert_eq!(display("00000000000000000042"), "42");
        assert_eq!(display("00000000000000000001"), "1");
        assert_eq!(display("01234567890123456789"), "1234567890123456789");
    }

    #[test]
    fn test_all_zeros() {
        assert_eq!(display("00000000000000000000"), "0");
    }

    #[test]
    fn test_no_leading_zero() {
        assert_eq!(display("18446744073709551615"), "18446744073709551615");
        assert_eq!(display("12345678901234567890"), "12345678901234567890");
    }

    #[test]
    fn test_interior_zeros_kept() {
        assert_eq!(display("00000000000000100200"), "100200");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(display("invalid_format"), "invalid_format");
        assert_eq!(display("123456789"), "123456789");
        assert_eq!(display("1234567890abcdef1234"), "1234567890abcdef1234");
        assert_eq!(display(""), "");
        // Shape-valid but out of range still displays
        assert_eq!(display("99999999999999999999"), "99999999999999999999");
    }

    #[test]
    fn test_null_propagates() {
        assert_eq!(display_opt(None), None);
        assert_eq!(display_opt(Some("00000000000000000010")), Some("10"));
    }
}
