use crate::digits::WIDTH;
use std::cmp::Ordering;

/// Total-order comparator for the `U64TEXT` collation
///
/// When both inputs are 20 bytes long they are compared byte by byte. For
/// zero-padded decimal digits this is exactly numeric order.
///
/// # Length fallback
///
/// If either input is not 20 bytes long, the result depends on the lengths
/// **only**: the shorter one sorts first and the content is ignored. Two
/// non-canonical inputs of the same length compare `Equal`. This keeps the
/// order total for foreign data but is not numeric: `"5"` sorts before `"10"`
/// because it is shorter, and `"9"` sorts before `"10"` for the same reason,
/// while `"10"` and `"99"` are equal. Do not rely on it for unpadded legacy
/// values.
#[must_use]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    if a.len() != WIDTH || b.len() != WIDTH {
        return a.len().cmp(&b.len());
    }
    a.cmp(b)
}
