// ============================================================================
// Decimal Grammar
// Syntactic validation of signed decimal strings
// ============================================================================

/// Strip space, tab, CR and LF from both ends.
#[inline]
pub(crate) fn trim_ascii_ws(text: &str) -> &str {
    text.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Split an optional leading `+`/`-`. Returns `true` for negative.
#[inline]
pub(crate) fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (false, rest)
    } else {
        (false, text)
    }
}

/// Check whether `text` is a signed decimal number.
///
/// Accepted: surrounding ASCII whitespace, one optional sign, then digits
/// with at most one `.`, at least one digit overall.
///
/// ```
/// use crypto_decimal::numeric::is_valid_decimal;
///
/// assert!(is_valid_decimal("  -123.45  "));
/// assert!(is_valid_decimal("-.01"));
/// assert!(!is_valid_decimal("123.45.67"));
/// assert!(!is_valid_decimal("+"));
/// ```
pub fn is_valid_decimal(text: &str) -> bool {
    let (_, body) = split_sign(trim_ascii_ws(text));

    let mut digits = 0usize;
    let mut dots = 0usize;
    for b in body.bytes() {
        match b {
            b'0'..=b'9' => digits += 1,
            b'.' => {
                dots += 1;
                if dots > 1 {
                    return false;
                }
            }
            _ => return false,
        }
    }
    digits > 0
}
