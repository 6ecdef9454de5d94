use std::borrow::Cow;

/// Check that `s` matches `^(-|\+)?[0-9,_.]+$`.
pub(crate) fn is_numeric_string(s: &str) -> bool {
    let body = s.strip_prefix(['+', '-']).unwrap_or(s);
    !body.is_empty()
        && body
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b',' | b'_' | b'.'))
}

/// Remove the `,` and `_` grouping separators.
pub(crate) fn strip_separators(s: &str) -> Cow<'_, str> {
    if s.contains([',', '_']) {
        Cow::Owned(s.chars().filter(|&c| c != ',' && c != '_').collect())
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_numeric_strings() {
        for s in ["0", "42", "-1", "+1", "1,234", "1_0000", ".1", "0.", "127.0.0.1", ",", "_._"] {
            assert!(is_numeric_string(s), "{s:?} should be accepted");
        }
    }

    #[test]
    fn rejects_non_numeric_strings() {
        for s in [
            "", "-", "+", "foobar", "1+2", "*1", "--1", "+-1", "1-", " 1", "1 ", "1e5", "１２", "0x10",
        ] {
            assert!(!is_numeric_string(s), "{s:?} should be rejected");
        }
    }

    #[test]
    fn strips_separators() {
        assert_eq!(strip_separators("1,234"), "1234");
        assert_eq!(strip_separators("1_2345_6789"), "123456789");
        assert_eq!(strip_separators("-1,2_3.4_5"), "-123.45");
        assert!(matches!(strip_separators("1234.5"), Cow::Borrowed("1234.5")));
    }
}
