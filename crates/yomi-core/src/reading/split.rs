/// Optional leading sign of a numeric string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Unsigned,
    Positive,
    Negative,
}

/// Strip one leading `+` or `-`.
pub(crate) fn split_sign(s: &str) -> (Sign, &str) {
    if let Some(rest) = s.strip_prefix('-') {
        return (Sign::Negative, rest);
    }
    if let Some(rest) = s.strip_prefix('+') {
        return (Sign::Positive, rest);
    }
    (Sign::Unsigned, s)
}

/// Text before the first dot, or the whole string.
pub(crate) fn integer_part(unsigned: &str) -> &str {
    unsigned.split_once('.').map_or(unsigned, |(int, _)| int)
}

/// Split on the (single) dot into integer and decimal part.
pub(crate) fn split_decimal(unsigned: &str) -> (&str, Option<&str>) {
    match unsigned.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (unsigned, None),
    }
}
