//! Character-level helpers for katakana readings.

/// True for any codepoint of the Katakana block, ー included.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Katakana letters that have a hiragana counterpart 0x60 codepoints below
/// (ァ U+30A1 ..= ヶ U+30F6).
fn has_hiragana_form(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

/// Convert a katakana string to hiragana.
/// The prolonged sound mark ー and non-katakana characters pass through unchanged.
pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if has_hiragana_form(c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Non-empty and katakana only, as every reading of the default vocabulary is.
#[cfg(test)]
pub(crate) fn is_katakana_reading(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_katakana)
}
