//! Sokuon (促音便) at group and decimal-point boundaries.

use crate::vocab::Vocabulary;

/// Rewrite the ending of `reading` with the first matching sokuon rule
/// (イチ → イッ, ハチ → ハッ, ジュウ → ジッ). Unchanged if none matches.
pub(crate) fn apply_sokuon(vocab: &Vocabulary, reading: &str) -> String {
    for rule in vocab.sokuon_rules() {
        if let Some(stem) = reading.strip_suffix(rule.ending.as_str()) {
            return format!("{stem}{}", rule.contracted);
        }
    }
    reading.to_string()
}

/// Integer reading as it sounds in front of テン. A bare ゼロ becomes レイ.
pub(crate) fn before_point(vocab: &Vocabulary, integer_reading: &str) -> String {
    if integer_reading == vocab.zero() {
        return apply_sokuon(vocab, vocab.zero_before_point());
    }
    apply_sokuon(vocab, integer_reading)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contracts_known_endings() {
        let v = Vocabulary::global();
        assert_eq!(apply_sokuon(v, "イチ"), "イッ");
        assert_eq!(apply_sokuon(v, "ハチジュウハチ"), "ハチジュウハッ");
        assert_eq!(apply_sokuon(v, "ジュウ"), "ジッ");
        assert_eq!(apply_sokuon(v, "センヒャクジュウイチ"), "センヒャクジュウイッ");
    }

    #[test]
    fn other_endings_untouched() {
        let v = Vocabulary::global();
        assert_eq!(apply_sokuon(v, "ニ"), "ニ");
        assert_eq!(apply_sokuon(v, "ヨンジュウニ"), "ヨンジュウニ");
        assert_eq!(apply_sokuon(v, "ヒャク"), "ヒャク");
        assert_eq!(apply_sokuon(v, ""), "");
    }

    #[test]
    fn zero_before_point_becomes_rei() {
        let v = Vocabulary::global();
        assert_eq!(before_point(v, "ゼロ"), "レイ");
        assert_eq!(before_point(v, "ジュウ"), "ジッ");
        assert_eq!(before_point(v, ""), "");
    }
}
