use crate::vocab::Vocabulary;

/// Append the digit-by-digit reading of `text`. Characters without a literal
/// reading (separators, signs) are skipped.
pub(crate) fn push_literal(vocab: &Vocabulary, out: &mut String, text: &str) {
    for c in text.chars() {
        if let Some(r) = vocab.literal(c) {
            out.push_str(r);
        }
    }
}
