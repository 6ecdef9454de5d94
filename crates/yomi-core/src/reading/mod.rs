//! Numeric string to katakana reading.
//!
//! Validates the input, strips `,`/`_` separators, then either reads the
//! number with place values (万, 億, 兆, 京 groups, irregular compounds and
//! sokuon) or falls back to a digit-by-digit reading for inputs such as
//! `127.0.0.1`, `0120` or integers longer than 20 digits.

mod euphony;
mod group;
mod literal;
mod numeric_str;
mod policy;
mod split;

#[cfg(test)]
mod tests;

use tracing::{debug, debug_span};

use crate::unicode::katakana_to_hiragana;
use crate::vocab::Vocabulary;

use euphony::before_point;
use group::read_integer_part;
use literal::push_literal;
use numeric_str::is_numeric_string;
use policy::{classify, ReadingPlan};

pub use group::{Slot, Tier};
pub use policy::MAX_STRUCTURED_INTEGER_DIGITS;
pub use split::Sign;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    #[error("input string is not numeric: {0:?}")]
    NotNumericString(String),
}

/// Read a numeric string with the global vocabulary.
///
/// Accepted input is `^(-|\+)?[0-9,_.]+$`; `,` and `_` are ignored as
/// separators. Inputs with several dots, an integer part with a leading
/// zero, or more than [`MAX_STRUCTURED_INTEGER_DIGITS`] integer digits are
/// read digit by digit.
pub fn read_string(input: &str) -> Result<String, ReadError> {
    read_string_with(Vocabulary::global(), input)
}

/// Read a numeric string with an explicit vocabulary.
pub fn read_string_with(vocab: &Vocabulary, input: &str) -> Result<String, ReadError> {
    let _span = debug_span!("read_string", len = input.len()).entered();

    if !is_numeric_string(input) {
        debug!("rejected non-numeric input");
        return Err(ReadError::NotNumericString(input.to_string()));
    }

    let mut out = String::new();
    match classify(input) {
        ReadingPlan::Literal(raw) => push_literal(vocab, &mut out, raw),
        ReadingPlan::SignedLiteral { sign, digits } => {
            out.push_str(vocab.sign_word(sign));
            push_literal(vocab, &mut out, &digits);
        }
        ReadingPlan::Structured {
            sign,
            integer,
            decimal,
        } => {
            out.push_str(vocab.sign_word(sign));
            let integer_reading = read_integer_part(vocab, &integer);
            match decimal.as_deref() {
                Some(dec) if !dec.is_empty() => {
                    out.push_str(&before_point(vocab, &integer_reading));
                    out.push_str(vocab.point());
                    push_literal(vocab, &mut out, dec);
                }
                _ => out.push_str(&integer_reading),
            }
        }
    }
    Ok(out)
}

/// Same as [`read_string`], rendered in hiragana.
pub fn read_string_hiragana(input: &str) -> Result<String, ReadError> {
    read_string(input).map(|r| katakana_to_hiragana(&r))
}

/// Read a signed integer through its decimal text.
pub fn read_int(i: i64) -> String {
    read_string(&i.to_string()).unwrap_or_default()
}

/// Read an unsigned integer through its decimal text.
pub fn read_uint(u: u64) -> String {
    read_string(&u.to_string()).unwrap_or_default()
}

/// Read a float through its shortest round-trip decimal text (`Display`
/// never uses exponent notation). `NaN` and infinities read as "".
pub fn read_float(f: f64) -> String {
    if !f.is_finite() {
        debug!(value = %f, "non-finite float has no reading");
        return String::new();
    }
    read_string(&f.to_string()).unwrap_or_default()
}
